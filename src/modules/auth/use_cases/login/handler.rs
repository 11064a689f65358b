use crate::modules::auth::core::passwords::PasswordHasher;
use crate::modules::auth::core::tokens::TokenService;
use crate::modules::auth::use_cases::login::command::LoginUser;
use crate::modules::auth::use_cases::register::handler::AuthResponse;
use crate::modules::users::adapters::outbound::user_repository::UserRepository;
use crate::modules::users::core::user::PublicUser;
use crate::shared::application::errors::ApplicationError;
use std::sync::Arc;
use validator::Validate;

pub struct LoginHandler<TUsers>
where
    TUsers: UserRepository + 'static,
{
    users: Arc<TUsers>,
    hasher: PasswordHasher,
    tokens: Arc<TokenService>,
}

impl<TUsers> LoginHandler<TUsers>
where
    TUsers: UserRepository + 'static,
{
    pub fn new(users: Arc<TUsers>, hasher: PasswordHasher, tokens: Arc<TokenService>) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    /// Unknown email and wrong password fail identically.
    pub async fn handle(&self, command: LoginUser) -> Result<AuthResponse, ApplicationError> {
        if command.validate().is_err() {
            return Err(ApplicationError::invalid_credentials());
        }

        let Some(user) = self.users.find_user_by_email(&command.email).await? else {
            tracing::debug!("login for unknown email");
            return Err(ApplicationError::invalid_credentials());
        };

        let matches = self
            .hasher
            .verify(&command.password, &user.password_hash)
            .await
            .map_err(|e| ApplicationError::Unexpected(e.to_string()))?;
        if !matches {
            tracing::debug!(user_id = %user.id, "password mismatch");
            return Err(ApplicationError::invalid_credentials());
        }

        let access_token = self
            .tokens
            .issue(&user)
            .map_err(|e| ApplicationError::Unexpected(e.to_string()))?;
        tracing::info!(user_id = %user.id, "user logged in");
        Ok(AuthResponse {
            access_token,
            user: PublicUser::from(&user),
        })
    }
}
