use crate::modules::auth::core::passwords::PasswordHasher;
use crate::modules::auth::core::tokens::TokenService;
use crate::modules::auth::use_cases::register::command::RegisterUser;
use crate::modules::users::adapters::outbound::user_repository::UserRepository;
use crate::modules::users::core::user::{PublicUser, User};
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::store::StoreError;
use serde::Serialize;
use std::sync::Arc;
use validator::Validate;

#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub user: PublicUser,
}

pub struct RegisterUserHandler<TUsers>
where
    TUsers: UserRepository + 'static,
{
    users: Arc<TUsers>,
    hasher: PasswordHasher,
    tokens: Arc<TokenService>,
    clock: Arc<dyn Clock>,
}

impl<TUsers> RegisterUserHandler<TUsers>
where
    TUsers: UserRepository + 'static,
{
    pub fn new(
        users: Arc<TUsers>,
        hasher: PasswordHasher,
        tokens: Arc<TokenService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
            clock,
        }
    }

    pub async fn handle(&self, command: RegisterUser) -> Result<AuthResponse, ApplicationError> {
        command.validate()?;

        if self.users.find_user_by_email(&command.email).await?.is_some() {
            return Err(ApplicationError::Conflict("Email already exists".into()));
        }

        let password_hash = self
            .hasher
            .hash(&command.password)
            .await
            .map_err(|e| ApplicationError::Unexpected(e.to_string()))?;
        let user = User::new(command.email, password_hash, command.name, self.clock.now());

        match self.users.insert_user(user.clone()).await {
            Ok(()) => {}
            Err(StoreError::DuplicateEmail { .. }) => {
                return Err(ApplicationError::Conflict("Email already exists".into()));
            }
            Err(e) => return Err(e.into()),
        }

        let access_token = self
            .tokens
            .issue(&user)
            .map_err(|e| ApplicationError::Unexpected(e.to_string()))?;
        tracing::info!(user_id = %user.id, "user registered");

        Ok(AuthResponse {
            access_token,
            user: PublicUser::from(&user),
        })
    }
}
