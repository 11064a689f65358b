use crate::modules::users::adapters::outbound::user_repository::UserRepository;
use crate::modules::users::core::user::PublicUser;
use crate::shared::application::errors::ApplicationError;
use std::sync::Arc;
use uuid::Uuid;

pub struct GetProfileHandler<TUsers>
where
    TUsers: UserRepository + 'static,
{
    users: Arc<TUsers>,
}

impl<TUsers> GetProfileHandler<TUsers>
where
    TUsers: UserRepository + 'static,
{
    pub fn new(users: Arc<TUsers>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, user_id: Uuid) -> Result<PublicUser, ApplicationError> {
        self.users
            .find_user(user_id)
            .await?
            .map(|user| PublicUser::from(&user))
            .ok_or(ApplicationError::NotFound("user"))
    }
}
