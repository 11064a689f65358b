use crate::modules::users::core::user::User;
use crate::shared::infrastructure::store::StoreError;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fails with `StoreError::DuplicateEmail` when the email is taken.
    async fn insert_user(&self, user: User) -> Result<(), StoreError>;
    async fn find_user(&self, user_id: Uuid) -> Result<Option<User>, StoreError>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
}
