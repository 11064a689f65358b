use crate::modules::stats::core::breakdown::{ProductivityBreakdown, breakdown};
use crate::modules::tasks::adapters::outbound::task_repository::TaskRepository;
use crate::modules::tasks::core::filters::TaskFilters;
use crate::modules::users::adapters::outbound::user_repository::UserRepository;
use crate::shared::application::errors::ApplicationError;
use std::sync::Arc;
use uuid::Uuid;

pub struct ProductivityBreakdownHandler<TUsers, TTasks>
where
    TUsers: UserRepository + 'static,
    TTasks: TaskRepository + 'static,
{
    users: Arc<TUsers>,
    tasks: Arc<TTasks>,
}

impl<TUsers, TTasks> ProductivityBreakdownHandler<TUsers, TTasks>
where
    TUsers: UserRepository + 'static,
    TTasks: TaskRepository + 'static,
{
    pub fn new(users: Arc<TUsers>, tasks: Arc<TTasks>) -> Self {
        Self { users, tasks }
    }

    pub async fn handle(&self, user_id: Uuid) -> Result<ProductivityBreakdown, ApplicationError> {
        if self.users.find_user(user_id).await?.is_none() {
            return Err(ApplicationError::NotFound("user"));
        }
        let views = self
            .tasks
            .list_tasks(user_id, &TaskFilters::default())
            .await?;
        Ok(breakdown(&views))
    }
}
