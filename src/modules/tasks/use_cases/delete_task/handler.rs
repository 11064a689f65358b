use crate::modules::tasks::adapters::outbound::task_repository::TaskRepository;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::store::StoreError;
use std::sync::Arc;
use uuid::Uuid;

pub struct DeleteTaskHandler<TTasks>
where
    TTasks: TaskRepository + 'static,
{
    tasks: Arc<TTasks>,
}

impl<TTasks> DeleteTaskHandler<TTasks>
where
    TTasks: TaskRepository + 'static,
{
    pub fn new(tasks: Arc<TTasks>) -> Self {
        Self { tasks }
    }

    pub async fn handle(&self, user_id: Uuid, task_id: Uuid) -> Result<(), ApplicationError> {
        match self.tasks.delete_task(user_id, task_id).await {
            Ok(()) => {
                tracing::info!(%task_id, "task deleted");
                Ok(())
            }
            Err(StoreError::TaskNotFound { .. }) => Err(ApplicationError::NotFound("task")),
            Err(e) => Err(e.into()),
        }
    }
}
