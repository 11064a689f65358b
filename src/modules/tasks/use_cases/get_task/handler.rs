use crate::modules::tasks::adapters::outbound::task_repository::TaskRepository;
use crate::modules::tasks::core::task::TaskView;
use crate::shared::application::errors::ApplicationError;
use std::sync::Arc;
use uuid::Uuid;

pub struct GetTaskHandler<TTasks>
where
    TTasks: TaskRepository + 'static,
{
    tasks: Arc<TTasks>,
}

impl<TTasks> GetTaskHandler<TTasks>
where
    TTasks: TaskRepository + 'static,
{
    pub fn new(tasks: Arc<TTasks>) -> Self {
        Self { tasks }
    }

    /// A task owned by someone else is reported exactly like a missing one.
    pub async fn handle(&self, user_id: Uuid, task_id: Uuid) -> Result<TaskView, ApplicationError> {
        self.tasks
            .find_task(user_id, task_id)
            .await?
            .ok_or(ApplicationError::NotFound("task"))
    }
}
