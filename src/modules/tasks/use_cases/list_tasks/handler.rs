use crate::modules::tasks::adapters::outbound::task_repository::TaskRepository;
use crate::modules::tasks::core::filters::TaskFilters;
use crate::modules::tasks::core::task::TaskView;
use crate::shared::application::errors::ApplicationError;
use std::sync::Arc;
use uuid::Uuid;

pub struct ListTasksHandler<TTasks>
where
    TTasks: TaskRepository + 'static,
{
    tasks: Arc<TTasks>,
}

impl<TTasks> ListTasksHandler<TTasks>
where
    TTasks: TaskRepository + 'static,
{
    pub fn new(tasks: Arc<TTasks>) -> Self {
        Self { tasks }
    }

    pub async fn handle(
        &self,
        user_id: Uuid,
        filters: &TaskFilters,
    ) -> Result<Vec<TaskView>, ApplicationError> {
        Ok(self.tasks.list_tasks(user_id, filters).await?)
    }
}
