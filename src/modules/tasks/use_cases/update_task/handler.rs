use crate::modules::tasks::adapters::outbound::task_repository::TaskRepository;
use crate::modules::tasks::core::task::TaskView;
use crate::modules::tasks::use_cases::update_task::command::UpdateTask;
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::store::StoreError;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

pub struct UpdateTaskHandler<TTasks>
where
    TTasks: TaskRepository + 'static,
{
    tasks: Arc<TTasks>,
    clock: Arc<dyn Clock>,
}

impl<TTasks> UpdateTaskHandler<TTasks>
where
    TTasks: TaskRepository + 'static,
{
    pub fn new(tasks: Arc<TTasks>, clock: Arc<dyn Clock>) -> Self {
        Self { tasks, clock }
    }

    pub async fn handle(
        &self,
        user_id: Uuid,
        task_id: Uuid,
        command: UpdateTask,
    ) -> Result<TaskView, ApplicationError> {
        command.validate()?;

        match self
            .tasks
            .update_task(user_id, task_id, command.into(), self.clock.now())
            .await
        {
            Ok(view) => Ok(view),
            Err(StoreError::TaskNotFound { .. }) => Err(ApplicationError::NotFound("task")),
            Err(e) => Err(e.into()),
        }
    }
}
