use crate::modules::tasks::adapters::outbound::task_repository::TaskRepository;
use crate::modules::tasks::core::time_entry::TimeEntry;
use crate::modules::tasks::core::timer::{TimerError, TimerState, decide_start};
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::store::StoreError;
use std::sync::Arc;
use uuid::Uuid;

pub struct StartTimerHandler<TTasks>
where
    TTasks: TaskRepository + 'static,
{
    tasks: Arc<TTasks>,
    clock: Arc<dyn Clock>,
}

impl<TTasks> StartTimerHandler<TTasks>
where
    TTasks: TaskRepository + 'static,
{
    pub fn new(tasks: Arc<TTasks>, clock: Arc<dyn Clock>) -> Self {
        Self { tasks, clock }
    }

    pub async fn handle(&self, user_id: Uuid, task_id: Uuid) -> Result<TimeEntry, ApplicationError> {
        let view = self
            .tasks
            .find_task(user_id, task_id)
            .await?
            .ok_or(ApplicationError::NotFound("task"))?;

        let entry = decide_start(&TimerState::of(&view), task_id, self.clock.now())
            .map_err(|e| ApplicationError::InvalidState(e.to_string()))?;
        if view.task.is_completed() {
            tracing::info!(%task_id, "timer started on a completed task, reopening it");
        }

        match self.tasks.open_time_entry(user_id, entry.clone()).await {
            Ok(()) => {
                tracing::info!(%task_id, time_entry_id = %entry.id, "timer started");
                Ok(entry)
            }
            // Lost a race against a concurrent start.
            Err(StoreError::OpenEntryExists { .. }) => Err(ApplicationError::InvalidState(
                TimerError::AlreadyRunning.to_string(),
            )),
            Err(StoreError::TaskNotFound { .. }) => Err(ApplicationError::NotFound("task")),
            Err(e) => Err(e.into()),
        }
    }
}
