use crate::modules::tasks::adapters::outbound::task_repository::TaskRepository;
use crate::modules::tasks::core::time_entry::TimeEntry;
use crate::modules::tasks::core::timer::{TimerError, TimerState, decide_stop};
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::store::StoreError;
use std::sync::Arc;
use uuid::Uuid;

pub struct StopTimerHandler<TTasks>
where
    TTasks: TaskRepository + 'static,
{
    tasks: Arc<TTasks>,
    clock: Arc<dyn Clock>,
}

impl<TTasks> StopTimerHandler<TTasks>
where
    TTasks: TaskRepository + 'static,
{
    pub fn new(tasks: Arc<TTasks>, clock: Arc<dyn Clock>) -> Self {
        Self { tasks, clock }
    }

    /// Closes the open entry. The task status is left as it is.
    pub async fn handle(&self, user_id: Uuid, task_id: Uuid) -> Result<TimeEntry, ApplicationError> {
        let view = self
            .tasks
            .find_task(user_id, task_id)
            .await?
            .ok_or(ApplicationError::NotFound("task"))?;

        let closed = decide_stop(&TimerState::of(&view), self.clock.now())
            .map_err(|e| ApplicationError::InvalidState(e.to_string()))?;

        match self.tasks.close_time_entry(closed.clone()).await {
            Ok(()) => {
                tracing::info!(%task_id, duration = closed.duration, "timer stopped");
                Ok(closed)
            }
            Err(StoreError::NoOpenEntry { .. }) => Err(ApplicationError::InvalidState(
                TimerError::NotRunning.to_string(),
            )),
            Err(e) => Err(e.into()),
        }
    }
}
