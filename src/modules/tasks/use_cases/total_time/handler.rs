use crate::modules::tasks::adapters::outbound::task_repository::TaskRepository;
use crate::shared::application::errors::ApplicationError;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalTime {
    pub task_id: Uuid,
    /// Seconds across closed entries. A running timer adds nothing until stopped.
    pub total_time: i64,
}

pub struct TotalTimeHandler<TTasks>
where
    TTasks: TaskRepository + 'static,
{
    tasks: Arc<TTasks>,
}

impl<TTasks> TotalTimeHandler<TTasks>
where
    TTasks: TaskRepository + 'static,
{
    pub fn new(tasks: Arc<TTasks>) -> Self {
        Self { tasks }
    }

    pub async fn handle(&self, user_id: Uuid, task_id: Uuid) -> Result<TotalTime, ApplicationError> {
        let view = self
            .tasks
            .find_task(user_id, task_id)
            .await?
            .ok_or(ApplicationError::NotFound("task"))?;
        Ok(TotalTime {
            task_id,
            total_time: view.total_time,
        })
    }
}
