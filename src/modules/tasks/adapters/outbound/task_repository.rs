use crate::modules::tasks::core::filters::TaskFilters;
use crate::modules::tasks::core::task::{Task, TaskPatch, TaskView};
use chrono::{DateTime, Utc};
use crate::modules::tasks::core::time_entry::TimeEntry;
use crate::shared::infrastructure::store::StoreError;
use async_trait::async_trait;
use uuid::Uuid;

/// Task and time entry persistence. Every read is scoped by the owning user.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn insert_task(&self, task: Task) -> Result<(), StoreError>;

    /// Owner's tasks matching `filters`, newest first.
    async fn list_tasks(
        &self,
        user_id: Uuid,
        filters: &TaskFilters,
    ) -> Result<Vec<TaskView>, StoreError>;

    async fn find_task(&self, user_id: Uuid, task_id: Uuid)
    -> Result<Option<TaskView>, StoreError>;

    /// Applies `patch` to the stored row and returns the result.
    async fn update_task(
        &self,
        user_id: Uuid,
        task_id: Uuid,
        patch: TaskPatch,
        now: DateTime<Utc>,
    ) -> Result<TaskView, StoreError>;

    /// Removes the task and its time entries.
    async fn delete_task(&self, user_id: Uuid, task_id: Uuid) -> Result<(), StoreError>;

    /// Inserts `entry` and marks the stored task `in_progress` in one step. Fails with
    /// `StoreError::OpenEntryExists` if the task already has an open entry.
    async fn open_time_entry(&self, user_id: Uuid, entry: TimeEntry) -> Result<(), StoreError>;

    /// Replaces a still-open entry with its closed form. Fails with
    /// `StoreError::NoOpenEntry` if it was closed in the meantime.
    async fn close_time_entry(&self, entry: TimeEntry) -> Result<(), StoreError>;
}
