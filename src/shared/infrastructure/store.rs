use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("email already registered: {email}")]
    DuplicateEmail { email: String },

    #[error("task not found: {task_id}")]
    TaskNotFound { task_id: Uuid },

    #[error("task {task_id} already has an open time entry")]
    OpenEntryExists { task_id: Uuid },

    #[error("time entry {time_entry_id} is not open")]
    NoOpenEntry { time_entry_id: Uuid },

    #[error("backend error: {0}")]
    Backend(String),
}

pub mod in_memory;
