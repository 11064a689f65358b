use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::tasks::core::time_entry::{TimeEntry, total_time};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub category: Option<String>,
    pub priority: TaskPriority,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// A running timer puts the task `in_progress`, whatever its prior status.
    pub fn timer_started(self, now: DateTime<Utc>) -> Self {
        Self {
            status: TaskStatus::InProgress,
            updated_at: now,
            ..self
        }
    }
}

/// Field-wise changes to a stored task. `None` keeps the stored value; an inner
/// `None` clears an optional field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub status: Option<TaskStatus>,
    pub category: Option<Option<String>>,
    pub priority: Option<TaskPriority>,
}

impl TaskPatch {
    pub fn apply(self, task: Task, now: DateTime<Utc>) -> Task {
        Task {
            title: self.title.unwrap_or(task.title),
            description: self.description.unwrap_or(task.description),
            status: self.status.unwrap_or(task.status),
            category: self.category.unwrap_or(task.category),
            priority: self.priority.unwrap_or(task.priority),
            updated_at: now,
            ..task
        }
    }
}

/// A task together with its time entries, oldest entry first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskView {
    #[serde(flatten)]
    pub task: Task,
    pub time_entries: Vec<TimeEntry>,
    pub total_time: i64,
}

impl TaskView {
    pub fn new(task: Task, mut time_entries: Vec<TimeEntry>) -> Self {
        time_entries.sort_by_key(|entry| (entry.start_time, entry.id));
        let total_time = total_time(&time_entries);
        Self {
            task,
            time_entries,
            total_time,
        }
    }

    pub fn open_entry(&self) -> Option<&TimeEntry> {
        self.time_entries.iter().find(|entry| entry.is_open())
    }
}
