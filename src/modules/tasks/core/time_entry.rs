use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// One tracked interval of a task. `end_time == None` means the timer is running.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: Uuid,
    pub task_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    /// Whole seconds, fixed when the entry is closed. Zero while open.
    pub duration: i64,
}

impl TimeEntry {
    pub fn open(task_id: Uuid, start_time: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::now_v7(),
            task_id,
            start_time,
            end_time: None,
            duration: 0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }

    /// Closes the entry at `end_time`. Clock skew never yields a negative duration.
    pub fn close(self, end_time: DateTime<Utc>) -> Self {
        let duration = (end_time - self.start_time).num_seconds().max(0);
        Self {
            end_time: Some(end_time),
            duration,
            ..self
        }
    }
}

/// Stored tracked time of a task in seconds. Open entries contribute nothing.
pub fn total_time(entries: &[TimeEntry]) -> i64 {
    entries
        .iter()
        .filter(|entry| !entry.is_open())
        .map(|entry| entry.duration)
        .sum()
}
