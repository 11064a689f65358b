// Pure timer decisions for a single task.
//
// A task is Idle when none of its entries is open and Running when exactly one is.
// Deciding never touches storage; the handlers persist what is decided here and
// the store re-checks the one-open-entry rule atomically.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::tasks::core::task::TaskView;
use crate::modules::tasks::core::time_entry::TimeEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running(TimeEntry),
}

impl TimerState {
    pub fn of(view: &TaskView) -> Self {
        match view.open_entry() {
            Some(entry) => Self::Running(entry.clone()),
            None => Self::Idle,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TimerError {
    #[error("Timer is already running for this task")]
    AlreadyRunning,

    #[error("No active timer found for this task")]
    NotRunning,
}

/// Idle -> Running. The store moves the task to `in_progress` as it records the entry.
pub fn decide_start(
    state: &TimerState,
    task_id: Uuid,
    now: DateTime<Utc>,
) -> Result<TimeEntry, TimerError> {
    match state {
        TimerState::Idle => Ok(TimeEntry::open(task_id, now)),
        TimerState::Running(_) => Err(TimerError::AlreadyRunning),
    }
}

/// Running -> Idle. The task status is left alone.
pub fn decide_stop(state: &TimerState, now: DateTime<Utc>) -> Result<TimeEntry, TimerError> {
    match state {
        TimerState::Running(entry) => Ok(entry.clone().close(now)),
        TimerState::Idle => Err(TimerError::NotRunning),
    }
}
