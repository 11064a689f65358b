use serde::Deserialize;
use validator::Validate;

use crate::modules::tasks::core::task::{TaskPatch, TaskPriority, TaskStatus};
use crate::modules::tasks::use_cases::create_task::command::{not_blank, optional_text};

/// Partial update. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    #[validate(custom(function = "not_blank"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub category: Option<String>,
    pub priority: Option<TaskPriority>,
}

impl From<UpdateTask> for TaskPatch {
    fn from(command: UpdateTask) -> Self {
        Self {
            title: command.title.map(|title| title.trim().to_string()),
            description: command.description.map(|text| optional_text(Some(text))),
            status: command.status,
            category: command.category.map(|text| optional_text(Some(text))),
            priority: command.priority,
        }
    }
}
