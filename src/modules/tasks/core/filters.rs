use serde::Deserialize;

use crate::modules::tasks::core::task::{Task, TaskPriority, TaskStatus};

/// Optional list filters, AND-combined. Blank strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TaskFilters {
    pub status: Option<TaskStatus>,
    pub category: Option<String>,
    pub priority: Option<TaskPriority>,
    pub search: Option<String>,
}

impl TaskFilters {
    pub fn matches(&self, task: &Task) -> bool {
        if self.status.is_some_and(|status| task.status != status) {
            return false;
        }
        if self.priority.is_some_and(|priority| task.priority != priority) {
            return false;
        }
        if let Some(category) = non_blank(&self.category) {
            if task.category.as_deref() != Some(category) {
                return false;
            }
        }
        if let Some(search) = non_blank(&self.search) {
            if !task.title.to_lowercase().contains(&search.to_lowercase()) {
                return false;
            }
        }
        true
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
