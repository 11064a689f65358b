use serde::Serialize;

use crate::modules::stats::core::aggregate::round_one_decimal;
use crate::modules::tasks::core::task::{TaskPriority, TaskStatus, TaskView};

pub const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub pending: i64,
    pub in_progress: i64,
    pub completed: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PriorityCounts {
    pub low: i64,
    pub medium: i64,
    pub high: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTime {
    pub category: String,
    pub minutes: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductivityBreakdown {
    pub by_status: StatusCounts,
    pub by_priority: PriorityCounts,
    /// Tracked minutes per category, sorted by category name.
    pub by_category: Vec<CategoryTime>,
}

pub fn breakdown(views: &[TaskView]) -> ProductivityBreakdown {
    let mut by_status = StatusCounts::default();
    let mut by_priority = PriorityCounts::default();
    let mut seconds_by_category = std::collections::BTreeMap::<&str, i64>::new();

    for view in views {
        match view.task.status {
            TaskStatus::Pending => by_status.pending += 1,
            TaskStatus::InProgress => by_status.in_progress += 1,
            TaskStatus::Completed => by_status.completed += 1,
        }
        match view.task.priority {
            TaskPriority::Low => by_priority.low += 1,
            TaskPriority::Medium => by_priority.medium += 1,
            TaskPriority::High => by_priority.high += 1,
        }
        let category = view.task.category.as_deref().unwrap_or(UNCATEGORIZED);
        *seconds_by_category.entry(category).or_default() += view.total_time;
    }

    ProductivityBreakdown {
        by_status,
        by_priority,
        by_category: seconds_by_category
            .into_iter()
            .map(|(category, seconds)| CategoryTime {
                category: category.to_string(),
                minutes: round_one_decimal(seconds as f64 / 60.0),
            })
            .collect(),
    }
}
