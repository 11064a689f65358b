use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::modules::tasks::core::task::TaskPriority;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub priority: Option<TaskPriority>,
}

pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Empty optional text is stored as absent.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
