use crate::shared::infrastructure::store::StoreError;
use thiserror::Error;

/// Failure taxonomy shared by every use case handler. Each variant maps to one
/// caller-visible status in the inbound adapters.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    InvalidState(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("unexpected: {0}")]
    Unexpected(String),
}

impl ApplicationError {
    pub fn invalid_credentials() -> Self {
        Self::Unauthorized("Invalid credentials".to_string())
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Conflict(_) => "CONFLICT",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::NotFound(_) => "NOT_FOUND",
            Self::InvalidState(_) => "INVALID_STATE",
            Self::Validation(_) => "VALIDATION",
            Self::Store(_) | Self::Unexpected(_) => "INTERNAL",
        }
    }
}

impl From<validator::ValidationErrors> for ApplicationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let field_errors = errors.field_errors();
        let mut fields: Vec<&str> = field_errors.keys().map(|k| k.as_ref()).collect();
        fields.sort_unstable();
        Self::Validation(format!("invalid field(s): {}", fields.join(", ")))
    }
}
