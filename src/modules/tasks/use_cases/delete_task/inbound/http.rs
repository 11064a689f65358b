use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
};
use uuid::Uuid;

use crate::modules::auth::adapters::inbound::bearer::AuthenticatedUser;
use crate::shared::application::errors::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    task_id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApplicationError> {
    let Path(task_id) = task_id.map_err(|_| ApplicationError::NotFound("task"))?;
    state
        .delete_task_handler
        .handle(identity.user_id, task_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
