use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
};
use uuid::Uuid;

use crate::modules::auth::adapters::inbound::bearer::AuthenticatedUser;
use crate::modules::tasks::core::time_entry::TimeEntry;
use crate::shared::application::errors::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    task_id: Result<Path<Uuid>, PathRejection>,
) -> Result<(StatusCode, Json<TimeEntry>), ApplicationError> {
    let Path(task_id) = task_id.map_err(|_| ApplicationError::NotFound("task"))?;
    let entry = state
        .start_timer_handler
        .handle(identity.user_id, task_id)
        .await?;
    Ok((StatusCode::CREATED, Json(entry)))
}
