use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use uuid::Uuid;

use crate::modules::auth::adapters::inbound::bearer::AuthenticatedUser;
use crate::modules::tasks::core::task::TaskView;
use crate::shared::application::errors::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    task_id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<TaskView>, ApplicationError> {
    let Path(task_id) = task_id.map_err(|_| ApplicationError::NotFound("task"))?;
    let view = state
        .get_task_handler
        .handle(identity.user_id, task_id)
        .await?;
    Ok(Json(view))
}
