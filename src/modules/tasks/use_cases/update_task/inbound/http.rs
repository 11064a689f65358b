use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};
use uuid::Uuid;

use crate::modules::auth::adapters::inbound::bearer::AuthenticatedUser;
use crate::modules::tasks::core::task::TaskView;
use crate::modules::tasks::use_cases::update_task::command::UpdateTask;
use crate::shared::application::errors::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    task_id: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<UpdateTask>, JsonRejection>,
) -> Result<Json<TaskView>, ApplicationError> {
    let Path(task_id) = task_id.map_err(|_| ApplicationError::NotFound("task"))?;
    let Json(command) = body.map_err(|e| ApplicationError::Validation(e.body_text()))?;
    let view = state
        .update_task_handler
        .handle(identity.user_id, task_id, command)
        .await?;
    Ok(Json(view))
}
