use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};

use crate::modules::auth::adapters::inbound::bearer::AuthenticatedUser;
use crate::modules::tasks::core::task::TaskView;
use crate::modules::tasks::use_cases::create_task::command::CreateTask;
use crate::shared::application::errors::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    body: Result<Json<CreateTask>, JsonRejection>,
) -> Result<(StatusCode, Json<TaskView>), ApplicationError> {
    let Json(command) = body.map_err(|e| ApplicationError::Validation(e.body_text()))?;
    let view = state
        .create_task_handler
        .handle(identity.user_id, command)
        .await?;
    Ok((StatusCode::CREATED, Json(view)))
}
