use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};

use crate::modules::auth::use_cases::register::command::RegisterUser;
use crate::modules::auth::use_cases::register::handler::AuthResponse;
use crate::shared::application::errors::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RegisterUser>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthResponse>), ApplicationError> {
    let Json(command) = body.map_err(|e| ApplicationError::Validation(e.body_text()))?;
    let response = state.register_handler.handle(command).await?;
    Ok((StatusCode::CREATED, Json(response)))
}
