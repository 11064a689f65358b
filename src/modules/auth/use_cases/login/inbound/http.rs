use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::modules::auth::use_cases::login::command::LoginUser;
use crate::modules::auth::use_cases::register::handler::AuthResponse;
use crate::shared::application::errors::ApplicationError;
use crate::shell::state::AppState;

/// Any unreadable body answers like a wrong password.
pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<LoginUser>, JsonRejection>,
) -> Result<Json<AuthResponse>, ApplicationError> {
    let Json(command) = body.map_err(|e| {
        tracing::debug!(error = %e.body_text(), "unreadable login body");
        ApplicationError::invalid_credentials()
    })?;
    let response = state.login_handler.handle(command).await?;
    Ok(Json(response))
}
