use axum::{Json, extract::State};

use crate::modules::auth::adapters::inbound::bearer::AuthenticatedUser;
use crate::modules::stats::core::breakdown::ProductivityBreakdown;
use crate::shared::application::errors::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
) -> Result<Json<ProductivityBreakdown>, ApplicationError> {
    let breakdown = state.breakdown_handler.handle(identity.user_id).await?;
    Ok(Json(breakdown))
}
