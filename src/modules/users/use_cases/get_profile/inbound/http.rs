use axum::{Json, extract::State};

use crate::modules::auth::adapters::inbound::bearer::AuthenticatedUser;
use crate::modules::users::core::user::PublicUser;
use crate::shared::application::errors::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
) -> Result<Json<PublicUser>, ApplicationError> {
    let profile = state.get_profile_handler.handle(identity.user_id).await?;
    Ok(Json(profile))
}
