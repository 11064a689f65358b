use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::modules::auth::core::claims::Identity;
use crate::shared::application::errors::ApplicationError;
use crate::shell::state::AppState;

/// The caller behind a valid `Authorization: Bearer <token>` header.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub Identity);

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApplicationError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ApplicationError::Unauthorized("Missing bearer token".into()))?;

        let identity = state.tokens.validate(token).map_err(|e| {
            tracing::debug!(error = %e, "bearer token rejected");
            ApplicationError::Unauthorized("Invalid or expired token".into())
        })?;
        Ok(Self(identity))
    }
}
