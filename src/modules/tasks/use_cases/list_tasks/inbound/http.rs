use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::modules::auth::adapters::inbound::bearer::AuthenticatedUser;
use crate::modules::tasks::core::filters::TaskFilters;
use crate::modules::tasks::core::task::TaskView;
use crate::shared::application::errors::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    filters: Result<Query<TaskFilters>, QueryRejection>,
) -> Result<Json<Vec<TaskView>>, ApplicationError> {
    let Query(filters) = filters.map_err(|e| ApplicationError::Validation(e.body_text()))?;
    let views = state
        .list_tasks_handler
        .handle(identity.user_id, &filters)
        .await?;
    Ok(Json(views))
}
