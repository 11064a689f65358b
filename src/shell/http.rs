use axum::{
    Extension, Router,
    routing::{get, post},
};

use crate::modules::auth::use_cases::login::inbound::http as login_http;
use crate::modules::auth::use_cases::register::inbound::http as register_http;
use crate::modules::stats::use_cases::productivity_breakdown::inbound::http as breakdown_http;
use crate::modules::stats::use_cases::user_stats::inbound::http as user_stats_http;
use crate::modules::tasks::use_cases::create_task::inbound::http as create_task_http;
use crate::modules::tasks::use_cases::delete_task::inbound::http as delete_task_http;
use crate::modules::tasks::use_cases::get_task::inbound::http as get_task_http;
use crate::modules::tasks::use_cases::list_tasks::inbound::http as list_tasks_http;
use crate::modules::tasks::use_cases::start_timer::inbound::http as start_timer_http;
use crate::modules::tasks::use_cases::stop_timer::inbound::http as stop_timer_http;
use crate::modules::tasks::use_cases::total_time::inbound::http as total_time_http;
use crate::modules::tasks::use_cases::update_task::inbound::http as update_task_http;
use crate::modules::users::use_cases::get_profile::inbound::http as get_profile_http;
use crate::shell::graphql::{build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    Router::new()
        .route("/auth/register", post(register_http::handle))
        .route("/auth/login", post(login_http::handle))
        .route("/users/profile", get(get_profile_http::handle))
        .route("/users/stats", get(user_stats_http::handle))
        .route("/users/stats/breakdown", get(breakdown_http::handle))
        .route(
            "/tasks",
            get(list_tasks_http::handle).post(create_task_http::handle),
        )
        .route(
            "/tasks/{id}",
            get(get_task_http::handle)
                .patch(update_task_http::handle)
                .delete(delete_task_http::handle),
        )
        .route("/tasks/{id}/start", post(start_timer_http::handle))
        .route("/tasks/{id}/stop", post(stop_timer_http::handle))
        .route("/tasks/{id}/total-time", get(total_time_http::handle))
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .with_state(state)
}
