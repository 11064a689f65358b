use std::sync::Arc;

use anyhow::Context;
use axum::http::{Method, header};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use task_tracker::shared::core::clock::SystemClock;
use task_tracker::shared::infrastructure::store::in_memory::InMemoryStore;
use task_tracker::shell::config::AppConfig;
use task_tracker::shell::http::router;
use task_tracker::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env().context("invalid configuration")?;
    tracing::debug!(?config, "configuration loaded");

    // In-memory store for now
    let store = Arc::new(InMemoryStore::new());
    let state = AppState::new(
        store,
        &config.auth,
        config.stats_zone,
        Arc::new(SystemClock),
    );

    let cors = CorsLayer::new()
        .allow_origin(config.cors_origin.clone())
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    let app = router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("cannot bind {}", config.bind_addr))?;
    tracing::info!("listening on http://{}", config.bind_addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
