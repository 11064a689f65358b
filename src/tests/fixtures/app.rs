use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use chrono::{Duration, FixedOffset};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::stats::core::aggregate::StatsZone;
use crate::shared::infrastructure::store::in_memory::InMemoryStore;
use crate::shell::config::AuthConfig;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::auth::TEST_SECRET;
use crate::tests::fixtures::clock::ManualClock;

pub struct TestApp {
    pub state: AppState,
    pub store: Arc<InMemoryStore>,
    pub clock: Arc<ManualClock>,
}

pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: TEST_SECRET.to_string(),
        token_ttl: Duration::hours(24),
        bcrypt_cost: 4,
    }
}

fn build(store: InMemoryStore) -> TestApp {
    let store = Arc::new(store);
    let clock = Arc::new(ManualClock::default());
    let state = AppState::new(
        store.clone(),
        &test_auth_config(),
        StatsZone::Fixed(FixedOffset::east_opt(0).unwrap()),
        clock.clone(),
    );
    TestApp {
        state,
        store,
        clock,
    }
}

pub fn make_test_app() -> TestApp {
    build(InMemoryStore::new())
}

pub fn make_offline_test_app() -> TestApp {
    let mut store = InMemoryStore::new();
    store.toggle_offline();
    build(store)
}

impl TestApp {
    pub fn router(&self) -> Router {
        router(self.state.clone())
    }

    /// Sends one request through the full router and returns status plus JSON body.
    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> (axum::http::StatusCode, serde_json::Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = self.router().oneshot(request).await.unwrap();
        read_json(response).await
    }

    /// Registers a user through the API and returns its token and id.
    pub async fn register(&self, email: &str) -> (String, String) {
        let (status, json) = self
            .send(
                "POST",
                "/auth/register",
                None,
                Some(serde_json::json!({
                    "email": email,
                    "password": "s3cret-pass",
                    "name": "Ada",
                })),
            )
            .await;
        assert_eq!(status, axum::http::StatusCode::CREATED, "{json}");
        (
            json["access_token"].as_str().unwrap().to_string(),
            json["user"]["id"].as_str().unwrap().to_string(),
        )
    }
}

pub async fn read_json(response: Response<Body>) -> (axum::http::StatusCode, serde_json::Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
