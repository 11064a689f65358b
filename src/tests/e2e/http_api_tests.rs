use axum::http::StatusCode;
use chrono::Duration;
use serde_json::json;

use crate::tests::fixtures::app::{make_offline_test_app, make_test_app};

#[tokio::test]
async fn registers_logs_in_and_reads_the_profile() {
    let app = make_test_app();
    app.register("ada@example.com").await;

    let (status, login) = app
        .send(
            "POST",
            "/auth/login",
            None,
            Some(json!({"email": "ada@example.com", "password": "s3cret-pass"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let token = login["access_token"].as_str().unwrap();

    let (status, profile) = app.send("GET", "/users/profile", Some(token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["email"], "ada@example.com");
    assert_eq!(profile["name"], "Ada");
    assert_eq!(profile["id"], login["user"]["id"]);
    assert!(profile.get("passwordHash").is_none());
}

#[tokio::test]
async fn rejects_a_duplicate_registration_with_409() {
    let app = make_test_app();
    app.register("ada@example.com").await;

    let (status, body) = app
        .send(
            "POST",
            "/auth/register",
            None,
            Some(json!({"email": "ada@example.com", "password": "other-pass", "name": "Ada"})),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "CONFLICT");
}

#[tokio::test]
async fn answers_wrong_password_and_unknown_email_identically() {
    let app = make_test_app();
    app.register("ada@example.com").await;

    let wrong_password = app
        .send(
            "POST",
            "/auth/login",
            None,
            Some(json!({"email": "ada@example.com", "password": "nope-nope"})),
        )
        .await;
    let unknown_email = app
        .send(
            "POST",
            "/auth/login",
            None,
            Some(json!({"email": "eve@example.com", "password": "s3cret-pass"})),
        )
        .await;

    assert_eq!(wrong_password.0, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password, unknown_email);
}

#[tokio::test]
async fn guards_every_protected_route_with_401() {
    let app = make_test_app();
    for (method, path) in [
        ("GET", "/users/profile"),
        ("GET", "/users/stats"),
        ("GET", "/users/stats/breakdown"),
        ("GET", "/tasks"),
        ("POST", "/tasks"),
        ("GET", "/tasks/0190a5b4-0000-7000-8000-000000000000"),
        ("POST", "/tasks/0190a5b4-0000-7000-8000-000000000000/start"),
        ("POST", "/gql"),
    ] {
        let (status, body) = app.send(method, path, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {path}");
        assert_eq!(body["error"], "UNAUTHORIZED");
    }
}

#[tokio::test]
async fn rejects_an_expired_token() {
    let app = make_test_app();
    let (token, _) = app.register("ada@example.com").await;
    app.clock.advance(Duration::hours(24));

    let (status, _) = app.send("GET", "/tasks", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn creates_filters_and_updates_tasks() {
    let app = make_test_app();
    let (token, _) = app.register("ada@example.com").await;

    let (status, created) = app
        .send(
            "POST",
            "/tasks",
            Some(&token),
            Some(json!({"title": "Quarterly report", "category": "Work", "priority": "high"})),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "pending");
    assert_eq!(created["priority"], "high");
    assert_eq!(created["timeEntries"], json!([]));
    assert_eq!(created["totalTime"], 0);
    app.clock.advance(Duration::seconds(1));
    app.send("POST", "/tasks", Some(&token), Some(json!({"title": "Groceries"})))
        .await;

    let (_, all) = app.send("GET", "/tasks", Some(&token), None).await;
    let titles: Vec<&str> = all
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Groceries", "Quarterly report"]);

    let (_, filtered) = app
        .send(
            "GET",
            "/tasks?category=Work&search=REPORT&priority=high",
            Some(&token),
            None,
        )
        .await;
    assert_eq!(filtered.as_array().unwrap().len(), 1);

    let path = format!("/tasks/{}", created["id"].as_str().unwrap());
    let (status, updated) = app
        .send("PATCH", &path, Some(&token), Some(json!({"status": "completed"})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "completed");
    assert_eq!(updated["title"], "Quarterly report");
    assert_eq!(updated["category"], "Work");

    let (_, completed) = app
        .send("GET", "/tasks?status=completed", Some(&token), None)
        .await;
    assert_eq!(completed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn maps_bad_input_to_422_and_bad_ids_to_404() {
    let app = make_test_app();
    let (token, _) = app.register("ada@example.com").await;

    let (status, body) = app
        .send("POST", "/tasks", Some(&token), Some(json!({"title": "  "})))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "VALIDATION");

    let (status, _) = app
        .send("POST", "/tasks", Some(&token), Some(json!({"title": "x", "priority": "urgent"})))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = app
        .send("GET", "/tasks?status=archived", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = app.send("GET", "/tasks/not-a-uuid", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn serves_tasks_and_timers_over_graphql() {
    let app = make_test_app();
    let (token, _) = app.register("ada@example.com").await;
    let (_, task) = app
        .send("POST", "/tasks", Some(&token), Some(json!({"title": "Write proposal"})))
        .await;
    let task_id = task["id"].as_str().unwrap();

    let (status, started) = app
        .send(
            "POST",
            "/gql",
            Some(&token),
            Some(json!({
                "query": "mutation($id: ID!) { startTimer(taskId: $id) { taskId duration endTime } }",
                "variables": {"id": task_id},
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(started["data"]["startTimer"]["taskId"], task_id);
    assert!(started["data"]["startTimer"]["endTime"].is_null());

    let (_, again) = app
        .send(
            "POST",
            "/gql",
            Some(&token),
            Some(json!({
                "query": "mutation($id: ID!) { startTimer(taskId: $id) { duration } }",
                "variables": {"id": task_id},
            })),
        )
        .await;
    assert_eq!(again["errors"][0]["extensions"]["code"], "INVALID_STATE");

    let (_, listed) = app
        .send(
            "POST",
            "/gql",
            Some(&token),
            Some(json!({
                "query": "{ tasks(status: IN_PROGRESS) { title status } stats { totalTasks } }",
            })),
        )
        .await;
    assert_eq!(
        listed["data"],
        json!({
            "tasks": [{"title": "Write proposal", "status": "IN_PROGRESS"}],
            "stats": {"totalTasks": 1},
        })
    );
}

#[tokio::test]
async fn hides_store_failures_behind_500() {
    let app = make_offline_test_app();
    let (status, body) = app
        .send(
            "POST",
            "/auth/register",
            None,
            Some(json!({"email": "ada@example.com", "password": "s3cret-pass", "name": "Ada"})),
        )
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "internal server error");
}
