use axum::http::StatusCode;
use chrono::Duration;
use serde_json::json;

use crate::tests::fixtures::app::make_test_app;

#[tokio::test]
async fn tracks_125_seconds_between_start_and_stop() {
    let app = make_test_app();
    let (token, _) = app.register("ada@example.com").await;

    let (status, task) = app
        .send("POST", "/tasks", Some(&token), Some(json!({"title": "Write proposal"})))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let task_id = task["id"].as_str().unwrap().to_string();

    let (status, started) = app
        .send("POST", &format!("/tasks/{task_id}/start"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(started["endTime"].is_null());
    assert_eq!(started["duration"], 0);

    app.clock.advance(Duration::seconds(125));
    let (status, stopped) = app
        .send("POST", &format!("/tasks/{task_id}/stop"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stopped["id"], started["id"]);
    assert_eq!(stopped["duration"], 125);

    let (_, total) = app
        .send("GET", &format!("/tasks/{task_id}/total-time"), Some(&token), None)
        .await;
    assert_eq!(total["totalTime"], 125);

    let (_, view) = app
        .send("GET", &format!("/tasks/{task_id}"), Some(&token), None)
        .await;
    assert_eq!(view["status"], "in_progress");
    assert_eq!(view["totalTime"], 125);
    assert_eq!(view["timeEntries"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn refuses_to_start_twice_or_stop_an_idle_timer() {
    let app = make_test_app();
    let (token, _) = app.register("ada@example.com").await;
    let (_, task) = app
        .send("POST", "/tasks", Some(&token), Some(json!({"title": "Write proposal"})))
        .await;
    let task_id = task["id"].as_str().unwrap().to_string();

    let (status, body) = app
        .send("POST", &format!("/tasks/{task_id}/stop"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INVALID_STATE");

    app.send("POST", &format!("/tasks/{task_id}/start"), Some(&token), None)
        .await;
    let (status, body) = app
        .send("POST", &format!("/tasks/{task_id}/start"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Timer is already running for this task");

    let task_id = task_id.parse().unwrap();
    assert_eq!(app.store.open_entry_count(task_id).await, 1);
}

#[tokio::test]
async fn keeps_other_users_out_of_a_task() {
    let app = make_test_app();
    let (owner, _) = app.register("ada@example.com").await;
    let (intruder, _) = app.register("eve@example.com").await;
    let (_, task) = app
        .send("POST", "/tasks", Some(&owner), Some(json!({"title": "Private"})))
        .await;
    let task_id = task["id"].as_str().unwrap().to_string();

    for (method, path) in [
        ("GET", format!("/tasks/{task_id}")),
        ("PATCH", format!("/tasks/{task_id}")),
        ("DELETE", format!("/tasks/{task_id}")),
        ("POST", format!("/tasks/{task_id}/start")),
        ("POST", format!("/tasks/{task_id}/stop")),
        ("GET", format!("/tasks/{task_id}/total-time")),
    ] {
        let body = (method == "PATCH").then(|| json!({"title": "Mine now"}));
        let (status, json) = app.send(method, &path, Some(&intruder), body).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method} {path}");
        assert_eq!(json["message"], "task not found");
    }

    let (_, list) = app.send("GET", "/tasks", Some(&intruder), None).await;
    assert!(list.as_array().unwrap().is_empty());
    let (_, view) = app
        .send("GET", &format!("/tasks/{task_id}"), Some(&owner), None)
        .await;
    assert_eq!(view["title"], "Private");
    assert_eq!(view["status"], "pending");
}

#[tokio::test]
async fn repeated_gets_return_identical_data() {
    let app = make_test_app();
    let (token, _) = app.register("ada@example.com").await;
    let (_, task) = app
        .send("POST", "/tasks", Some(&token), Some(json!({"title": "Write proposal"})))
        .await;
    let path = format!("/tasks/{}", task["id"].as_str().unwrap());
    app.send("POST", &format!("{path}/start"), Some(&token), None)
        .await;

    let (_, first) = app.send("GET", &path, Some(&token), None).await;
    let (_, second) = app.send("GET", &path, Some(&token), None).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn deleting_a_task_removes_its_time_entries() {
    let app = make_test_app();
    let (token, _) = app.register("ada@example.com").await;
    let (_, task) = app
        .send("POST", "/tasks", Some(&token), Some(json!({"title": "Write proposal"})))
        .await;
    let path = format!("/tasks/{}", task["id"].as_str().unwrap());
    app.send("POST", &format!("{path}/start"), Some(&token), None)
        .await;
    app.clock.advance(Duration::seconds(10));
    app.send("POST", &format!("{path}/stop"), Some(&token), None)
        .await;

    let (status, _) = app.send("DELETE", &path, Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(app.store.time_entry_count().await, 0);
    let (status, _) = app.send("GET", &path, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
