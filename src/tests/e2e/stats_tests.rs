use axum::http::StatusCode;
use chrono::{Duration, TimeZone, Utc};
use serde_json::json;
use uuid::Uuid;

use crate::modules::tasks::adapters::outbound::task_repository::TaskRepository;
use crate::modules::tasks::core::task::{TaskPatch, TaskStatus};
use crate::modules::tasks::core::time_entry::TimeEntry;
use crate::tests::fixtures::app::make_test_app;
use crate::tests::fixtures::tasks::TaskBuilder;

#[tokio::test]
async fn reports_today_and_all_time_figures() {
    let app = make_test_app();
    // Wednesday afternoon.
    app.clock.set(Utc.with_ymd_and_hms(2024, 3, 6, 15, 0, 0).unwrap());
    let (token, user_id) = app.register("ada@example.com").await;
    let user_id: Uuid = user_id.parse().unwrap();

    let done_today = TaskBuilder::new(user_id)
        .title("Ship it")
        .created_at(Utc.with_ymd_and_hms(2024, 3, 6, 8, 0, 0).unwrap())
        .build();
    let done_last_month = TaskBuilder::new(user_id)
        .title("Old news")
        .status(TaskStatus::Completed)
        .created_at(Utc.with_ymd_and_hms(2024, 2, 1, 9, 0, 0).unwrap())
        .updated_at(Utc.with_ymd_and_hms(2024, 2, 2, 9, 0, 0).unwrap())
        .build();
    app.store.insert_task(done_today.clone()).await.unwrap();
    app.store.insert_task(done_last_month).await.unwrap();

    let start = Utc.with_ymd_and_hms(2024, 3, 6, 9, 0, 0).unwrap();
    let entry = TimeEntry::open(done_today.id, start);
    app.store.open_time_entry(user_id, entry.clone()).await.unwrap();
    app.store
        .close_time_entry(entry.close(start + Duration::seconds(3600)))
        .await
        .unwrap();
    // Completed after the tracked hour.
    app.store
        .update_task(
            user_id,
            done_today.id,
            TaskPatch {
                status: Some(TaskStatus::Completed),
                ..TaskPatch::default()
            },
            Utc.with_ymd_and_hms(2024, 3, 6, 11, 0, 0).unwrap(),
        )
        .await
        .unwrap();

    let (status, stats) = app.send("GET", "/users/stats", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        stats,
        json!({
            "tasksCompletedToday": 1,
            "tasksCompletedWeek": 1,
            "totalHoursToday": 1.0,
            "totalHoursWeek": 1.0,
            "totalTasks": 2,
            "completedTasks": 2,
        })
    );
}

#[tokio::test]
async fn breaks_down_tracked_time_by_category() {
    let app = make_test_app();
    let (token, _) = app.register("ada@example.com").await;
    for body in [
        json!({"title": "Report", "category": "Work", "priority": "high"}),
        json!({"title": "Groceries"}),
    ] {
        let (_, task) = app.send("POST", "/tasks", Some(&token), Some(body)).await;
        let path = format!("/tasks/{}", task["id"].as_str().unwrap());
        app.send("POST", &format!("{path}/start"), Some(&token), None)
            .await;
        app.clock.advance(Duration::seconds(90));
        app.send("POST", &format!("{path}/stop"), Some(&token), None)
            .await;
    }

    let (status, breakdown) = app
        .send("GET", "/users/stats/breakdown", Some(&token), None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        breakdown["byStatus"],
        json!({"pending": 0, "inProgress": 2, "completed": 0})
    );
    assert_eq!(
        breakdown["byPriority"],
        json!({"low": 0, "medium": 1, "high": 1})
    );
    assert_eq!(
        breakdown["byCategory"],
        json!([
            {"category": "Uncategorized", "minutes": 1.5},
            {"category": "Work", "minutes": 1.5},
        ])
    );
}

#[tokio::test]
async fn stats_require_an_existing_user() {
    let app = make_test_app();
    let ghost = crate::tests::fixtures::users::make_user("ghost@example.com");
    let token = app.state.tokens.issue(&ghost).unwrap();

    let (status, body) = app.send("GET", "/users/stats", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "user not found");
}
