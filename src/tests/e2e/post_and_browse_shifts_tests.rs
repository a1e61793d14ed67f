use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::shifts::adapters::outbound::shift_store_in_memory::InMemoryShiftStore;
use crate::modules::shifts::core::ports::ShiftStore;
use crate::shell::config::Config;
use crate::shell::http::app;
use crate::shell::state::AppState;

fn shift_body(user_id: &str, date: &str) -> String {
    serde_json::json!({
        "userId": user_id,
        "name": format!("Enfermera {user_id}"),
        "date": date,
        "location": "SNU San Isidro",
        "time": "8h a 20h",
        "phone": "612345678",
    })
    .to_string()
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or_default())
}

async fn post(router: &Router, user_id: &str, date: &str) -> (StatusCode, serde_json::Value) {
    send(
        router,
        Request::post("/shifts")
            .header("content-type", "application/json")
            .body(Body::from(shift_body(user_id, date)))
            .unwrap(),
    )
    .await
}

async fn get(router: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(router, Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn sync_projection(state: &AppState) {
    let mut receiver = state.store.subscribe();
    state.projection.catch_up(&mut receiver).await;
}

#[tokio::test]
async fn posts_fill_a_day_up_to_capacity_and_show_in_the_calendar() {
    let state = AppState::new(Config::default(), Arc::new(InMemoryShiftStore::new()));
    let router = app(state.clone());

    let (status, _) = post(&router, "A", "2024-06-01").await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, admission) = get(&router, "/days/2024-06-01/admission?userId=B").await;
    assert_eq!(admission["allowed"], true);
    let (_, admission) = get(&router, "/days/2024-06-01/admission?userId=A").await;
    assert_eq!(admission["reason"], "user already posted for this date");

    let (status, _) = post(&router, "B", "2024-06-01").await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, denied) = post(&router, "C", "2024-06-01").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(denied["reason"], "day capacity reached");

    let (status, _) = post(&router, "C", "2024-06-02").await;
    assert_eq!(status, StatusCode::CREATED);

    sync_projection(&state).await;
    let (status, calendar) = get(&router, "/shifts").await;
    assert_eq!(status, StatusCode::OK);
    let first_day: Vec<&str> = calendar["2024-06-01"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["userId"].as_str().unwrap())
        .collect();
    assert_eq!(first_day, vec!["A", "B"]);
    assert_eq!(calendar["2024-06-02"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn removing_a_posting_frees_its_slot() {
    let state = AppState::new(Config::default(), Arc::new(InMemoryShiftStore::new()));
    let router = app(state.clone());

    let (_, first) = post(&router, "A", "2024-06-01").await;
    post(&router, "B", "2024-06-01").await;
    let (status, _) = post(&router, "C", "2024-06-01").await;
    assert_eq!(status, StatusCode::CONFLICT);

    let id = first["id"].as_str().unwrap();
    let (status, _) = send(
        &router,
        Request::delete(format!("/shifts/{id}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = post(&router, "C", "2024-06-01").await;
    assert_eq!(status, StatusCode::CREATED);

    sync_projection(&state).await;
    let (_, day) = get(&router, "/days/2024-06-01").await;
    let users: Vec<&str> = day
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["userId"].as_str().unwrap())
        .collect();
    assert_eq!(users, vec!["B", "C"]);
}

#[tokio::test]
async fn the_projection_worker_follows_writes_without_manual_sync() {
    let state = AppState::new(Config::default(), Arc::new(InMemoryShiftStore::new()));
    let worker = crate::shell::workers::spawn_projection(&state);
    let router = app(state.clone());

    let (_, posted) = post(&router, "A", "2024-06-01").await;
    let id = posted["id"].as_str().unwrap().to_string();

    let mut found = false;
    for _ in 0..50 {
        let (status, contact) = get(&router, &format!("/shifts/{id}/contact")).await;
        if status == StatusCode::OK {
            assert!(
                contact["url"]
                    .as_str()
                    .unwrap()
                    .starts_with("https://wa.me/34612345678")
            );
            found = true;
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }
    assert!(found, "projection never caught up");
    worker.abort();
}

#[tokio::test]
async fn rest_writes_are_visible_to_the_next_read() {
    let state = AppState::new(Config::default(), Arc::new(InMemoryShiftStore::new()));
    let router = app(state);

    let (_, posted) = post(&router, "A", "2024-06-01").await;
    let id = posted["id"].as_str().unwrap().to_string();
    let (status, _) = get(&router, &format!("/shifts/{id}/contact")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &router,
        Request::put(format!("/shifts/{id}"))
            .header("content-type", "application/json")
            .body(Body::from(shift_body("A", "2024-06-02")))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (_, moved) = get(&router, "/days/2024-06-02").await;
    assert_eq!(moved.as_array().unwrap().len(), 1);

    send(
        &router,
        Request::delete(format!("/shifts/{id}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    let (status, _) = get(&router, &format!("/shifts/{id}/contact")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, calendar) = get(&router, "/shifts").await;
    assert_eq!(calendar, serde_json::json!({}));
}
