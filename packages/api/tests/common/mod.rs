// ABOUTME: Common test utilities for API integration tests
// ABOUTME: Builds the router over an in-memory store and sends one-shot requests

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{DateTime, TimeZone, Utc};
use http_body_util::BodyExt;
use serde_json::Value;
use todo_api::{create_router, AppState};
use todo_tasks::storage::SqliteTaskStore;
use todo_tasks::{FixedClock, TaskService};
use tower::ServiceExt;

/// Wednesday 2025-01-01
pub fn weekday() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
}

/// Sunday 2025-01-05
pub fn weekend() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 5, 12, 0, 0).unwrap()
}

pub async fn test_app(now: DateTime<Utc>) -> Router {
    let store = Arc::new(SqliteTaskStore::in_memory().await.unwrap());
    let service = TaskService::with_clock(store, Arc::new(FixedClock(now)));
    create_router(AppState::new(service))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body should be JSON")
    }
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec();

    TestResponse {
        status,
        content_type,
        body,
    }
}

/// POST a task and return its id
pub async fn create_task(app: &Router, title: &str, active_at: &str) -> String {
    let body = serde_json::json!({"title": title, "activeAt": active_at}).to_string();
    let response = send(app, Method::POST, "/api/todo-list/tasks", Some(&body)).await;
    assert_eq!(response.status, StatusCode::CREATED);
    response.json()["id"].as_str().unwrap().to_string()
}
