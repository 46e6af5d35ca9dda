// ABOUTME: HTTP API layer for the todo list service
// ABOUTME: Route table, shared state and fallbacks for the JSON error envelope

use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};
use todo_tasks::TaskService;
use tower_http::trace::TraceLayer;

pub mod extract;
pub mod health;
pub mod response;
pub mod tasks_handlers;

pub use response::ApiError;

/// Prefix shared by every task route
pub const API_PREFIX: &str = "/api/todo-list";

/// Shared state for API handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<TaskService>,
}

impl AppState {
    pub fn new(service: TaskService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// Creates the application router
pub fn create_router(state: AppState) -> Router {
    let tasks_path = format!("{}/tasks", API_PREFIX);
    let task_path = format!("{}/tasks/{{id}}", API_PREFIX);
    let task_done_path = format!("{}/tasks/{{id}}/done", API_PREFIX);

    Router::new()
        .route("/api/health", get(health::health_check))
        .route(
            &tasks_path,
            get(tasks_handlers::list_tasks).post(tasks_handlers::create_task),
        )
        .route(
            &task_path,
            put(tasks_handlers::update_task).delete(tasks_handlers::delete_task),
        )
        .route(&task_done_path, put(tasks_handlers::mark_task_done))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

async fn not_found() -> ApiError {
    ApiError::NotFound("not found".to_string())
}
