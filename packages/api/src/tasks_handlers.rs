// ABOUTME: HTTP request handlers for task operations
// ABOUTME: Decodes payloads, calls the task service and shapes success responses

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use todo_tasks::{ListStatus, Task};
use tracing::info;

use crate::extract::ApiJson;
use crate::response::ApiError;
use crate::AppState;

/// Request body for creating or updating a task
#[derive(Debug, Default, Deserialize)]
pub struct TaskRequest {
    pub title: Option<String>,
    #[serde(rename = "activeAt")]
    pub active_at: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreatedTask {
    pub id: String,
}

/// List active (default) or done tasks. A repeated `status` uses its first value.
pub async fn list_tasks(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<Task>>, ApiError> {
    let Query(params) =
        query.map_err(|_| ApiError::BadRequest("invalid query".to_string()))?;
    let status = ListStatus::from_query(
        params
            .iter()
            .find(|(key, _)| key == "status")
            .map(|(_, value)| value.as_str()),
    );

    info!("Listing {:?} tasks", status);

    let tasks = state.service.list(status).await?;
    Ok(Json(tasks))
}

/// Create a new task
pub async fn create_task(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<TaskRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let title = request.title.unwrap_or_default();
    let active_at = request.active_at.unwrap_or_default();

    info!("Creating task '{}' active at {}", title, active_at);

    let id = state.service.create(&title, &active_at).await?;
    Ok((StatusCode::CREATED, Json(CreatedTask { id })))
}

/// Replace the title and activation date of a task
pub async fn update_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
    ApiJson(request): ApiJson<TaskRequest>,
) -> Result<StatusCode, ApiError> {
    info!("Updating task: {}", task_id);

    let title = request.title.unwrap_or_default();
    let active_at = request.active_at.unwrap_or_default();

    state.service.update(&task_id, &title, &active_at).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a task
pub async fn delete_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    info!("Deleting task: {}", task_id);

    state.service.delete(&task_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Mark a task done
pub async fn mark_task_done(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    info!("Marking task done: {}", task_id);

    state.service.mark_done(&task_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
