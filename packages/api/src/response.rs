// ABOUTME: API error type and JSON error envelope
// ABOUTME: Maps task service outcomes to status codes and {"error": ...} bodies

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson, Response},
};
use serde::Serialize;
use todo_tasks::TaskError;
use tracing::error;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    /// Also used for uniqueness conflicts, which clients see as 404
    NotFound(String),
    MethodNotAllowed,
    ServiceUnavailable,
    Internal,
}

/// Body of every non-2xx response
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ApiError::BadRequest(message) | ApiError::NotFound(message) => message.clone(),
            ApiError::MethodNotAllowed => "method not allowed".to_string(),
            ApiError::ServiceUnavailable => "service unavailable".to_string(),
            ApiError::Internal => "internal error".to_string(),
        }
    }
}

impl From<TaskError> for ApiError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::BadRequest(validation) => ApiError::BadRequest(validation.to_string()),
            TaskError::NotFound => ApiError::NotFound(TaskError::NotFound.to_string()),
            TaskError::Conflict(message) => ApiError::NotFound(message.to_string()),
            TaskError::Internal(cause) => {
                error!("Task store failure: {}", cause);
                ApiError::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message(),
        };
        (self.status(), ResponseJson(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_tasks::{StoreError, ValidationError};

    #[test]
    fn test_task_errors_map_to_status_codes() {
        let cases = [
            (
                TaskError::BadRequest(ValidationError::EmptyTitle),
                StatusCode::BAD_REQUEST,
                "title is required",
            ),
            (TaskError::NotFound, StatusCode::NOT_FOUND, "task not found"),
            (
                TaskError::Conflict("task already exists"),
                StatusCode::NOT_FOUND,
                "task already exists",
            ),
            (
                TaskError::Internal(StoreError::UnsupportedUrl("mysql://".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal error",
            ),
        ];

        for (task_error, status, message) in cases {
            let api_error = ApiError::from(task_error);
            assert_eq!(api_error.status(), status);
            assert_eq!(api_error.message(), message);
        }
    }
}
