use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::warn;

use crate::response::ApiError;
use crate::AppState;

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    if let Err(err) = state.service.health().await {
        warn!("Health check failed: {:?}", err);
        return Err(ApiError::ServiceUnavailable);
    }

    Ok(Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "todo-list"
    })))
}
