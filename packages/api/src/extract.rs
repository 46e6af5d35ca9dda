// ABOUTME: Request body extractor with the API's error envelope
// ABOUTME: Decodes the first JSON value regardless of content type, rejecting with 400 "invalid json"

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::response::ApiError;

pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.map_err(|rejection| {
            debug!("Failed to read request body: {}", rejection);
            invalid_json()
        })?;

        // Anything after the first value is ignored
        match serde_json::Deserializer::from_slice(&body).into_iter::<T>().next() {
            Some(Ok(value)) => Ok(ApiJson(value)),
            Some(Err(err)) => {
                debug!("Rejected request body: {}", err);
                Err(invalid_json())
            }
            None => {
                debug!("Rejected empty request body");
                Err(invalid_json())
            }
        }
    }
}

fn invalid_json() -> ApiError {
    ApiError::BadRequest("invalid json".to_string())
}
