//! Shared error and response contract for all handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Application error type shared by every handler.
///
/// `NotFound` is the only deterministic failure; anything bubbling up from
/// the storage layer becomes a generic 500 and the detail stays in the logs.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// `{error: {message, status}}` body used for every failure response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub message: String,
    pub status: u16,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            error: ErrorDetail {
                message: message.into(),
                status: status.as_u16(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Database(e) => {
                error!("database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody::new(message, status))).into_response()
    }
}

/// Body returned by the delete endpoints.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub status: &'static str,
}

impl DeletedResponse {
    pub fn deleted() -> Self {
        Self { status: "deleted" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn not_found_response_has_status_and_body() {
        let error = ApiError::NotFound("apple cannot be found".to_string());

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["message"], "apple cannot be found");
        assert_eq!(body["error"]["status"], 404);
    }

    #[tokio::test]
    async fn database_error_is_a_generic_500() {
        let error = ApiError::Database(sqlx::Error::RowNotFound);

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        // The driver detail must never leak to the client.
        assert_eq!(body["error"]["message"], "Internal server error");
        assert_eq!(body["error"]["status"], 500);
    }

    #[test]
    fn deleted_response_serialization() {
        let json = serde_json::to_value(DeletedResponse::deleted()).unwrap();
        assert_eq!(json, serde_json::json!({"status": "deleted"}));
    }
}
