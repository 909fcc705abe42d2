//! API error types and handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pantry_core::FoodError;
use serde_json::json;
use thiserror::Error;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request malformed before it reached the store (e.g. body is
    /// not a JSON object)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Store-level outcome, mapped per variant below
    #[error(transparent)]
    Food(#[from] FoodError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Food(FoodError::InvalidInput(_)) => {
                (StatusCode::BAD_REQUEST, "invalid_input")
            }
            ApiError::Food(FoodError::NotFound(_)) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::Food(FoodError::IdentityMismatch { .. }) => {
                (StatusCode::BAD_REQUEST, "id_mismatch")
            }
        };

        let body = Json(json!({
            "error": {
                "type": error_type,
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;
