use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::store::StoreError;

/// Error returned from API handlers, rendered as `{"message": ...}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bad request (400).
    #[error("{0}")]
    Validation(String),

    /// Not found (404).
    #[error("{0}")]
    NotFound(String),

    /// Storage failure (500). Details are logged, never sent to the client.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::Store(e) => {
                tracing::error!("storage error: {e}");
                "Internal Server Error".to_string()
            }
            other => other.to_string(),
        };

        (self.status_code(), Json(ErrorResponse { message })).into_response()
    }
}
