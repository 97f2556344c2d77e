//! Server error types.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::store::StoreError;
use crate::types::ErrorResponse;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Invalid request payload or parameters.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Storage error.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        ServerError::InvalidRequest(rejection.body_text())
    }
}

impl ServerError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ServerError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ServerError::Store(StoreError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "Todo not found".to_string())
            }
            ServerError::Store(StoreError::InvalidId(_)) => {
                (StatusCode::BAD_REQUEST, "Invalid ID".to_string())
            }
            ServerError::Store(StoreError::Database(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error) = self.status_and_message();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        (status, Json(ErrorResponse { error })).into_response()
    }
}

/// Result type alias for handlers.
pub type ServerResult<T> = Result<T, ServerError>;
