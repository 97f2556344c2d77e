//! Error types for the todo API client.
//!
//! The server reports client mistakes as `{"error": "..."}` with 400 or 404;
//! those get dedicated variants carrying the server's message. Any other
//! unexpected status lands in `HttpError` with the raw body.

use thiserror::Error;

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("not found: {0}")]
    NotFound(String),

    /// The server returned 400, e.g. an empty body or a malformed id.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The server returned any other unexpected status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),
}
