//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (no response, connect error, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required (401); the stored token has been discarded
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Resource conflict (409)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Validation error (400/422)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Server rejected the request with some other status
    #[error("Server error ({status}): {detail}")]
    Server { status: u16, detail: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Server-provided detail message, when the failure carried one.
    pub fn server_detail(&self) -> Option<&str> {
        match self {
            ClientError::Forbidden(detail)
            | ClientError::NotFound(detail)
            | ClientError::Conflict(detail)
            | ClientError::Validation(detail)
            | ClientError::Server { detail, .. } => Some(detail),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
