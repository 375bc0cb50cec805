//! Error types for backend API operations.

use thiserror::Error;

/// Unified error type for client operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body was not valid JSON, or did not match the expected shape
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Server reported a failure. The message comes from the response
    /// envelope when present, otherwise a generic fallback.
    #[error("{message} (HTTP {status})")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },
}

/// Result alias for client operations
pub type ApiResult<T> = Result<T, ApiError>;
