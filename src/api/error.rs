//! Error types for the movie data service.
//!
//! Network and decode failures are kept distinct here for logging; the
//! store collapses them into one user-facing message per operation.

use thiserror::Error;

/// Errors that can occur while talking to the upstream API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Request URL could not be built from the configured base
    #[error("Invalid URL for {operation}: {message}")]
    InvalidUrl {
        operation: &'static str,
        message: String,
    },

    /// Request was rejected before a response arrived
    #[error("Request for {operation} failed: {source}")]
    Network {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream answered with a non-success status
    #[error("Upstream error for {operation}: HTTP {status} - {message}")]
    Status {
        operation: &'static str,
        status: u16,
        message: String,
    },

    /// Response body did not match the expected shape
    #[error("Failed to decode {operation} response: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Get error type string for structured logs
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Client(_) => "client_error",
            ApiError::InvalidUrl { .. } => "invalid_url",
            ApiError::Network { .. } => "network_error",
            ApiError::Status { .. } => "upstream_error",
            ApiError::Decode { .. } => "decode_error",
        }
    }

    /// The operation that failed, when the error is tied to one.
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            ApiError::Client(_) => None,
            ApiError::InvalidUrl { operation, .. }
            | ApiError::Network { operation, .. }
            | ApiError::Status { operation, .. }
            | ApiError::Decode { operation, .. } => Some(*operation),
        }
    }

    /// HTTP status returned by upstream, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
