//! # Client Error Types
//!
//! Unified error handling for FRED client operations.

use thiserror::Error;

/// Client operation result type
pub type ClientResult<T> = Result<T, ClientError>;

/// Error types for FRED client operations
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network-level fault: DNS, connection refused, timeout.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Response body could not be decoded as JSON.
    #[error("JSON deserialization failed: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Provider answered with a non-success status.
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ClientError {
    /// Create an API error from HTTP response
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }

    /// Create an invalid input error for a query that fails validation
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Whether the fault happened on the wire (network failure or non-2xx status).
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::HttpError(_) | ClientError::ApiError { .. })
    }
}
