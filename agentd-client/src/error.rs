//! Error types for the agentd client

use agentd_core::dto::error::ErrorEnvelope;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the agentd client
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ApiError { status: 404, .. })
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }
}

/// Pick the message to surface for a failed response
///
/// Prefers the `message` inside the service's error envelope; falls back to
/// the raw body (proxies and crashes produce non-JSON bodies), then to a
/// generic placeholder so the user never sees an empty error.
pub(crate) fn extract_message(status: u16, body: &str) -> String {
    if let Some(message) = ErrorEnvelope::message_from_body(body) {
        return message;
    }

    let body = body.trim();
    if body.is_empty() {
        format!("request failed with status {}", status)
    } else {
        body.to_string()
    }
}
