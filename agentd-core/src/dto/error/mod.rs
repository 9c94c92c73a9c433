//! Error envelope returned by the service on non-2xx responses

use serde::{Deserialize, Serialize};

/// Top-level error envelope: `{"error": {"message": ..., "status": ...}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

/// Error detail carried inside the envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    pub status: u16,
}

impl ErrorEnvelope {
    /// Extract the service-provided message from a raw response body, if the
    /// body is a well-formed error envelope.
    pub fn message_from_body(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorEnvelope>(body)
            .ok()
            .map(|envelope| envelope.error.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_message_from_envelope() {
        let body = r#"{"error": {"message": "Session not found.", "status": 404}}"#;
        assert_eq!(
            ErrorEnvelope::message_from_body(body).as_deref(),
            Some("Session not found.")
        );
    }

    #[test]
    fn test_non_envelope_body_yields_none() {
        assert!(ErrorEnvelope::message_from_body("<html>502</html>").is_none());
        assert!(ErrorEnvelope::message_from_body(r#"{"message": "flat"}"#).is_none());
        assert!(ErrorEnvelope::message_from_body("").is_none());
    }
}
