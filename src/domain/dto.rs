//! Data Transfer Objects for API responses.
//!
//! Task collections travel as bare JSON arrays of [`Task`](super::Task), so
//! only the acknowledgement and probe bodies need their own types.

use serde::{Deserialize, Serialize};

/// Acknowledgement body for successful writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

impl MessageResponse {
    /// Create a new message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,

    /// Service version.
    pub version: String,
}

/// Readiness check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadyResponse {
    /// Whether the store answered its health check.
    pub ready: bool,

    /// Name of the configured storage backend.
    pub backend: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_response_shape() {
        let body = serde_json::to_string(&MessageResponse::new("Tasks saved")).unwrap();
        assert_eq!(body, r#"{"message":"Tasks saved"}"#);
    }
}
