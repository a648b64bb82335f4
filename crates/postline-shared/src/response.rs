//! Error envelope returned by every failing endpoint.

use serde::{Deserialize, Serialize};

/// `{"error": ..., "statusCode": ..., "details": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Error kind name, e.g. `NotFound`.
    pub error: String,

    /// The HTTP status code.
    pub status_code: u16,

    /// Human-readable explanation of this occurrence.
    pub details: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, status_code: u16, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            status_code,
            details: details.into(),
        }
    }

    /// Opaque envelope for failures whose cause must not reach the client.
    pub fn internal_error() -> Self {
        Self::new("InternalError", 500, "An unexpected error occurred")
    }
}
