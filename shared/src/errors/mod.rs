//! Shared error response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Error body handed to the transport layer for any failed code operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for client identification
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Additional error details (code type, parameter name, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Add a detail field to the error response
    pub fn add_detail(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        let details = self.details.get_or_insert_with(HashMap::new);
        if let Ok(json_value) = serde_json::to_value(value) {
            details.insert(key.into(), json_value);
        }
        self
    }
}

/// Error codes for verification code failures
pub mod error_codes {
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
    pub const SESSION_ERROR: &str = "SESSION_ERROR";
    pub const SEND_FAILED: &str = "VERIFICATION_CODE_SEND_FAILED";
    pub const CODE_TYPE_UNKNOWN: &str = "VERIFICATION_CODE_TYPE_UNKNOWN";
    pub const CODE_REQUIRED: &str = "VERIFICATION_CODE_REQUIRED";
    pub const CODE_NOT_FOUND: &str = "VERIFICATION_CODE_NOT_FOUND";
    pub const CODE_EXPIRED: &str = "VERIFICATION_CODE_EXPIRED";
    pub const CODE_INVALID: &str = "VERIFICATION_CODE_INVALID";
}

/// Trait for converting errors to ErrorResponse
pub trait IntoErrorResponse {
    fn to_error_response(&self) -> ErrorResponse;
}
