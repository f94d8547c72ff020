//! Response envelope returned by every arena operation
//!
//! Success carries `data`; failure sets `success = false`, a human-readable
//! `message`, and leaves `data` absent.

use serde::{Deserialize, Serialize};

/// Generic service response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse<T> {
    /// Payload on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub success: bool,
    /// Human-readable note (failure reason, defeat announcement, ...)
    #[serde(default)]
    pub message: String,
}

impl<T> ServiceResponse<T> {
    /// Create a success response with data
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            success: true,
            message: String::new(),
        }
    }

    /// Create a success response with data and a message
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            data: Some(data),
            success: true,
            message: message.into(),
        }
    }

    /// Create a failure response
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            data: None,
            success: false,
            message: message.into(),
        }
    }
}
