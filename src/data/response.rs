//! Standard response envelope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Timestamp stamped on every envelope
pub const RESPONSE_TIMESTAMP: &str = "2024-01-01T00:00:00Z";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: ResponseStatus,
    pub message: String,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ApiResponse {
    /// Envelope timestamp as a UTC instant, if well formed
    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|ts| ts.with_timezone(&Utc))
    }

    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }
}

/// Build a response envelope.
///
/// `data` is dropped when it is null or an empty object.
pub fn format_response(status: ResponseStatus, message: impl Into<String>, data: Option<Value>) -> ApiResponse {
    let data = data.filter(|value| match value {
        Value::Null => false,
        Value::Object(map) => !map.is_empty(),
        _ => true,
    });

    ApiResponse {
        status,
        message: message.into(),
        timestamp: RESPONSE_TIMESTAMP.to_string(),
        data,
    }
}
