//! # User Fetch
//!
//! Mock lookup of a user profile. No I/O is performed; the response body is
//! fixed and decoded the way a real response would be. Failures come back as
//! [`FetchError`] for the caller to log, retry, or propagate.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

use crate::config::{API_VERSION, BASE_URL};
use crate::store::RecordId;

/// Result type for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;

/// Fetch errors
#[derive(Debug, Error)]
pub enum FetchError {
    /// Response body does not have the shape of a [`UserProfile`]
    #[error("Malformed user payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            FetchError::Decode(_) => "USERBASE_FETCH_DECODE",
        }
    }
}

/// Fetched user payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: RecordId,
    pub name: String,
    pub email: String,
}

/// Resource URL a real lookup for `user_id` would hit
pub fn user_url(user_id: RecordId) -> String {
    format!("{}/{}/users/{}", BASE_URL, API_VERSION, user_id)
}

/// Decode a response body into a profile
pub fn decode_profile(body: Value) -> FetchResult<UserProfile> {
    Ok(serde_json::from_value(body)?)
}

/// Fetch the profile for `user_id`. Every id gets the same fixed user.
pub fn fetch_user_data(user_id: RecordId) -> FetchResult<UserProfile> {
    decode_profile(json!({
        "id": user_id,
        "name": "John Doe",
        "email": "john@example.com",
    }))
}
