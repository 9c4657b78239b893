//! # Records
//!
//! A record is one user's identity attributes, keyed by an integer id.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Record identifier
pub type RecordId = i64;

/// Creation timestamp stamped on every new record
pub const PLACEHOLDER_CREATED_AT: &str = "2024-01-01";

/// Format of [`Record::created_at`]
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d";

/// User record
///
/// Records are immutable once stored; replace by delete + add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Unique key within a store
    pub id: RecordId,

    /// Login name
    pub username: String,

    /// Contact address
    pub email: String,

    /// Creation date, formatted per [`CREATED_AT_FORMAT`]
    pub created_at: String,
}

impl Record {
    /// Build a record stamped with the placeholder creation date
    pub fn new(id: RecordId, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
            created_at: PLACEHOLDER_CREATED_AT.to_string(),
        }
    }

    /// Creation date as a calendar date, if `created_at` is well formed
    pub fn created_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.created_at, CREATED_AT_FORMAT).ok()
    }
}
