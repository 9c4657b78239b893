//! Observable events for userbase
//!
//! Events are explicit and typed.

use std::fmt;

use super::Severity;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration loaded
    ConfigLoaded,
    /// Record store created
    StoreOpened,
    /// Session loop started reading requests
    SessionStart,
    /// Session loop reached end of input
    SessionComplete,

    // Record operations
    /// Record inserted
    RecordAdded,
    /// Add refused because the id is taken
    RecordAddRejected,
    /// Record looked up
    RecordLookup,
    /// Record removed
    RecordDeleted,
    /// Delete of an id that is not present
    RecordDeleteMissed,

    // Fetch
    /// User payload fetched
    FetchComplete,
    /// Fetch failed
    FetchFailed,

    // Requests
    /// Session request could not be decoded
    RequestRejected,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::StoreOpened => "STORE_OPENED",
            Event::SessionStart => "SESSION_BEGIN",
            Event::SessionComplete => "SESSION_COMPLETE",

            Event::RecordAdded => "RECORD_ADDED",
            Event::RecordAddRejected => "RECORD_ADD_REJECTED",
            Event::RecordLookup => "RECORD_LOOKUP",
            Event::RecordDeleted => "RECORD_DELETED",
            Event::RecordDeleteMissed => "RECORD_DELETE_MISSED",

            Event::FetchComplete => "FETCH_COMPLETE",
            Event::FetchFailed => "FETCH_FAILED",

            Event::RequestRejected => "REQUEST_REJECTED",
        }
    }

    /// Severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::RecordLookup => Severity::Trace,
            Event::RecordAddRejected | Event::RecordDeleteMissed | Event::RequestRejected => {
                Severity::Warn
            }
            Event::FetchFailed => Severity::Error,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
