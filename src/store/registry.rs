//! # Record Store
//!
//! In-memory registry of user records keyed by id.
//!
//! "Not applicable" outcomes (duplicate add, missing get/delete) are
//! reported through `bool` and `Option`, never as errors.

use std::collections::HashMap;

use crate::config::AppConfig;
use crate::observability::{Event, Logger};

use super::record::{Record, RecordId};

/// Exclusive owner of the live set of records.
///
/// The map's keys are exactly the ids of live records.
#[derive(Debug)]
pub struct RecordStore {
    /// Opaque connection string; retained, never interpreted
    connection_string: String,
    records: HashMap<RecordId, Record>,
    logger: Logger,
}

impl RecordStore {
    /// Create an empty store
    pub fn new(connection_string: impl Into<String>) -> Self {
        Self::with_logger(connection_string, Logger::default())
    }

    /// Create an empty store that logs at the config's level
    pub fn with_config(connection_string: impl Into<String>, config: &AppConfig) -> Self {
        Self::with_logger(connection_string, Logger::new(config.effective_log_level()))
    }

    /// Create an empty store with an explicit logger
    pub fn with_logger(connection_string: impl Into<String>, logger: Logger) -> Self {
        logger.event(Event::StoreOpened, &[]);
        Self {
            connection_string: connection_string.into(),
            records: HashMap::new(),
            logger,
        }
    }

    /// Insert a new record.
    ///
    /// Returns `false` and leaves the store untouched if `id` is taken.
    pub fn add(&mut self, id: RecordId, username: &str, email: &str) -> bool {
        let id_field = id.to_string();

        if self.records.contains_key(&id) {
            self.logger
                .event(Event::RecordAddRejected, &[("id", id_field.as_str())]);
            return false;
        }

        self.records.insert(id, Record::new(id, username, email));
        self.logger.event(
            Event::RecordAdded,
            &[("id", id_field.as_str()), ("username", username)],
        );
        true
    }

    /// Look up a record by id
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        let record = self.records.get(&id);
        if self.logger.enabled(Event::RecordLookup.severity()) {
            let found = if record.is_some() { "true" } else { "false" };
            self.logger
                .event(Event::RecordLookup, &[("found", found), ("id", id.to_string().as_str())]);
        }
        record
    }

    /// Remove a record. Returns whether one existed.
    pub fn delete(&mut self, id: RecordId) -> bool {
        let id_field = id.to_string();

        match self.records.remove(&id) {
            Some(_) => {
                self.logger.event(Event::RecordDeleted, &[("id", id_field.as_str())]);
                true
            }
            None => {
                self.logger
                    .event(Event::RecordDeleteMissed, &[("id", id_field.as_str())]);
                false
            }
        }
    }

    /// Whether a record with `id` is live
    pub fn contains(&self, id: RecordId) -> bool {
        self.records.contains_key(&id)
    }

    /// Number of live records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Live ids in ascending order
    pub fn ids(&self) -> Vec<RecordId> {
        let mut ids: Vec<_> = self.records.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// The connection string given at construction
    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }
}
