//! # Record Store Module
//!
//! In-memory user registry with add/get/delete semantics.

pub mod record;
pub mod registry;

pub use record::{Record, RecordId, PLACEHOLDER_CREATED_AT};
pub use registry::RecordStore;
