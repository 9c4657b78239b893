//! userbase - an in-memory user record store
//!
//! The core is [`store::RecordStore`]; the remaining modules hold the
//! stateless helpers and the CLI around it.

pub mod cli;
pub mod config;
pub mod data;
pub mod fetch;
pub mod observability;
pub mod store;

pub use config::AppConfig;
pub use store::{Record, RecordId, RecordStore};
