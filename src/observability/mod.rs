//! Observability for userbase
//!
//! Structured JSON logging with a closed set of typed events.
//!
//! # Usage
//!
//! ```ignore
//! use userbase::observability::{Event, Logger, Severity};
//!
//! let logger = Logger::new(Severity::Info);
//! logger.event(Event::RecordAdded, &[("id", "1")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

impl Logger {
    /// Log a typed event at its own severity
    pub fn event(&self, event: Event, fields: &[(&str, &str)]) {
        self.log(event.severity(), event.as_str(), fields);
    }
}
