//! CLI module for userbase
//!
//! Provides command-line interface for:
//! - demo: the sample flow
//! - sum / transform / fetch: one-shot helpers
//! - session: JSON requests against one record store

mod args;
mod commands;
mod errors;
mod io;
mod session;

pub use args::{Cli, Command, DEFAULT_DATABASE_URL};
pub use commands::{demo, fetch, load_config, run, run_command, sum, transform};
pub use errors::{CliError, CliResult};
pub use io::{read_lines, RequestLines};
pub use session::{apply, run_session, SessionRequest};
