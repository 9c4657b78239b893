//! CLI argument definitions using clap
//!
//! Commands:
//! - userbase demo [--config <path>]
//! - userbase sum <a> <b>
//! - userbase transform <items>...
//! - userbase fetch <id>
//! - userbase session [--config <path>] [--database-url <url>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Connection string used when none is given
pub const DEFAULT_DATABASE_URL: &str = "postgresql://localhost/testdb";

/// userbase - an in-memory user record store
#[derive(Parser, Debug)]
#[command(name = "userbase")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Defaults to `demo` when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Run the sample flow and print its results
    Demo {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Add two integers
    Sum {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },

    /// Uppercase a list of words
    Transform {
        #[arg(required = true)]
        items: Vec<String>,
    },

    /// Fetch a user profile by id
    Fetch {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },

    /// Apply JSON requests from stdin to a single record store
    Session {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Opaque connection string retained by the store
        #[arg(long, default_value = DEFAULT_DATABASE_URL)]
        database_url: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// The subcommand to run, falling back to `demo`
    pub fn command_or_default(self) -> Command {
        self.command.unwrap_or(Command::Demo { config: None })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_demo() {
        let cli = Cli::try_parse_from(["userbase"]).unwrap();
        assert_eq!(cli.command_or_default(), Command::Demo { config: None });
    }

    #[test]
    fn test_sum_accepts_negatives() {
        let cli = Cli::try_parse_from(["userbase", "sum", "-3", "10"]).unwrap();
        assert_eq!(cli.command_or_default(), Command::Sum { a: -3, b: 10 });
    }

    #[test]
    fn test_session_default_database_url() {
        let cli = Cli::try_parse_from(["userbase", "session"]).unwrap();
        assert_eq!(
            cli.command_or_default(),
            Command::Session {
                config: None,
                database_url: DEFAULT_DATABASE_URL.to_string(),
            }
        );
    }

    #[test]
    fn test_transform_requires_items() {
        assert!(Cli::try_parse_from(["userbase", "transform"]).is_err());
    }
}
