//! CLI-specific error types
//!
//! Every variant renders as `<CODE>: <message>`. `Io` ends the process;
//! `BadRequest` is answered with an error envelope inside a session.

use std::io;

use thiserror::Error;

use crate::config::ConfigError;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file error
    #[error("USERBASE_CLI_CONFIG_ERROR: {0}")]
    Config(#[from] ConfigError),

    /// I/O error (stdin/stdout)
    #[error("USERBASE_CLI_IO_ERROR: {0}")]
    Io(#[from] io::Error),

    /// Response could not be encoded
    #[error("USERBASE_CLI_IO_ERROR: JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Request could not be decoded
    #[error("USERBASE_CLI_BAD_REQUEST: {0}")]
    BadRequest(String),
}

impl CliError {
    /// Undecodable request
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        match self {
            Self::Config(_) => "USERBASE_CLI_CONFIG_ERROR",
            Self::Io(_) | Self::Json(_) => "USERBASE_CLI_IO_ERROR",
            Self::BadRequest(_) => "USERBASE_CLI_BAD_REQUEST",
        }
    }

    /// Whether a session must stop on this error
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::BadRequest(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code() {
        let err = CliError::bad_request("missing op");
        assert_eq!(err.to_string(), "USERBASE_CLI_BAD_REQUEST: missing op");
        assert_eq!(err.code_str(), "USERBASE_CLI_BAD_REQUEST");
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_config_error_conversion() {
        let err: CliError = ConfigError::Invalid("timeout_secs must be > 0".into()).into();
        assert!(matches!(err, CliError::Config(_)));
        assert_eq!(err.code_str(), "USERBASE_CLI_CONFIG_ERROR");
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn test_io_error_is_fatal() {
        let err: CliError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert_eq!(err.code_str(), "USERBASE_CLI_IO_ERROR");
        assert!(err.is_fatal());
    }
}
