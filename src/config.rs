//! Application configuration
//!
//! Configuration is an explicit value handed to the components that need it.
//! There is no process-wide settings table.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::observability::Severity;

/// API version advertised by the sample service
pub const API_VERSION: &str = "v1.0";

/// Retry ceiling for remote calls
pub const MAX_RETRIES: u32 = 3;

/// Base URL of the sample API
pub const BASE_URL: &str = "https://api.example.com";

/// Result type for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for [`AppConfig`]
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value outside its allowed range
    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Runtime configuration
///
/// `timeout_secs` and `max_retries` are parsed for callers
/// that make remote calls; nothing in this crate performs one, so they are
/// not read internally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Request timeout in seconds (default 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Retry ceiling for remote calls (default [`MAX_RETRIES`])
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Debug mode (default false)
    #[serde(default)]
    pub debug: bool,

    /// Minimum log severity (default INFO)
    #[serde(default)]
    pub log_level: Severity,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    MAX_RETRIES
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            debug: false,
            log_level: Severity::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_json(&content)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json(content: &str) -> ConfigResult<Self> {
        let config: AppConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeout_secs must be > 0".to_string()));
        }
        Ok(())
    }

    /// Effective minimum log severity. Debug mode lowers it to TRACE.
    pub fn effective_log_level(&self) -> Severity {
        if self.debug {
            Severity::Trace
        } else {
            self.log_level
        }
    }
}
