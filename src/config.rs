//! Configuration management for devrun
//!
//! Settings are read from environment variables with defaults for anything
//! unset or unparseable. CLI flags are applied on top by the binary.
//!
//! # Environment Variables
//!
//! - `DEVRUN_LOG_LEVEL`: Logging level - default: "info"
//! - `DEVRUN_LOG_JSON`: Emit JSON logs (true|false) - default: "false"
//! - `DEVRUN_LOG_BUFFER`: Lines buffered in the runner log channel - default: "100"
//! - `DEVRUN_SCAN_DEPTH`: Directory levels searched by task discovery - default: "2"
//!
//! # Example
//!
//! ```no_run
//! use devrun::DevrunConfig;
//!
//! let config = DevrunConfig::default();
//! config.validate().expect("Invalid configuration");
//!
//! let runner = config.runner();
//! let catalog = config.task_catalog();
//! ```

use crate::runner::{Runner, DEFAULT_LOG_BUFFER};
use crate::tasks::{TaskCatalog, DEFAULT_SCAN_DEPTH};
use std::collections::HashMap;
use std::env;
use std::fmt;
use thiserror::Error;

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_LOG_JSON: bool = false;
const MAX_LOG_BUFFER: usize = 65_536;
const MAX_SCAN_DEPTH: usize = 8;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevrunConfig {
    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,

    pub log_json: bool,

    /// Capacity of the runner's log channel
    pub log_buffer: usize,

    /// Depth of the bounded extension scan used by task discovery
    pub scan_depth: usize,
}

impl Default for DevrunConfig {
    /// Load from `DEVRUN_*` environment variables, falling back to defaults
    fn default() -> Self {
        let log_level = env::var("DEVRUN_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        let log_json = env::var("DEVRUN_LOG_JSON")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(DEFAULT_LOG_JSON);

        let log_buffer = env::var("DEVRUN_LOG_BUFFER")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(DEFAULT_LOG_BUFFER);

        let scan_depth = env::var("DEVRUN_SCAN_DEPTH")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(DEFAULT_SCAN_DEPTH);

        Self {
            log_level,
            log_json,
            log_buffer,
            scan_depth,
        }
    }
}

impl DevrunConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_buffer == 0 || self.log_buffer > MAX_LOG_BUFFER {
            return Err(ConfigError::ValidationFailed(format!(
                "Log buffer must be between 1 and {} lines, got {}",
                MAX_LOG_BUFFER, self.log_buffer
            )));
        }

        if self.scan_depth == 0 || self.scan_depth > MAX_SCAN_DEPTH {
            return Err(ConfigError::ValidationFailed(format!(
                "Scan depth must be between 1 and {}, got {}",
                MAX_SCAN_DEPTH, self.scan_depth
            )));
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        Ok(())
    }

    /// Fresh runner sized by `log_buffer`
    pub fn runner(&self) -> Runner {
        Runner::with_capacity(self.log_buffer)
    }

    /// Task catalog over the real filesystem using `scan_depth`
    pub fn task_catalog(&self) -> TaskCatalog {
        TaskCatalog::default().with_scan_depth(self.scan_depth)
    }

    pub fn to_display_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();

        map.insert("log_level".to_string(), self.log_level.clone());
        map.insert("log_json".to_string(), self.log_json.to_string());
        map.insert("log_buffer".to_string(), self.log_buffer.to_string());
        map.insert("scan_depth".to_string(), self.scan_depth.to_string());

        map
    }
}

impl fmt::Display for DevrunConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Devrun Configuration:")?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        writeln!(f, "  JSON Logs: {}", self.log_json)?;
        writeln!(f, "  Log Buffer: {} lines", self.log_buffer)?;
        writeln!(f, "  Scan Depth: {}", self.scan_depth)?;
        Ok(())
    }
}
