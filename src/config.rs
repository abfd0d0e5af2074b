//! Configuration System
//!
//! Layered configuration for the conversion pipeline: built-in defaults, the
//! global config file, the workspace `charm.toml`, then `CHARM_*` environment
//! variables. Later layers override earlier ones.

use crate::contract::DEFAULT_SCHEMA_PATH;
use crate::error::CharmError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod loader;
mod sources;

pub use loader::ConfigLoader;
pub use sources::{global_config_path, WORKSPACE_CONFIG_FILE};

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharmConfig {
    /// Location of the UAC JSON Schema contract
    #[serde(default = "default_schema_path")]
    pub schema_path: PathBuf,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_schema_path() -> PathBuf {
    PathBuf::from(DEFAULT_SCHEMA_PATH)
}

impl Default for CharmConfig {
    fn default() -> Self {
        Self {
            schema_path: default_schema_path(),
            logging: LoggingConfig::default(),
        }
    }
}

impl CharmConfig {
    /// Validate the configuration, collecting every problem found
    pub fn validate(&self) -> Result<(), CharmError> {
        let mut errors = Vec::new();

        if self.schema_path.as_os_str().is_empty() {
            errors.push("schema_path cannot be empty".to_string());
        }

        let logging = &self.logging;
        if !matches!(logging.format.as_str(), "text" | "json") {
            errors.push(format!(
                "logging.format '{}' must be 'text' or 'json'",
                logging.format
            ));
        }
        if !matches!(logging.output.as_str(), "stdout" | "stderr" | "file") {
            errors.push(format!(
                "logging.output '{}' must be 'stdout', 'stderr', or 'file'",
                logging.output
            ));
        }
        if !matches!(
            logging.level.as_str(),
            "trace" | "debug" | "info" | "warn" | "error" | "off"
        ) {
            errors.push(format!("logging.level '{}' is not a log level", logging.level));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CharmError::Config(errors.join("; ")))
        }
    }
}
