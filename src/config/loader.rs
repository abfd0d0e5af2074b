//! Configuration loading through the `config` crate.

use super::sources;
use super::CharmConfig;
use crate::contract::DEFAULT_SCHEMA_PATH;
use crate::error::CharmError;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};
use std::path::Path;
use tracing::debug;

/// Loads [`CharmConfig`] from layered sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Precedence (lowest to highest): defaults, global file, workspace
    /// `charm.toml`, `CHARM_*` environment variables (the `CHARM_LOG*`
    /// logging variables excluded). A relative
    /// `schema_path` is resolved against `workspace_root`.
    pub fn load(workspace_root: &Path) -> Result<CharmConfig, CharmError> {
        let builder = builder_with_defaults()?;
        let builder = sources::add_global_file(builder)?;
        let builder = sources::add_workspace_file(builder, workspace_root)?;
        let builder = sources::add_environment(builder);

        let mut config: CharmConfig = builder.build()?.try_deserialize()?;
        if config.schema_path.is_relative() {
            config.schema_path = workspace_root.join(&config.schema_path);
        }
        config.validate()?;

        debug!(
            workspace_root = %workspace_root.display(),
            schema_path = %config.schema_path.display(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Load configuration from a single TOML file on top of the defaults
    pub fn load_from_file(path: &Path) -> Result<CharmConfig, CharmError> {
        if !path.exists() {
            return Err(CharmError::NotFound(path.to_path_buf()));
        }
        let builder = sources::add_file(builder_with_defaults()?, path);
        let config: CharmConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("schema_path", DEFAULT_SCHEMA_PATH)?
        .set_default("logging.level", "info")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "stderr")
}
