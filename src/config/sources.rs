//! Config sources: the global user file, the workspace file and the
//! `CHARM_*` environment.

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment, File, FileFormat, Map};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Workspace config file name, looked up in the workspace root
pub const WORKSPACE_CONFIG_FILE: &str = "charm.toml";

/// Environment variables owned by the logging bootstrap, not the config layer
pub(crate) const LOGGING_ENV_VARS: &[&str] = &[
    "CHARM_LOG",
    "CHARM_LOG_FORMAT",
    "CHARM_LOG_OUTPUT",
    "CHARM_LOG_MODULES",
];

/// Path to the global config file: $XDG_CONFIG_HOME/charm/config.toml,
/// falling back to ~/.config/charm/config.toml.
pub fn global_config_path() -> Option<PathBuf> {
    let config_home = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .filter(|p| p.is_absolute())
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
    Some(config_home.join("charm").join("config.toml"))
}

/// Add the global config file to the builder if it exists.
pub fn add_global_file(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    match global_config_path() {
        Some(path) if path.exists() => Ok(add_file(builder, &path)),
        Some(path) => {
            debug!(config_path = %path.display(), "No global configuration file");
            Ok(builder)
        }
        None => Ok(builder),
    }
}

/// Add `<workspace_root>/charm.toml` to the builder if it exists.
pub fn add_workspace_file(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let path = workspace_root.join(WORKSPACE_CONFIG_FILE);
    if path.exists() {
        Ok(add_file(builder, &path))
    } else {
        Ok(builder)
    }
}

pub(super) fn add_file(builder: ConfigBuilder<DefaultState>, path: &Path) -> ConfigBuilder<DefaultState> {
    builder.add_source(File::from(path).format(FileFormat::Toml).required(false))
}

/// Add the `CHARM_*` environment layer (nested keys use `__`).
///
/// Logging variables are read directly by [`crate::logging::init_logging`]
/// and are left out of this layer.
pub fn add_environment(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("CHARM")
            .prefix_separator("_")
            .separator("__")
            .source(Some(config_env_vars(std::env::vars()))),
    )
}

fn config_env_vars(vars: impl Iterator<Item = (String, String)>) -> Map<String, String> {
    vars.filter(|(key, _)| key.starts_with("CHARM_") && !LOGGING_ENV_VARS.contains(&key.as_str()))
        .collect()
}
