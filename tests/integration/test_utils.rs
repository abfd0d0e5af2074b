//! Shared test utilities for integration tests

use charm::contract::DEFAULT_SCHEMA_PATH;
use charm::CrewAiParser;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

/// Serializes access to HOME / XDG_CONFIG_HOME / CHARM_* across tests
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Schema contract shipped with the crate
pub fn schema_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_SCHEMA_PATH)
}

/// Reference CrewAI fixture shipped with the crate
pub fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/crewai-research-agent/agents.yaml")
}

/// Parser bound to the shipped schema contract
pub fn parser() -> CrewAiParser {
    CrewAiParser::new(schema_path()).unwrap()
}

/// Write a definition file into `dir` and return its path
pub fn write_source(dir: &TempDir, file_name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(file_name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Environment variable state to restore after test
struct EnvState {
    vars: Vec<(&'static str, Option<String>)>,
}

const ISOLATED_VARS: [&str; 3] = ["HOME", "XDG_CONFIG_HOME", "CHARM_SCHEMA_PATH"];

impl EnvState {
    fn capture() -> Self {
        Self {
            vars: ISOLATED_VARS
                .iter()
                .map(|name| (*name, std::env::var(name).ok()))
                .collect(),
        }
    }

    fn restore(self) {
        for (name, value) in self.vars {
            match value {
                Some(value) => std::env::set_var(name, value),
                None => std::env::remove_var(name),
            }
        }
    }
}

/// Run `f` with an isolated XDG config home and no CHARM_* overrides.
///
/// The closure receives the config home directory; the previous environment
/// is restored afterwards, even if the closure panics.
pub fn with_isolated_config_home<F, R>(f: F) -> R
where
    F: FnOnce(&Path) -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let temp_dir = TempDir::new().unwrap();
    let config_home = temp_dir.path().join("config");
    std::fs::create_dir_all(&config_home).unwrap();

    let state = EnvState::capture();
    std::env::set_var("HOME", temp_dir.path());
    std::env::set_var("XDG_CONFIG_HOME", &config_home);
    std::env::remove_var("CHARM_SCHEMA_PATH");

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| f(&config_home)));
    state.restore();

    match result {
        Ok(value) => value,
        Err(panic) => std::panic::resume_unwind(panic),
    }
}
