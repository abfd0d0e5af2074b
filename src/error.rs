//! Error types for the CrewAI to UAC conversion pipeline.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Entity class that a definition source failed to provide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Agent,
    Crew,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Agent => write!(f, "Agent"),
            EntityKind::Crew => write!(f, "Crew"),
        }
    }
}

/// A single schema violation: where in the document and what was expected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    /// JSON pointer into the assembled document (empty for the root)
    pub instance_path: String,
    /// Human readable description of the failed constraint
    pub message: String,
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.instance_path.is_empty() {
            "/"
        } else {
            self.instance_path.as_str()
        };
        write!(f, "{}: {}", path, self.message)
    }
}

/// Pipeline errors
#[derive(Debug, Error)]
pub enum CharmError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to load definition source {origin}: {reason}")]
    Load { origin: String, reason: String },

    #[error("No {0} entity found in definition source")]
    MissingEntity(EntityKind),

    #[error("UAC document failed schema validation: {}", format_violations(.violations))]
    SchemaValidation { violations: Vec<SchemaViolation> },

    #[error("Invalid schema contract {}: {reason}", .path.display())]
    InvalidSchema { path: PathBuf, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CharmError {
    /// The violations carried by a schema validation failure, empty otherwise
    pub fn violations(&self) -> &[SchemaViolation] {
        match self {
            CharmError::SchemaValidation { violations } => violations,
            _ => &[],
        }
    }
}

fn format_violations(violations: &[SchemaViolation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<config::ConfigError> for CharmError {
    fn from(err: config::ConfigError) -> Self {
        CharmError::Config(err.to_string())
    }
}
