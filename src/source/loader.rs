//! Definition Source Loader
//!
//! Reads a definition document from disk and decodes it into a
//! [`DefinitionSource`]. Load failures are never retried.

use crate::error::CharmError;
use crate::source::DefinitionSource;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info};

/// Serialization of a definition document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Yaml,
    Json,
    Toml,
}

impl SourceFormat {
    /// Infer the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "yaml" | "yml" => Some(SourceFormat::Yaml),
            "json" => Some(SourceFormat::Json),
            "toml" => Some(SourceFormat::Toml),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceFormat::Yaml => "yaml",
            SourceFormat::Json => "json",
            SourceFormat::Toml => "toml",
        }
    }

    /// Parse document text into a generic value tree. Blank text is `null`.
    pub(crate) fn parse(&self, text: &str) -> Result<Value, String> {
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        match self {
            SourceFormat::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
            SourceFormat::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
            SourceFormat::Toml => toml::from_str(text).map_err(|e| e.to_string()),
        }
    }
}

/// Load the definition source at `path`.
///
/// Fails with [`CharmError::NotFound`] if nothing exists at `path`, and with
/// [`CharmError::Load`] if the file cannot be read, has an unsupported
/// extension, does not parse, or declares malformed entities.
pub fn load_definition_source(path: impl AsRef<Path>) -> Result<DefinitionSource, CharmError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(CharmError::NotFound(path.to_path_buf()));
    }

    let origin = path.display().to_string();
    let load_error = |reason: String| CharmError::Load {
        origin: origin.clone(),
        reason,
    };

    let format = SourceFormat::from_path(path).ok_or_else(|| {
        load_error("unsupported extension (expected .yaml, .yml, .json, or .toml)".to_string())
    })?;

    let text = std::fs::read_to_string(path).map_err(|e| load_error(e.to_string()))?;
    let root = format.parse(&text).map_err(load_error)?;

    let source = DefinitionSource::from_value(root, Some(path.to_path_buf()))?;

    info!(
        origin = %origin,
        format = format.as_str(),
        declarations = source.len(),
        "Loaded definition source"
    );
    for declared in source.entities() {
        debug!(name = %declared.name, kind = declared.entity.kind(), "Declared entity");
    }

    Ok(source)
}
