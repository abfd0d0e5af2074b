//! Definition Sources
//!
//! A definition source is the declarative stand-in for a CrewAI module: an
//! ordered namespace of declaration names, each bound to an entity record
//! carrying an explicit `kind` discriminant. Sources are loaded from YAML,
//! JSON, or TOML documents and are held only for the duration of one
//! conversion pass.

pub mod entity;
pub mod loader;

pub use entity::{DeclaredEntity, Entity, SourceAgent, SourceCrew, ToolRef, ToolSpec};
pub use loader::{load_definition_source, SourceFormat};

use crate::error::CharmError;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Loaded namespace of declared entities
#[derive(Debug, Clone, PartialEq)]
pub struct DefinitionSource {
    origin: Option<PathBuf>,
    entities: Vec<DeclaredEntity>,
}

impl DefinitionSource {
    /// Parse an in-memory definition document. The result has no origin location.
    pub fn from_text(text: &str, format: SourceFormat) -> Result<Self, CharmError> {
        let value = format.parse(text).map_err(|reason| CharmError::Load {
            origin: "<memory>".to_string(),
            reason,
        })?;
        Self::from_value(value, None)
    }

    /// Build a namespace from an already-parsed document root.
    ///
    /// A `null` root (an empty document) is an empty namespace. Any other
    /// non-mapping root, or an entry without a string `kind`, is a load error.
    pub fn from_value(root: Value, origin: Option<PathBuf>) -> Result<Self, CharmError> {
        let origin_label = origin
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<memory>".to_string());

        let members = match root {
            Value::Null => serde_json::Map::new(),
            Value::Object(members) => members,
            other => {
                return Err(CharmError::Load {
                    origin: origin_label,
                    reason: format!(
                        "document root must be a mapping of declarations, found {}",
                        value_type_name(&other)
                    ),
                })
            }
        };

        let entities = members
            .into_iter()
            .map(|(name, record)| DeclaredEntity::decode(name, record))
            .collect::<Result<Vec<_>, String>>()
            .map_err(|reason| CharmError::Load {
                origin: origin_label,
                reason,
            })?;

        Ok(Self { origin, entities })
    }

    /// Location the source was loaded from, if any
    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    /// Declared entities in declaration order
    pub fn entities(&self) -> &[DeclaredEntity] {
        &self.entities
    }

    /// Look up a declaration by name
    pub fn get(&self, name: &str) -> Option<&DeclaredEntity> {
        self.entities.iter().find(|e| e.name == name)
    }

    /// Whether a declaration with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

pub(crate) fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
