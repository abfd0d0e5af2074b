//! Schema Contract
//!
//! The UAC JSON Schema, read and compiled once when a pipeline is built and
//! held immutably afterwards. Validation reports every violation.

use crate::error::{CharmError, SchemaViolation};
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default location of the UAC schema, relative to the working directory
pub const DEFAULT_SCHEMA_PATH: &str = "docs/contracts/uac/schema.json";

/// Compiled JSON Schema contract
pub struct SchemaContract {
    path: PathBuf,
    schema: Value,
    validator: jsonschema::Validator,
}

impl fmt::Debug for SchemaContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaContract")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl SchemaContract {
    /// Read and compile the schema at `path`.
    ///
    /// Fails with [`CharmError::NotFound`] if the file is missing and with
    /// [`CharmError::InvalidSchema`] if it is not JSON or not a valid schema.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CharmError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CharmError::NotFound(path.to_path_buf()));
        }

        let text = std::fs::read_to_string(path).map_err(|e| CharmError::InvalidSchema {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let schema: Value = serde_json::from_str(&text).map_err(|e| CharmError::InvalidSchema {
            path: path.to_path_buf(),
            reason: format!("not valid JSON: {}", e),
        })?;

        Self::compile(schema, path.to_path_buf())
    }

    /// Compile a schema held in memory
    pub fn from_value(schema: Value) -> Result<Self, CharmError> {
        Self::compile(schema, PathBuf::from("<memory>"))
    }

    fn compile(schema: Value, path: PathBuf) -> Result<Self, CharmError> {
        let validator = jsonschema::validator_for(&schema).map_err(|e| {
            CharmError::InvalidSchema {
                path: path.clone(),
                reason: e.to_string(),
            }
        })?;
        debug!(schema = %path.display(), "Compiled schema contract");
        Ok(Self {
            path,
            schema,
            validator,
        })
    }

    /// Location the schema was read from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw schema document
    pub fn schema(&self) -> &Value {
        &self.schema
    }

    /// Check a document against the schema
    pub fn validate(&self, document: &Value) -> Result<(), CharmError> {
        let violations: Vec<SchemaViolation> = self
            .validator
            .iter_errors(document)
            .map(|error| SchemaViolation {
                instance_path: error.instance_path.to_string(),
                message: error.to_string(),
            })
            .collect();

        if violations.is_empty() {
            return Ok(());
        }

        warn!(
            schema = %self.path.display(),
            violations = violations.len(),
            first = %violations[0],
            "Document failed schema validation"
        );
        Err(CharmError::SchemaValidation { violations })
    }

    pub fn is_valid(&self, document: &Value) -> bool {
        self.validator.is_valid(document)
    }
}
