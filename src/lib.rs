//! Charm: CrewAI to Unified Agent Contract conversion
//!
//! Converts declarative CrewAI agent and crew definitions into vendor-neutral
//! UAC documents validated against the published UAC JSON Schema.

pub mod collect;
pub mod config;
pub mod contract;
pub mod error;
pub mod logging;
pub mod normalize;
pub mod parser;
pub mod source;
pub mod uac;
pub mod workflow;

pub use config::{CharmConfig, ConfigLoader};
pub use contract::SchemaContract;
pub use error::{CharmError, EntityKind, SchemaViolation};
pub use parser::CrewAiParser;
pub use source::{load_definition_source, DefinitionSource, SourceFormat};
pub use uac::UacDocument;
