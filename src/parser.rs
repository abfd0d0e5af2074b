//! CrewAI to UAC conversion pipeline.
//!
//! Loader, collector, normalizer and workflow builder, assembler, validator.
//! A pass either yields a schema-conformant document or an error; there is
//! no partial output. The parser holds no mutable state, so one instance can
//! serve concurrent passes as long as each pass has its own source.

use crate::collect::collect_entities;
use crate::config::CharmConfig;
use crate::contract::{SchemaContract, DEFAULT_SCHEMA_PATH};
use crate::error::{CharmError, EntityKind};
use crate::normalize::normalize_agent;
use crate::source::{self, DefinitionSource};
use crate::uac::{assemble_document, CanonicalAgent, UacDocument};
use crate::workflow::build_workflow;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// Converts CrewAI definition sources into validated UAC documents
#[derive(Debug)]
pub struct CrewAiParser {
    contract: SchemaContract,
}

impl CrewAiParser {
    /// Build a parser around the schema at `schema_path`.
    pub fn new(schema_path: impl AsRef<Path>) -> Result<Self, CharmError> {
        Ok(Self::with_contract(SchemaContract::load(schema_path)?))
    }

    /// Build a parser around the schema at the default location.
    pub fn with_default_schema() -> Result<Self, CharmError> {
        Self::new(DEFAULT_SCHEMA_PATH)
    }

    /// Build a parser from loaded configuration.
    pub fn from_config(config: &CharmConfig) -> Result<Self, CharmError> {
        Self::new(&config.schema_path)
    }

    pub fn with_contract(contract: SchemaContract) -> Self {
        Self { contract }
    }

    pub fn contract(&self) -> &SchemaContract {
        &self.contract
    }

    /// Load the definition source at `path`.
    pub fn load_definition_source(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<DefinitionSource, CharmError> {
        source::load_definition_source(path)
    }

    /// Convert a loaded definition source into a validated UAC document.
    pub fn parse(&self, source: &DefinitionSource) -> Result<UacDocument, CharmError> {
        let origin = source
            .origin()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<memory>".to_string());
        info!(origin = %origin, "Converting definition source");

        let collected = collect_entities(source);
        if collected.agents.is_empty() {
            return Err(CharmError::MissingEntity(EntityKind::Agent));
        }
        let crew = collected
            .crew
            .ok_or(CharmError::MissingEntity(EntityKind::Crew))?;

        let agents: Vec<CanonicalAgent> = collected
            .agents
            .iter()
            .map(|collected| normalize_agent(collected.agent))
            .collect();
        report_id_collisions(&agents);

        let workflow = build_workflow(&crew, &collected.agents);
        let document = assemble_document(agents, workflow, source.origin());

        let value = document.to_value()?;
        self.contract.validate(&value)?;

        info!(
            origin = %origin,
            agents = document.agents.len(),
            "Converted definition source"
        );
        Ok(document)
    }

    /// Load and convert the definition source at `path`.
    pub fn parse_from_path(&self, path: impl AsRef<Path>) -> Result<UacDocument, CharmError> {
        let source = self.load_definition_source(path)?;
        self.parse(&source)
    }
}

fn report_id_collisions(agents: &[CanonicalAgent]) {
    let mut seen = HashSet::new();
    for agent in agents {
        if !seen.insert(agent.id.as_str()) {
            debug!(id = %agent.id, "Agent identifier shared by more than one agent");
        }
    }
}
