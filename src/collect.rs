//! Entity Collector
//!
//! Partitions a definition source into the agents it declares and the crew
//! that anchors the workflow. Field completeness is not checked here.

use crate::source::{DefinitionSource, Entity, SourceAgent, SourceCrew};
use tracing::debug;

/// An agent together with the name it was declared under
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollectedAgent<'a> {
    pub declared_as: &'a str,
    pub agent: &'a SourceAgent,
}

/// A crew together with the name it was declared under
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollectedCrew<'a> {
    pub declared_as: &'a str,
    pub crew: &'a SourceCrew,
}

/// Result of collection: every agent in declaration order, and the first crew
#[derive(Debug, Clone, PartialEq)]
pub struct CollectedEntities<'a> {
    pub agents: Vec<CollectedAgent<'a>>,
    pub crew: Option<CollectedCrew<'a>>,
}

/// Scan a definition source and classify its declarations by kind.
pub fn collect_entities(source: &DefinitionSource) -> CollectedEntities<'_> {
    let mut agents = Vec::new();
    let mut crew = None;
    let mut extra_crews = 0usize;

    for declared in source.entities() {
        match &declared.entity {
            Entity::Agent(agent) => agents.push(CollectedAgent {
                declared_as: &declared.name,
                agent,
            }),
            Entity::Crew(found) => {
                if crew.is_none() {
                    crew = Some(CollectedCrew {
                        declared_as: &declared.name,
                        crew: found,
                    });
                } else {
                    extra_crews += 1;
                }
            }
            Entity::Other { .. } => {}
        }
    }

    debug!(
        agents = agents.len(),
        crew = crew.map(|c| c.declared_as).unwrap_or("<none>"),
        ignored_crews = extra_crews,
        "Collected entities"
    );

    CollectedEntities { agents, crew }
}
