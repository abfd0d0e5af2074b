//! Unified Agent Contract document model and assembly.
//!
//! Field order in these types is the field order of the serialized document.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Contract version stamped on every document
pub const UAC_VERSION: &str = "1.0";

/// Source framework tag
pub const FRAMEWORK: &str = "crewai";

/// Capability type tag for tools
pub const CAPABILITY_TYPE_TOOL: &str = "tool";

/// Identifier of the single workflow in a document
pub const WORKFLOW_ID: &str = "crewai_workflow";

/// Assembled UAC document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UacDocument {
    pub uac_version: String,
    pub framework: String,
    pub agents: Vec<CanonicalAgent>,
    pub workflows: Vec<WorkflowGraph>,
    pub metadata: DocumentMetadata,
}

/// Normalized agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalAgent {
    pub id: String,
    pub persona: Persona,
    pub goals: Vec<String>,
    pub capabilities: Vec<Capability>,
    pub raw_framework_data: RawFrameworkData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Persona {
    pub name: String,
    pub description: String,
}

/// Capability descriptor for one tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Capability {
    pub name: String,
    #[serde(rename = "type")]
    pub capability_type: String,
    pub metadata: CapabilityMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapabilityMetadata {
    pub origin: String,
    pub class: String,
}

/// Audit trail of the source record. Display only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFrameworkData {
    pub repr: String,
    pub attributes: BTreeMap<String, String>,
}

/// Linear execution graph over the collected agents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowGraph {
    pub id: String,
    pub nodes: Vec<String>,
    pub edges: Vec<WorkflowEdge>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowEdge {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub source: String,
    /// Origin location of the definition source; `null` when unknown
    pub origin_file: Option<String>,
}

impl UacDocument {
    /// Document as a JSON value tree
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Pretty-printed JSON text
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// The single workflow graph of this document
    pub fn workflow(&self) -> Option<&WorkflowGraph> {
        self.workflows.first()
    }

    pub fn agent(&self, id: &str) -> Option<&CanonicalAgent> {
        self.agents.iter().find(|a| a.id == id)
    }
}

/// Compose a document from normalized agents and the workflow graph.
pub fn assemble_document(
    agents: Vec<CanonicalAgent>,
    workflow: WorkflowGraph,
    origin: Option<&Path>,
) -> UacDocument {
    UacDocument {
        uac_version: UAC_VERSION.to_string(),
        framework: FRAMEWORK.to_string(),
        agents,
        workflows: vec![workflow],
        metadata: DocumentMetadata {
            source: FRAMEWORK.to_string(),
            origin_file: origin.map(|p| p.display().to_string()),
        },
    }
}
