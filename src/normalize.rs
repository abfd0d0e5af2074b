//! Agent Normalizer
//!
//! Maps one CrewAI agent record onto the canonical UAC agent shape. Every
//! field has a default, so normalization never fails on a sparse record.
//!
//! Display value fallback: explicit name, then role label, then
//! [`UNNAMED_AGENT`]. The identifier is the display value lowercased with
//! spaces replaced by underscores. Identifiers are not deduplicated: "Data
//! Analyst" and "data analyst" both become `data_analyst`.

use crate::source::entity::KIND_FIELD;
use crate::source::{SourceAgent, ToolRef};
use crate::uac::{
    CanonicalAgent, Capability, CapabilityMetadata, Persona, RawFrameworkData,
    CAPABILITY_TYPE_TOOL, FRAMEWORK,
};
use serde_json::Value;
use std::collections::BTreeMap;

/// Display value for an agent with neither name nor role
pub const UNNAMED_AGENT: &str = "Unnamed Agent";

/// Display value: name, then role, then [`UNNAMED_AGENT`]
pub fn display_name(agent: &SourceAgent) -> &str {
    agent.name().or_else(|| agent.role()).unwrap_or(UNNAMED_AGENT)
}

/// Derive an agent identifier from a display value
pub fn derive_agent_id(display: &str) -> String {
    display.to_lowercase().replace(' ', "_")
}

/// Normalize one agent record
pub fn normalize_agent(agent: &SourceAgent) -> CanonicalAgent {
    let name = display_name(agent);

    CanonicalAgent {
        id: derive_agent_id(name),
        persona: Persona {
            name: name.to_string(),
            description: agent
                .backstory()
                .or_else(|| agent.role())
                .unwrap_or_default()
                .to_string(),
        },
        goals: agent.goal().map(|g| vec![g.to_string()]).unwrap_or_default(),
        capabilities: agent.tools.iter().map(tool_capability).collect(),
        raw_framework_data: RawFrameworkData {
            repr: agent.to_string(),
            attributes: audit_attributes(agent),
        },
    }
}

fn tool_capability(tool: &ToolRef) -> Capability {
    let class = tool.type_name().to_string();
    Capability {
        name: class.clone(),
        capability_type: CAPABILITY_TYPE_TOOL.to_string(),
        metadata: CapabilityMetadata {
            origin: FRAMEWORK.to_string(),
            class,
        },
    }
}

/// Every public attribute on the record, rendered as display text.
///
/// The `kind` discriminant and underscore-prefixed keys are excluded.
fn audit_attributes(agent: &SourceAgent) -> BTreeMap<String, String> {
    agent
        .record
        .iter()
        .filter(|(key, _)| key.as_str() != KIND_FIELD && !key.starts_with('_'))
        .map(|(key, value)| {
            let rendered = if key == "tools" {
                render_tools(&agent.tools)
            } else {
                render_value(value)
            };
            (key.clone(), rendered)
        })
        .collect()
}

fn render_tools(tools: &[ToolRef]) -> String {
    let names: Vec<&str> = tools.iter().map(|t| t.type_name()).collect();
    format!("[{}]", names.join(", "))
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
