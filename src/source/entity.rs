//! Entity records declared in a definition source.
//!
//! Each top-level declaration carries an explicit `kind` discriminant. Agent
//! and crew records are decoded into typed shapes at load time; any other
//! kind is kept as an opaque record so the namespace stays complete.

use crate::source::value_type_name;
use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

pub const KIND_AGENT: &str = "agent";
pub const KIND_CREW: &str = "crew";

/// Field holding the entity discriminant
pub const KIND_FIELD: &str = "kind";

/// One named declaration in a definition source
#[derive(Debug, Clone, PartialEq)]
pub struct DeclaredEntity {
    /// Top-level declaration name
    pub name: String,
    pub entity: Entity,
}

/// Tagged entity variants
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Agent(SourceAgent),
    Crew(SourceCrew),
    /// Any other declared kind (tasks, tools, constants). Ignored by collection.
    Other { kind: String, record: Map<String, Value> },
}

impl Entity {
    /// Discriminant as declared in the source
    pub fn kind(&self) -> &str {
        match self {
            Entity::Agent(_) => KIND_AGENT,
            Entity::Crew(_) => KIND_CREW,
            Entity::Other { kind, .. } => kind.as_str(),
        }
    }
}

impl DeclaredEntity {
    /// Decode one top-level declaration, validating its discriminant.
    pub(crate) fn decode(name: String, record: Value) -> Result<Self, String> {
        let record = match record {
            Value::Object(record) => record,
            other => {
                return Err(format!(
                    "declaration '{}' must be a mapping with a '{}' field, found {}",
                    name,
                    KIND_FIELD,
                    value_type_name(&other)
                ))
            }
        };

        let kind = match record.get(KIND_FIELD) {
            Some(Value::String(kind)) => kind.clone(),
            Some(other) => {
                return Err(format!(
                    "declaration '{}' has a non-string '{}' ({})",
                    name,
                    KIND_FIELD,
                    value_type_name(other)
                ))
            }
            None => {
                return Err(format!(
                    "declaration '{}' is missing the '{}' discriminant",
                    name, KIND_FIELD
                ))
            }
        };

        let entity = if kind.eq_ignore_ascii_case(KIND_AGENT) {
            Entity::Agent(SourceAgent::from_record(record).map_err(|e| {
                format!("agent '{}' is malformed: {}", name, e)
            })?)
        } else if kind.eq_ignore_ascii_case(KIND_CREW) {
            Entity::Crew(SourceCrew::from_record(record).map_err(|e| {
                format!("crew '{}' is malformed: {}", name, e)
            })?)
        } else {
            Entity::Other { kind, record }
        };

        Ok(Self { name, entity })
    }
}

/// Tool attached to an agent: a bare type name or a configured tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolRef {
    Named(String),
    Configured(ToolSpec),
}

/// Configured tool with its concrete type name and arbitrary settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSpec {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(flatten)]
    pub config: Map<String, Value>,
}

impl ToolRef {
    /// Concrete tool type name
    pub fn type_name(&self) -> &str {
        match self {
            ToolRef::Named(name) => name.as_str(),
            ToolRef::Configured(spec) => spec.type_name.as_str(),
        }
    }
}

/// Typed fields of an agent record
#[derive(Debug, Deserialize)]
struct AgentFields {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    backstory: Option<String>,
    #[serde(default)]
    goal: Option<String>,
    #[serde(default)]
    tools: Option<Vec<ToolRef>>,
}

/// CrewAI agent record. Every field is optional.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceAgent {
    pub name: Option<String>,
    pub role: Option<String>,
    pub backstory: Option<String>,
    pub goal: Option<String>,
    pub tools: Vec<ToolRef>,
    /// Full record as declared, including fields not modelled above
    pub record: Map<String, Value>,
}

impl SourceAgent {
    /// Type name used when an agent has neither name nor role
    pub const TYPE_NAME: &'static str = "Agent";

    pub(crate) fn from_record(record: Map<String, Value>) -> Result<Self, serde_json::Error> {
        let fields: AgentFields = serde_json::from_value(Value::Object(record.clone()))?;
        let tools = fields.tools.unwrap_or_default();
        if tools.iter().any(|tool| tool.type_name().trim().is_empty()) {
            return Err(serde_json::Error::custom("empty tool type"));
        }
        Ok(Self {
            name: fields.name,
            role: fields.role,
            backstory: fields.backstory,
            goal: fields.goal,
            tools,
            record,
        })
    }

    /// Explicit name, treating blank strings as absent
    pub fn name(&self) -> Option<&str> {
        non_blank(self.name.as_deref())
    }

    /// Role label, treating blank strings as absent
    pub fn role(&self) -> Option<&str> {
        non_blank(self.role.as_deref())
    }

    /// Backstory text, treating blank strings as absent
    pub fn backstory(&self) -> Option<&str> {
        non_blank(self.backstory.as_deref())
    }

    /// Goal text, treating blank strings as absent
    pub fn goal(&self) -> Option<&str> {
        non_blank(self.goal.as_deref())
    }
}

impl fmt::Display for SourceAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", Self::TYPE_NAME)?;
        let text_fields = [
            ("name", &self.name),
            ("role", &self.role),
            ("goal", &self.goal),
            ("backstory", &self.backstory),
        ];
        for (field, value) in text_fields {
            if let Some(value) = value {
                write!(f, "{}={:?}, ", field, value)?;
            }
        }
        let tools: Vec<&str> = self.tools.iter().map(|t| t.type_name()).collect();
        write!(f, "tools=[{}])", tools.join(", "))
    }
}

/// Typed fields of a crew record
#[derive(Debug, Deserialize)]
struct CrewFields {
    #[serde(default)]
    agents: Option<Vec<String>>,
    #[serde(default)]
    process: Option<String>,
}

/// CrewAI crew record
#[derive(Debug, Clone, PartialEq)]
pub struct SourceCrew {
    /// Declaration names of member agents
    pub agents: Vec<String>,
    /// Declared process (sequential, hierarchical); informational only
    pub process: Option<String>,
    pub record: Map<String, Value>,
}

impl SourceCrew {
    pub(crate) fn from_record(record: Map<String, Value>) -> Result<Self, serde_json::Error> {
        let fields: CrewFields = serde_json::from_value(Value::Object(record.clone()))?;
        Ok(Self {
            agents: fields.agents.unwrap_or_default(),
            process: fields.process,
            record,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
