//! Property-based tests for identifier derivation and workflow shape

use charm::normalize::derive_agent_id;
use charm::workflow::linear_edges;
use charm::{CrewAiParser, DefinitionSource, SchemaContract};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

fn permissive_parser() -> CrewAiParser {
    CrewAiParser::with_contract(SchemaContract::from_value(json!({"type": "object"})).unwrap())
}

/// Build an in-memory source with one agent per role, then a crew
fn source_with_roles(roles: &[String]) -> DefinitionSource {
    let mut root = Map::new();
    for (i, role) in roles.iter().enumerate() {
        root.insert(
            format!("agent_{}", i),
            json!({"kind": "agent", "role": role}),
        );
    }
    root.insert("crew".to_string(), json!({"kind": "crew"}));
    DefinitionSource::from_value(Value::Object(root), None).unwrap()
}

proptest! {
    #[test]
    fn test_agent_id_is_deterministic(display in ".*") {
        let first = derive_agent_id(&display);
        let second = derive_agent_id(&display);
        prop_assert_eq!(&first, &second);
        prop_assert!(!first.contains(' '));
    }

    #[test]
    fn test_agent_id_ignores_letter_case(display in "[A-Za-z ]{0,24}") {
        prop_assert_eq!(
            derive_agent_id(&display),
            derive_agent_id(&display.to_lowercase())
        );
    }

    #[test]
    fn test_edges_link_consecutive_nodes(nodes in prop::collection::vec("[a-z]{1,8}", 0..12)) {
        let edges = linear_edges(&nodes);
        prop_assert_eq!(edges.len(), nodes.len().saturating_sub(1));
        for (i, edge) in edges.iter().enumerate() {
            prop_assert_eq!(&edge.from, &nodes[i]);
            prop_assert_eq!(&edge.to, &nodes[i + 1]);
        }
    }

    #[test]
    fn test_workflow_follows_collection_order(
        roles in prop::collection::vec("[A-Z][a-z]{2,10}", 1..8)
    ) {
        let doc = permissive_parser().parse(&source_with_roles(&roles)).unwrap();
        let workflow = doc.workflow().unwrap();
        prop_assert_eq!(&workflow.nodes, &roles);
        prop_assert_eq!(workflow.edges.len(), roles.len() - 1);
        prop_assert_eq!(doc.agents.len(), roles.len());
    }
}
