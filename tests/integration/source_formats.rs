//! Definition sources in each supported serialization

use super::test_utils::{parser, write_source};
use charm::CharmError;
use tempfile::TempDir;

#[test]
fn test_json_source_converts() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_source(
        &temp_dir,
        "agents.json",
        r#"{
  "planner": {"kind": "agent", "role": "Planner", "goal": "Plan the sprint"},
  "builder": {"kind": "agent", "role": "Builder", "tools": [{"type": "CodeInterpreterTool"}]},
  "crew": {"kind": "crew", "agents": ["planner", "builder"], "process": "sequential"}
}"#,
    );

    let doc = parser().parse_from_path(&path).unwrap();
    let ids: Vec<&str> = doc.agents.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["planner", "builder"]);
    assert_eq!(doc.agents[1].capabilities[0].name, "CodeInterpreterTool");
    assert_eq!(doc.workflow().unwrap().edges.len(), 1);
}

#[test]
fn test_toml_source_converts_in_declaration_order() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_source(
        &temp_dir,
        "agents.toml",
        r#"
[reviewer]
kind = "agent"
name = "Code Reviewer"
backstory = "Reads every diff twice."

[author]
kind = "agent"
name = "Author"

[crew]
kind = "crew"
agents = ["author", "reviewer"]
"#,
    );

    let doc = parser().parse_from_path(&path).unwrap();
    assert_eq!(doc.agents[0].id, "code_reviewer");
    assert_eq!(doc.agents[0].persona.description, "Reads every diff twice.");
    assert_eq!(doc.agents[1].id, "author");
    let workflow = doc.workflow().unwrap();
    assert_eq!(workflow.edges[0].from, "Code Reviewer");
    assert_eq!(workflow.edges[0].to, "Author");
}

#[test]
fn test_entity_without_kind_is_load_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_source(
        &temp_dir,
        "agents.yaml",
        "writer:\n  role: Writer\ncrew:\n  kind: crew\n",
    );

    let err = parser().parse_from_path(&path).unwrap_err();
    match err {
        CharmError::Load { reason, .. } => assert!(reason.contains("'writer'")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_mistyped_tools_is_load_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_source(
        &temp_dir,
        "agents.yaml",
        "writer:\n  kind: agent\n  tools: SearchTool\ncrew:\n  kind: crew\n",
    );

    let err = parser().parse_from_path(&path).unwrap_err();
    assert!(matches!(err, CharmError::Load { .. }));
}

#[test]
fn test_blank_tool_type_is_load_error_not_schema_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_source(
        &temp_dir,
        "agents.yaml",
        "w:\n  kind: agent\n  role: Writer\n  tools:\n    - \"\"\n    - type: \"\"\ncrew:\n  kind: crew\n",
    );

    match parser().parse_from_path(&path).unwrap_err() {
        CharmError::Load { reason, .. } => {
            assert!(reason.contains("agent 'w' is malformed: empty tool type"))
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
