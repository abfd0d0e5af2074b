//! Workflow Builder
//!
//! Derives the execution graph from the collected agents. The graph is a
//! strict linear chain in collection order; the crew's declared member order
//! and process are not consulted.
//!
//! Node values use the display fallback name, then role, then the entity
//! type name. This differs from the normalizer's fallback for agents with
//! neither name nor role ("Agent" here, "Unnamed Agent" there), and node
//! values are not lowercased, so nodes need not equal agent ids.

use crate::collect::{CollectedAgent, CollectedCrew};
use crate::source::SourceAgent;
use crate::uac::{WorkflowEdge, WorkflowGraph, WORKFLOW_ID};
use tracing::{debug, warn};

/// Node value for one agent
pub fn node_name(agent: &SourceAgent) -> &str {
    agent
        .name()
        .or_else(|| agent.role())
        .unwrap_or(SourceAgent::TYPE_NAME)
}

/// Edges linking each node to the next one
pub fn linear_edges(nodes: &[String]) -> Vec<WorkflowEdge> {
    nodes
        .windows(2)
        .map(|pair| WorkflowEdge {
            from: pair[0].clone(),
            to: pair[1].clone(),
        })
        .collect()
}

/// Build the workflow graph for a crew and its collected agents.
pub fn build_workflow(crew: &CollectedCrew<'_>, agents: &[CollectedAgent<'_>]) -> WorkflowGraph {
    for member in &crew.crew.agents {
        if !agents.iter().any(|a| a.declared_as == member.as_str()) {
            warn!(
                crew = crew.declared_as,
                member = %member,
                "Crew references an agent that is not declared in the source"
            );
        }
    }

    let nodes: Vec<String> = agents
        .iter()
        .map(|a| node_name(a.agent).to_string())
        .collect();
    let edges = linear_edges(&nodes);

    debug!(
        crew = crew.declared_as,
        process = crew.crew.process.as_deref().unwrap_or("<unspecified>"),
        nodes = nodes.len(),
        edges = edges.len(),
        "Built linear workflow"
    );

    WorkflowGraph {
        id: WORKFLOW_ID.to_string(),
        nodes,
        edges,
    }
}
