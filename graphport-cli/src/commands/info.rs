//! Implementation of the `graphport info` command.
//!
//! Loads a graph snapshot and prints a short summary: node and edge counts,
//! the distinct labels, and the distinct relationship types.

use crate::errors::CliError;
use crate::output;
use graphport_graph::PropertyGraph;
use std::collections::BTreeSet;
use std::path::Path;

/// Summary of a graph snapshot.
#[derive(Debug, PartialEq, Eq)]
pub struct GraphSummary {
    pub node_count: usize,
    pub edge_count: usize,
    pub labels: Vec<String>,
    pub relationship_types: Vec<String>,
}

/// Run the info command.
pub fn run_info(input: &str) -> Result<GraphSummary, CliError> {
    let path = Path::new(input);
    if !path.exists() {
        return Err(CliError::GraphNotFound {
            path: input.to_string(),
        });
    }

    let graph = PropertyGraph::load_from_file(path)?;
    let summary = summarize(&graph);

    output::info(&format!(
        "{}: {} nodes, {} edges",
        path.display(),
        summary.node_count,
        summary.edge_count
    ));
    if !summary.labels.is_empty() {
        output::info(&format!("Labels: {}", summary.labels.join(", ")));
    }
    if !summary.relationship_types.is_empty() {
        output::info(&format!(
            "Relationships: {}",
            summary.relationship_types.join(", ")
        ));
    }

    Ok(summary)
}

fn summarize(graph: &PropertyGraph) -> GraphSummary {
    let labels: BTreeSet<String> = graph
        .nodes()
        .flat_map(|n| n.labels.iter().cloned())
        .collect();
    let relationship_types: BTreeSet<String> =
        graph.edges().map(|e| e.relationship.clone()).collect();

    GraphSummary {
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        labels: labels.into_iter().collect(),
        relationship_types: relationship_types.into_iter().collect(),
    }
}
