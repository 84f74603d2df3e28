//! PropertyGraph - the labeled property-graph container.

use crate::edge::Edge;
use crate::error::GraphError;
use crate::node::{Node, NodeId};
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// JSON-serializable representation of the graph.
#[derive(Debug, Serialize, Deserialize)]
pub struct GraphSnapshot {
    /// All nodes in the graph
    pub nodes: Vec<Node>,

    /// All edges in the graph
    pub edges: Vec<Edge>,
}

/// A directed, labeled property multigraph.
///
/// The container is a read-only snapshot from the exporter's point of view:
/// producers build it up with [`add_node`](Self::add_node) and
/// [`add_edge`](Self::add_edge), exporters only iterate.
pub struct PropertyGraph {
    /// Underlying directed graph from petgraph
    inner: DiGraph<Node, Edge>,

    /// Index from NodeId to petgraph NodeIndex for O(1) lookup
    node_index: HashMap<NodeId, NodeIndex>,
}

impl Default for PropertyGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            inner: DiGraph::new(),
            node_index: HashMap::new(),
        }
    }

    // === Node Operations ===

    /// Add a node to the graph.
    /// Returns error if a node with the same ID already exists.
    pub fn add_node(&mut self, node: Node) -> Result<NodeIndex, GraphError> {
        if self.node_index.contains_key(&node.id) {
            return Err(GraphError::DuplicateNode(node.id.to_string()));
        }

        let id = node.id.clone();
        let idx = self.inner.add_node(node);
        self.node_index.insert(id, idx);
        Ok(idx)
    }

    /// Get a node by ID.
    pub fn get_node(&self, id: &NodeId) -> Option<&Node> {
        self.node_index.get(id).map(|&idx| &self.inner[idx])
    }

    /// Check if a node exists.
    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.node_index.contains_key(id)
    }

    /// Get count of nodes.
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Iterate over all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.inner.node_weights()
    }

    /// All nodes sorted by ID.
    ///
    /// Exporters emit nodes in this order so the same graph always produces
    /// byte-identical output, however it was assembled.
    pub fn nodes_sorted(&self) -> Vec<&Node> {
        let mut nodes: Vec<&Node> = self.inner.node_weights().collect();
        nodes.sort_by(|a, b| a.id.cmp(&b.id));
        nodes
    }

    // === Edge Operations ===

    /// Add an edge to the graph.
    /// Validates that source and target nodes exist.
    pub fn add_edge(&mut self, edge: Edge) -> Result<(), GraphError> {
        let source_idx = self
            .node_index
            .get(&edge.source)
            .ok_or_else(|| GraphError::NodeNotFound(edge.source.to_string()))?;
        let target_idx = self
            .node_index
            .get(&edge.target)
            .ok_or_else(|| GraphError::NodeNotFound(edge.target.to_string()))?;

        // Multigraph: parallel edges are allowed, even with the same type.
        self.inner.add_edge(*source_idx, *target_idx, edge);
        Ok(())
    }

    /// Get edge count.
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Iterate over all edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.inner.edge_weights()
    }

    // === Serialization ===

    /// Serialize the graph to a JSON file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), GraphError> {
        let snapshot = GraphSnapshot {
            nodes: self.inner.node_weights().cloned().collect(),
            edges: self.inner.edge_weights().cloned().collect(),
        };

        let file = std::fs::File::create(path.as_ref())?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &snapshot)
            .map_err(|e| GraphError::SerializationError(e.to_string()))?;

        Ok(())
    }

    /// Load a graph from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, GraphError> {
        let file = std::fs::File::open(path.as_ref())?;
        let reader = std::io::BufReader::new(file);
        let snapshot: GraphSnapshot = serde_json::from_reader(reader)
            .map_err(|e| GraphError::DeserializationError(e.to_string()))?;

        Self::from_snapshot(snapshot)
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String, GraphError> {
        let snapshot = GraphSnapshot {
            nodes: self.inner.node_weights().cloned().collect(),
            edges: self.inner.edge_weights().cloned().collect(),
        };

        serde_json::to_string_pretty(&snapshot)
            .map_err(|e| GraphError::SerializationError(e.to_string()))
    }

    /// Deserialize from JSON string.
    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        let snapshot: GraphSnapshot = serde_json::from_str(json)
            .map_err(|e| GraphError::DeserializationError(e.to_string()))?;

        Self::from_snapshot(snapshot)
    }

    fn from_snapshot(snapshot: GraphSnapshot) -> Result<Self, GraphError> {
        let mut graph = Self::new();

        // Add all nodes first so edge endpoint validation can see them
        for node in snapshot.nodes {
            graph.add_node(node)?;
        }

        for edge in snapshot.edges {
            graph.add_edge(edge)?;
        }

        Ok(graph)
    }
}

impl std::fmt::Debug for PropertyGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyGraph")
            .field("node_count", &self.node_count())
            .field("edge_count", &self.edge_count())
            .finish()
    }
}
