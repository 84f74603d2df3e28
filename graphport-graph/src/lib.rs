//! # graphport-graph
//!
//! Labeled property-graph data structures for Graphport.
//!
//! This crate provides the graph model consumed by the Graphport exporters:
//!
//! - **Node**: a stable identifier (integer or string), a label set, and
//!   scalar key-value properties
//! - **Edge**: directed, with a relationship-type string and properties;
//!   parallel edges between the same endpoints are allowed
//! - **PropertyGraph**: the container, backed by petgraph, with edge-endpoint
//!   validation and JSON snapshot persistence
//!
//! ## Example
//!
//! ```rust
//! use graphport_graph::{Edge, Node, NodeId, PropertyGraph};
//!
//! let mut graph = PropertyGraph::new();
//!
//! graph.add_node(
//!     Node::new("alice")
//!         .with_label("Person")
//!         .with_property("name", "Alice"),
//! ).unwrap();
//!
//! graph.add_node(
//!     Node::new("bob")
//!         .with_label("Person")
//!         .with_property("name", "Bob"),
//! ).unwrap();
//!
//! graph.add_edge(Edge::new("alice", "bob", "KNOWS").unwrap()).unwrap();
//!
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.edge_count(), 1);
//! assert_eq!(graph.get_node(&NodeId::from("alice")).unwrap().name(), Some("Alice"));
//! ```

pub mod edge;
pub mod error;
pub mod graph;
pub mod node;

// Re-exports for convenient access
pub use edge::Edge;
pub use error::{EdgeError, GraphError};
pub use graph::{GraphSnapshot, PropertyGraph};
pub use node::{Node, NodeId, PropertyValue};
