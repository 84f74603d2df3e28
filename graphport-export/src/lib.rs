//! Multi-backend export engine for property graphs.
//!
//! Takes a [`graphport_graph::PropertyGraph`] and writes it out as Graphviz
//! DOT, a Mermaid flowchart, a D2 diagram, RDF Turtle, or a self-contained
//! D3 force-layout HTML page. Backends that have a CLI renderer (`dot`,
//! `mmdc`, `d2`) can additionally produce an SVG or PNG next to the textual
//! file; a missing renderer binary downgrades to a warning instead of
//! failing the export.
//!
//! Output is deterministic: exporting the same graph with the same options
//! twice yields byte-identical files.
//!
//! # Example
//!
//! ```no_run
//! use graphport_export::{export, Backend, ExportOptions, NodeLabel};
//! use graphport_graph::{Edge, Node, PropertyGraph};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph = PropertyGraph::new();
//! graph.add_node(Node::new("alice").with_label("Person").with_property("name", "Alice"))?;
//! graph.add_node(Node::new("bob").with_label("Person").with_property("name", "Bob"))?;
//! graph.add_edge(Edge::new("alice", "bob", "KNOWS")?)?;
//!
//! let options = ExportOptions::new(Backend::Graphviz)
//!     .with_node_label(NodeLabel::LabelAndName)
//!     .with_color_by_label(true);
//! let outcome = export(&graph, "social.dot", &options)?;
//! println!("wrote {}", outcome.primary_path().display());
//! # Ok(())
//! # }
//! ```

mod error;
mod export;
mod options;
mod policy;
mod render;
pub mod serializers;

pub use error::{ExportError, RenderError};
pub use export::{ExportOutcome, export, export_with};
pub use options::{
    Backend, DEFAULT_BASE_URI, Direction, ExportOptions, LabelFn, NodeLabel, RenderFormat,
};
pub use policy::{PALETTE, ResolvedNode, display_label, label_colors, resolve};
pub use render::{CommandRenderer, RenderTool, Renderer};
