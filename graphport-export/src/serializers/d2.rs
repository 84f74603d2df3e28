//! D2 diagram serializer.
//!
//! Produces a D2 document: a `direction:` header, one statement per node
//! with its quoted display label (plus a `style.fill` attribute when
//! coloring is enabled), and one connection per edge labeled with the
//! relationship type.

use crate::options::ExportOptions;
use crate::policy::ResolvedNode;
use graphport_graph::{NodeId, PropertyGraph};
use std::fmt::Write;

/// Serialize a graph to D2 syntax.
pub fn serialize(
    graph: &PropertyGraph,
    nodes: &[ResolvedNode<'_>],
    options: &ExportOptions,
) -> String {
    let mut output = String::new();

    writeln!(output, "direction: {}", options.direction.d2_str()).unwrap();
    writeln!(output).unwrap();

    for resolved in nodes {
        let id = sanitize_id(&resolved.node.id);
        writeln!(output, "{}: \"{}\"", id, escape(&resolved.display)).unwrap();
        if let Some(color) = resolved.color {
            writeln!(output, "{}.style.fill: \"{}\"", id, color).unwrap();
        }
    }

    writeln!(output).unwrap();

    for edge in graph.edges() {
        writeln!(
            output,
            "{} -> {}: \"{}\"",
            sanitize_id(&edge.source),
            sanitize_id(&edge.target),
            escape(&edge.relationship)
        )
        .unwrap();
    }

    output
}

/// Build a D2-safe shape key; same scheme as the Mermaid serializer.
fn sanitize_id(id: &NodeId) -> String {
    let raw = id.to_display();
    let safe: String = raw
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    format!("n{}", safe)
}

/// Escape a string for a D2 double-quoted value.
fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Backend, Direction, NodeLabel};
    use crate::policy;
    use graphport_graph::{Edge, Node};
    use pretty_assertions::assert_eq;

    fn sample_graph() -> PropertyGraph {
        let mut graph = PropertyGraph::new();
        graph
            .add_node(
                Node::new("alice")
                    .with_label("Person")
                    .with_property("name", "Alice"),
            )
            .unwrap();
        graph
            .add_node(
                Node::new("bob")
                    .with_label("Person")
                    .with_property("name", "Bob"),
            )
            .unwrap();
        graph
            .add_edge(Edge::new("alice", "bob", "KNOWS").unwrap())
            .unwrap();
        graph
    }

    fn render(graph: &PropertyGraph, options: &ExportOptions) -> String {
        let resolved = policy::resolve(graph, options).unwrap();
        serialize(graph, &resolved, options)
    }

    #[test]
    fn test_direction_header() {
        let graph = sample_graph();
        let options = ExportOptions::new(Backend::D2);
        assert!(render(&graph, &options).starts_with("direction: down"));

        let options = options.with_direction(Direction::LR);
        assert!(render(&graph, &options).starts_with("direction: right"));
    }

    #[test]
    fn test_node_and_edge_statements() {
        let graph = sample_graph();
        let options = ExportOptions::new(Backend::D2).with_node_label(NodeLabel::LabelAndName);
        let output = render(&graph, &options);

        assert!(output.contains("nalice: \"Person: Alice\""));
        assert!(output.contains("nbob: \"Person: Bob\""));
        assert!(output.contains("nalice -> nbob: \"KNOWS\""));
    }

    #[test]
    fn test_style_fill_when_colored() {
        let graph = sample_graph();
        let options = ExportOptions::new(Backend::D2).with_color_by_label(true);
        let output = render(&graph, &options);

        assert!(output.contains("nalice.style.fill: \"#"));
    }

    #[test]
    fn test_quotes_escaped() {
        let mut graph = PropertyGraph::new();
        graph
            .add_node(Node::new(1).with_property("name", "say \"hi\""))
            .unwrap();

        let options = ExportOptions::new(Backend::D2).with_node_label(NodeLabel::Name);
        let output = render(&graph, &options);

        assert!(output.contains(r#"n1: "say \"hi\"""#));
    }

    #[test]
    fn test_output_is_deterministic() {
        let graph = sample_graph();
        let options = ExportOptions::new(Backend::D2).with_color_by_label(true);
        assert_eq!(render(&graph, &options), render(&graph, &options));
    }
}
