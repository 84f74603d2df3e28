//! Mermaid flowchart serializer.
//!
//! Produces a `flowchart` block. Original node ids may contain characters
//! that are illegal in Mermaid node names, so every id is sanitized and
//! prefixed with `n`; the display label is carried in the quoted bracket
//! text instead.

use crate::options::ExportOptions;
use crate::policy::ResolvedNode;
use graphport_graph::{NodeId, PropertyGraph};
use std::fmt::Write;

/// Serialize a graph to Mermaid flowchart syntax.
pub fn serialize(
    graph: &PropertyGraph,
    nodes: &[ResolvedNode<'_>],
    options: &ExportOptions,
) -> String {
    let mut output = String::new();

    writeln!(output, "flowchart {}", options.direction.mermaid_str()).unwrap();

    for resolved in nodes {
        let id = sanitize_id(&resolved.node.id);
        writeln!(output, "    {}[\"{}\"]", id, escape_label(&resolved.display)).unwrap();
    }

    for resolved in nodes {
        if let Some(color) = resolved.color {
            writeln!(output, "    style {} fill:{}", sanitize_id(&resolved.node.id), color)
                .unwrap();
        }
    }

    writeln!(output).unwrap();

    for edge in graph.edges() {
        writeln!(
            output,
            "    {} -->|{}| {}",
            sanitize_id(&edge.source),
            escape_edge_label(&edge.relationship),
            sanitize_id(&edge.target)
        )
        .unwrap();
    }

    output
}

/// Build a Mermaid-safe node identifier.
///
/// Keeps ASCII alphanumerics and underscores, replaces everything else, and
/// prefixes `n` so the result never starts with a digit or collides with a
/// Mermaid keyword.
fn sanitize_id(id: &NodeId) -> String {
    let raw = id.to_display();
    let safe: String = raw
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    format!("n{}", safe)
}

/// Escape a label for use inside quoted Mermaid bracket text.
fn escape_label(label: &str) -> String {
    label
        .replace('"', "'")
        .replace('[', "(")
        .replace(']', ")")
        .replace('{', "(")
        .replace('}', ")")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape an edge label for the `|...|` segment, which cannot contain pipes.
fn escape_edge_label(label: &str) -> String {
    escape_label(label).replace('|', "/")
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
    fn test_flowchart_header_and_direction() {
        let graph = sample_graph();
        let options = ExportOptions::new(Backend::Mermaid);
        assert!(render(&graph, &options).starts_with("flowchart TB"));

        let options = options.with_direction(Direction::LR);
        assert!(render(&graph, &options).starts_with("flowchart LR"));
    }

    #[test]
    fn test_node_declarations_and_edges() {
        let graph = sample_graph();
        let options =
            ExportOptions::new(Backend::Mermaid).with_node_label(NodeLabel::LabelAndName);
        let output = render(&graph, &options);

        assert!(output.contains("nalice[\"Person: Alice\"]"));
        assert!(output.contains("nbob[\"Person: Bob\"]"));
        assert!(output.contains("nalice -->|KNOWS| nbob"));
    }

    #[test]
    fn test_unsafe_ids_sanitized() {
        let mut graph = PropertyGraph::new();
        graph.add_node(Node::new("user:1/a-b")).unwrap();
        graph.add_node(Node::new(42)).unwrap();
        graph
            .add_edge(Edge::new("user:1/a-b", 42, "OWNS").unwrap())
            .unwrap();

        let options = ExportOptions::new(Backend::Mermaid);
        let output = render(&graph, &options);

        assert!(output.contains("nuser_1_a_b"));
        assert!(output.contains("n42"));
        assert!(output.contains("nuser_1_a_b -->|OWNS| n42"));
    }

    #[test]
    fn test_label_special_characters_escaped() {
        let mut graph = PropertyGraph::new();
        graph
            .add_node(Node::new(1).with_property("name", "a[b]{c}<d>\"e\""))
            .unwrap();

        let options = ExportOptions::new(Backend::Mermaid).with_node_label(NodeLabel::Name);
        let output = render(&graph, &options);

        assert!(output.contains("n1[\"a(b)(c)&lt;d&gt;'e'\"]"));
    }

    #[test]
    fn test_pipes_in_relationship_escaped() {
        let mut graph = PropertyGraph::new();
        graph.add_node(Node::new("a")).unwrap();
        graph.add_node(Node::new("b")).unwrap();
        graph
            .add_edge(Edge::new("a", "b", "READS|WRITES").unwrap())
            .unwrap();

        let options = ExportOptions::new(Backend::Mermaid);
        let output = render(&graph, &options);

        assert!(output.contains("-->|READS/WRITES|"));
    }

    #[test]
    fn test_style_lines_when_colored() {
        let graph = sample_graph();
        let options = ExportOptions::new(Backend::Mermaid).with_color_by_label(true);
        let output = render(&graph, &options);

        assert!(output.contains("style nalice fill:#"));
        assert!(output.contains("style nbob fill:#"));
    }

    #[test]
    fn test_output_is_deterministic() {
        let graph = sample_graph();
        let options = ExportOptions::new(Backend::Mermaid).with_color_by_label(true);
        assert_eq!(render(&graph, &options), render(&graph, &options));
    }
}
