//! Graphviz DOT serializer.
//!
//! Produces a `digraph` document: one declaration per node with its display
//! label (and `fillcolor` when coloring is enabled), one statement per edge
//! with the relationship type as the edge label.

use crate::options::ExportOptions;
use crate::policy::ResolvedNode;
use graphport_graph::PropertyGraph;
use std::fmt::Write;

/// Serialize a graph to Graphviz DOT syntax.
pub fn serialize(
    graph: &PropertyGraph,
    nodes: &[ResolvedNode<'_>],
    _options: &ExportOptions,
) -> String {
    let mut output = String::new();

    writeln!(output, "digraph {{").unwrap();

    for resolved in nodes {
        let id = escape(&resolved.node.id.to_display());
        let label = escape(&resolved.display);

        if let Some(color) = resolved.color {
            writeln!(
                output,
                "    \"{}\" [label=\"{}\", style=filled, fillcolor=\"{}\"];",
                id, label, color
            )
            .unwrap();
        } else {
            writeln!(output, "    \"{}\" [label=\"{}\"];", id, label).unwrap();
        }
    }

    writeln!(output).unwrap();

    for edge in graph.edges() {
        writeln!(
            output,
            "    \"{}\" -> \"{}\" [label=\"{}\"];",
            escape(&edge.source.to_display()),
            escape(&edge.target.to_display()),
            escape(&edge.relationship)
        )
        .unwrap();
    }

    writeln!(output, "}}").unwrap();

    output
}

/// Escape a string for use inside a DOT double-quoted string.
///
/// Backslashes and double quotes are backslash-escaped; non-ASCII passes
/// through untouched since DOT accepts UTF-8.
fn escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Backend, NodeLabel};
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
    fn test_digraph_structure() {
        let graph = sample_graph();
        let options =
            ExportOptions::new(Backend::Graphviz).with_node_label(NodeLabel::LabelAndName);
        let output = render(&graph, &options);

        assert!(output.starts_with("digraph {"));
        assert!(output.ends_with("}\n"));
        assert!(output.contains("label=\"Person: Alice\""));
        assert!(output.contains("label=\"Person: Bob\""));
        assert!(output.contains("\"alice\" -> \"bob\" [label=\"KNOWS\"];"));
    }

    #[test]
    fn test_colors_emitted_when_enabled() {
        let graph = sample_graph();
        let options = ExportOptions::new(Backend::Graphviz).with_color_by_label(true);
        let output = render(&graph, &options);

        assert!(output.contains("style=filled"));
        assert!(output.contains("fillcolor=\"#"));
    }

    #[test]
    fn test_no_style_without_colors() {
        let graph = sample_graph();
        let options = ExportOptions::new(Backend::Graphviz);
        let output = render(&graph, &options);

        assert!(!output.contains("style=filled"));
    }

    #[test]
    fn test_quotes_and_backslashes_escaped() {
        let mut graph = PropertyGraph::new();
        graph
            .add_node(
                Node::new("tricky")
                    .with_label("Person")
                    .with_property("name", "say \"hi\" \\ bye"),
            )
            .unwrap();

        let options = ExportOptions::new(Backend::Graphviz).with_node_label(NodeLabel::Name);
        let output = render(&graph, &options);

        assert!(output.contains(r#"label="say \"hi\" \\ bye""#));
    }

    #[test]
    fn test_non_ascii_passes_through() {
        let mut graph = PropertyGraph::new();
        graph
            .add_node(Node::new("n1").with_property("name", "Zoë ↯"))
            .unwrap();

        let options = ExportOptions::new(Backend::Graphviz).with_node_label(NodeLabel::Name);
        let output = render(&graph, &options);

        assert!(output.contains("Zoë ↯"));
    }

    #[test]
    fn test_output_is_deterministic() {
        let graph = sample_graph();
        let options =
            ExportOptions::new(Backend::Graphviz).with_node_label(NodeLabel::LabelAndName);

        assert_eq!(render(&graph, &options), render(&graph, &options));
    }
}
