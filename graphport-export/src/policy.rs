//! Label resolution and deterministic color assignment.
//!
//! Both policies are pure functions of the graph and the options. Colors are
//! assigned from a fixed palette over the *sorted* set of distinct labels, so
//! the same graph re-exported always yields identical colors regardless of
//! node iteration order or process boundaries.

use crate::error::ExportError;
use crate::options::{ExportOptions, NodeLabel};
use graphport_graph::{Node, PropertyGraph};
use std::collections::{BTreeMap, BTreeSet};

/// Categorical palette, the d3 `schemeCategory10` hex values.
pub const PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// A node paired with its resolved display label and optional fill color.
#[derive(Debug, Clone)]
pub struct ResolvedNode<'a> {
    /// The underlying node
    pub node: &'a Node,
    /// Display label per the configured strategy
    pub display: String,
    /// Fill color when `color_by_label` is enabled and the node has a label
    pub color: Option<&'static str>,
}

/// Compute the display label for a single node.
pub fn display_label(node: &Node, strategy: &NodeLabel) -> Result<String, ExportError> {
    let id = node.id.to_display();
    match strategy {
        NodeLabel::Id => Ok(id),
        NodeLabel::Label => Ok(node.first_label().map(str::to_string).unwrap_or(id)),
        NodeLabel::Name => Ok(node.name().map(str::to_string).unwrap_or(id)),
        NodeLabel::LabelAndName => {
            if node.first_label().is_none() && node.name().is_none() {
                return Ok(id);
            }
            let label = node.first_label().unwrap_or(id.as_str());
            let name = node.name().unwrap_or(id.as_str());
            Ok(format!("{}: {}", label, name))
        }
        NodeLabel::Custom(f) => f(node).map_err(|e| ExportError::LabelPolicy {
            node: node.id.to_string(),
            reason: e.to_string(),
        }),
    }
}

/// Map every distinct label in the graph to a palette color.
///
/// Labels are sorted lexicographically and assigned palette entries by index,
/// wrapping around when there are more labels than palette entries.
pub fn label_colors(graph: &PropertyGraph) -> BTreeMap<String, &'static str> {
    let distinct: BTreeSet<&str> = graph
        .nodes()
        .flat_map(|n| n.labels.iter().map(|l| l.as_str()))
        .collect();

    distinct
        .into_iter()
        .enumerate()
        .map(|(i, label)| (label.to_string(), PALETTE[i % PALETTE.len()]))
        .collect()
}

/// Resolve labels and colors for every node, sorted by node id.
pub fn resolve<'a>(
    graph: &'a PropertyGraph,
    options: &ExportOptions,
) -> Result<Vec<ResolvedNode<'a>>, ExportError> {
    let colors = options.color_by_label.then(|| label_colors(graph));

    graph
        .nodes_sorted()
        .into_iter()
        .map(|node| {
            let display = display_label(node, &options.node_label)?;
            // Multi-label nodes are colored by their first label, matching
            // the label strategy's pick.
            let color = colors.as_ref().and_then(|map| {
                node.first_label()
                    .and_then(|label| map.get(label).copied())
            });
            Ok(ResolvedNode {
                node,
                display,
                color,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Backend;
    use graphport_graph::Edge;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn person(id: &str, name: &str) -> Node {
        Node::new(id).with_label("Person").with_property("name", name)
    }

    #[test]
    fn test_label_strategy_id() {
        let node = person("alice", "Alice");
        assert_eq!(display_label(&node, &NodeLabel::Id).unwrap(), "alice");
    }

    #[test]
    fn test_label_strategy_label_with_fallback() {
        let node = person("alice", "Alice");
        assert_eq!(display_label(&node, &NodeLabel::Label).unwrap(), "Person");

        let unlabeled = Node::new(7);
        assert_eq!(display_label(&unlabeled, &NodeLabel::Label).unwrap(), "7");
    }

    #[test]
    fn test_label_strategy_name_with_fallback() {
        let node = person("alice", "Alice");
        assert_eq!(display_label(&node, &NodeLabel::Name).unwrap(), "Alice");

        let unnamed = Node::new("bob").with_label("Person");
        assert_eq!(display_label(&unnamed, &NodeLabel::Name).unwrap(), "bob");
    }

    #[test]
    fn test_label_strategy_label_and_name() {
        let node = person("alice", "Alice");
        assert_eq!(
            display_label(&node, &NodeLabel::LabelAndName).unwrap(),
            "Person: Alice"
        );

        // Missing parts fall back to the id individually
        let unnamed = Node::new("bob").with_label("Person");
        assert_eq!(
            display_label(&unnamed, &NodeLabel::LabelAndName).unwrap(),
            "Person: bob"
        );

        // Nothing resolves: the id alone, no separator
        let bare = Node::new("ghost");
        assert_eq!(
            display_label(&bare, &NodeLabel::LabelAndName).unwrap(),
            "ghost"
        );
    }

    #[test]
    fn test_label_strategy_multi_label_uses_lexicographic_first() {
        let node = Node::new(1)
            .with_label("Person")
            .with_label("Employee")
            .with_property("name", "Alice");
        assert_eq!(
            display_label(&node, &NodeLabel::LabelAndName).unwrap(),
            "Employee: Alice"
        );
    }

    #[test]
    fn test_custom_label_function() {
        let node = person("alice", "Alice");
        let strategy = NodeLabel::Custom(Arc::new(|n: &Node| {
            Ok(format!("<<{}>>", n.name().unwrap_or("?")))
        }));
        assert_eq!(display_label(&node, &strategy).unwrap(), "<<Alice>>");
    }

    #[test]
    fn test_custom_label_failure_becomes_label_policy_error() {
        let node = person("alice", "Alice");
        let strategy = NodeLabel::Custom(Arc::new(|_n: &Node| Err("boom".into())));
        let result = display_label(&node, &strategy);
        assert!(matches!(
            result,
            Err(ExportError::LabelPolicy { ref node, .. }) if node == "alice"
        ));
    }

    #[test]
    fn test_label_colors_deterministic_and_order_independent() {
        let mut forward = PropertyGraph::new();
        forward.add_node(person("alice", "Alice")).unwrap();
        forward
            .add_node(Node::new("acme").with_label("Company"))
            .unwrap();

        let mut reversed = PropertyGraph::new();
        reversed
            .add_node(Node::new("acme").with_label("Company"))
            .unwrap();
        reversed.add_node(person("alice", "Alice")).unwrap();

        assert_eq!(label_colors(&forward), label_colors(&reversed));
        // Sorted assignment: Company before Person
        let colors = label_colors(&forward);
        assert_eq!(colors.get("Company"), Some(&PALETTE[0]));
        assert_eq!(colors.get("Person"), Some(&PALETTE[1]));
    }

    #[test]
    fn test_palette_wraparound() {
        let mut graph = PropertyGraph::new();
        for i in 0..12 {
            graph
                .add_node(Node::new(i).with_label(format!("Label{:02}", i)))
                .unwrap();
        }

        let colors = label_colors(&graph);
        assert_eq!(colors.len(), 12);
        assert_eq!(colors.get("Label00"), Some(&PALETTE[0]));
        assert_eq!(colors.get("Label10"), Some(&PALETTE[0]));
        assert_eq!(colors.get("Label11"), Some(&PALETTE[1]));
    }

    #[test]
    fn test_resolve_sorts_by_id_and_shares_colors() {
        let mut graph = PropertyGraph::new();
        graph.add_node(person("bob", "Bob")).unwrap();
        graph.add_node(person("alice", "Alice")).unwrap();
        graph
            .add_node(Node::new("acme").with_label("Company"))
            .unwrap();
        graph
            .add_edge(Edge::new("alice", "bob", "KNOWS").unwrap())
            .unwrap();

        let options = ExportOptions::new(Backend::Graphviz)
            .with_node_label(NodeLabel::Name)
            .with_color_by_label(true);
        let resolved = resolve(&graph, &options).unwrap();

        let ids: Vec<String> = resolved.iter().map(|r| r.node.id.to_string()).collect();
        assert_eq!(ids, vec!["acme", "alice", "bob"]);

        // alice and bob share Person's color, acme gets Company's
        assert_eq!(resolved[1].color, resolved[2].color);
        assert_ne!(resolved[0].color, resolved[1].color);
    }

    #[test]
    fn test_resolve_without_colors() {
        let mut graph = PropertyGraph::new();
        graph.add_node(person("alice", "Alice")).unwrap();

        let options = ExportOptions::new(Backend::Graphviz);
        let resolved = resolve(&graph, &options).unwrap();
        assert_eq!(resolved[0].color, None);
    }

    #[test]
    fn test_unlabeled_node_gets_no_color() {
        let mut graph = PropertyGraph::new();
        graph.add_node(person("alice", "Alice")).unwrap();
        graph.add_node(Node::new("thing")).unwrap();

        let options = ExportOptions::new(Backend::Graphviz).with_color_by_label(true);
        let resolved = resolve(&graph, &options).unwrap();

        let thing = resolved.iter().find(|r| r.node.id.to_string() == "thing");
        assert_eq!(thing.unwrap().color, None);
    }
}
