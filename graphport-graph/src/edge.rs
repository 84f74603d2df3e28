//! Edge structures for the property graph.

use crate::error::EdgeError;
use crate::node::{NodeId, PropertyValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A directed edge between two nodes.
///
/// The graph is a multigraph: two nodes may be connected by any number of
/// edges, including several with the same relationship type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Source node ID
    pub source: NodeId,

    /// Target node ID
    pub target: NodeId,

    /// Relationship type, e.g. "KNOWS" or "WORKS_AT"
    #[serde(rename = "type")]
    pub relationship: String,

    /// Scalar key-value properties
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyValue>,
}

impl Edge {
    /// Create a new edge with validation.
    ///
    /// The relationship type must be non-empty.
    pub fn new(
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
        relationship: impl Into<String>,
    ) -> Result<Self, EdgeError> {
        let relationship = relationship.into();
        if relationship.is_empty() {
            return Err(EdgeError::EmptyRelationship);
        }

        Ok(Self {
            source: source.into(),
            target: target.into(),
            relationship,
            properties: BTreeMap::new(),
        })
    }

    /// Add a property.
    pub fn with_property(
        mut self,
        key: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_create_valid_edge() {
        let edge = Edge::new("alice", "bob", "KNOWS").unwrap();
        assert_eq!(edge.relationship, "KNOWS");
        assert_eq!(edge.source, NodeId::from("alice"));
        assert_eq!(edge.target, NodeId::from("bob"));
    }

    #[test]
    fn test_empty_relationship_rejected() {
        let result = Edge::new(1, 2, "");
        assert!(matches!(result, Err(EdgeError::EmptyRelationship)));
    }

    #[test]
    fn test_edge_properties() {
        let edge = Edge::new(1, 2, "KNOWS")
            .unwrap()
            .with_property("since", 2021);
        assert_eq!(
            edge.properties.get("since"),
            Some(&PropertyValue::Integer(2021))
        );
    }

    #[test]
    fn test_edge_serialization() {
        let edge = Edge::new("alice", "bob", "KNOWS").unwrap();
        let json = serde_json::to_string(&edge).unwrap();
        assert!(json.contains("\"type\":\"KNOWS\""));

        let deserialized: Edge = serde_json::from_str(&json).unwrap();
        assert_eq!(edge, deserialized);
    }
}
