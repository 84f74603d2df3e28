//! Node identifiers, property values, and node structures.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Unique identifier for a node.
///
/// Graph producers may key nodes by an integer row id or by an arbitrary
/// string. The `Ord` impl sorts all integer ids before all string ids, each
/// group in its natural order, so exports that sort by id are reproducible
/// regardless of how the graph was assembled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeId {
    /// Integer identifier (e.g., a database row id)
    Int(i64),
    /// String identifier
    Str(String),
}

impl NodeId {
    /// String form of the identifier, as used for display labels and IRIs.
    pub fn to_display(&self) -> String {
        match self {
            NodeId::Int(n) => n.to_string(),
            NodeId::Str(s) => s.clone(),
        }
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeId::Int(n) => write!(f, "{}", n),
            NodeId::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for NodeId {
    fn from(n: i64) -> Self {
        NodeId::Int(n)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId::Str(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        NodeId::Str(s)
    }
}

/// Scalar property values carried by nodes and edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Null,
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::String(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::String(s)
    }
}

impl From<i64> for PropertyValue {
    fn from(n: i64) -> Self {
        PropertyValue::Integer(n)
    }
}

impl From<i32> for PropertyValue {
    fn from(n: i32) -> Self {
        PropertyValue::Integer(n as i64)
    }
}

impl From<f64> for PropertyValue {
    fn from(n: f64) -> Self {
        PropertyValue::Float(n)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Boolean(b)
    }
}

/// A node in the property graph.
///
/// Labels are kept in a `BTreeSet` so the "first label" (lexicographically
/// smallest) is well defined, and properties in a `BTreeMap` so iteration
/// order never depends on insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier
    pub id: NodeId,

    /// Label set, unordered in the model, sorted in storage
    #[serde(default)]
    pub labels: BTreeSet<String>,

    /// Scalar key-value properties
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyValue>,
}

impl Node {
    /// Create a node with no labels or properties.
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            labels: BTreeSet::new(),
            properties: BTreeMap::new(),
        }
    }

    /// Add a label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.labels.insert(label.into());
        self
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

    /// The lexicographically smallest label, if any.
    pub fn first_label(&self) -> Option<&str> {
        self.labels.iter().next().map(|s| s.as_str())
    }

    /// The `name` property, if it is a string.
    pub fn name(&self) -> Option<&str> {
        match self.properties.get("name") {
            Some(PropertyValue::String(s)) => Some(s.as_str()),
            _ => None,
        }
    }
}
