//! RDF Turtle serializer.
//!
//! Requires the optional `rdf` cargo feature (the oxrdf toolkit). Built
//! without it, this backend reports a missing dependency at call time and
//! every other backend keeps working.
//!
//! Mapping: each node becomes a subject IRI `base_uri + id`; each of its
//! labels an `rdf:type` triple; each property a literal triple with the key
//! as a local name under `base_uri`; each edge a triple whose predicate is
//! `base_uri + relationship_type`. Local names are percent-encoded and every
//! constructed IRI is validated, so characters illegal in IRIs can never
//! leak into the document.

use crate::error::ExportError;
use crate::options::ExportOptions;
use crate::policy::ResolvedNode;
use graphport_graph::PropertyGraph;

#[cfg(feature = "rdf")]
pub use enabled::serialize;

#[cfg(not(feature = "rdf"))]
pub fn serialize(
    _graph: &PropertyGraph,
    _nodes: &[ResolvedNode<'_>],
    _options: &ExportOptions,
) -> Result<String, ExportError> {
    Err(ExportError::MissingDependency(
        "the turtle backend requires the optional RDF toolkit; \
         rebuild graphport-export with the `rdf` feature enabled"
            .to_string(),
    ))
}

#[cfg(feature = "rdf")]
mod enabled {
    use super::*;
    use crate::options::DEFAULT_BASE_URI;
    use graphport_graph::{NodeId, PropertyValue};
    use oxrdf::{Literal, NamedNode};
    use std::fmt::Write;

    /// Serialize a graph to Turtle.
    pub fn serialize(
        graph: &PropertyGraph,
        nodes: &[ResolvedNode<'_>],
        options: &ExportOptions,
    ) -> Result<String, ExportError> {
        let base = options.base_uri.as_deref().unwrap_or(DEFAULT_BASE_URI);
        let rdf_type = oxrdf::vocab::rdf::TYPE;

        let mut output = String::new();

        for resolved in nodes {
            let node = resolved.node;
            let subject = node_iri(base, &node.id)?;

            for label in &node.labels {
                writeln!(output, "{} {} {} .", subject, rdf_type, iri(base, label)?).unwrap();
            }

            for (key, value) in &node.properties {
                // RDF has no null; absent is the faithful translation.
                if let Some(object) = literal(value) {
                    writeln!(output, "{} {} {} .", subject, iri(base, key)?, object).unwrap();
                }
            }
        }

        for edge in graph.edges() {
            writeln!(
                output,
                "{} {} {} .",
                node_iri(base, &edge.source)?,
                iri(base, &edge.relationship)?,
                node_iri(base, &edge.target)?
            )
            .unwrap();
        }

        Ok(output)
    }

    fn node_iri(base: &str, id: &NodeId) -> Result<NamedNode, ExportError> {
        iri(base, &id.to_display())
    }

    /// Build and validate `base + percent-encoded local name`.
    fn iri(base: &str, local: &str) -> Result<NamedNode, ExportError> {
        let full = format!("{}{}", base, encode_iri_component(local));
        NamedNode::new(&full).map_err(|e| {
            ExportError::InvalidOption(format!("cannot build IRI <{}>: {}", full, e))
        })
    }

    /// Percent-encode everything outside the RFC 3986 unreserved set.
    fn encode_iri_component(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        for byte in s.bytes() {
            match byte {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                    out.push(byte as char)
                }
                _ => write!(out, "%{:02X}", byte).unwrap(),
            }
        }
        out
    }

    /// Turtle literal for a scalar property value, `None` for null.
    ///
    /// Numbers and booleans use Turtle's bare token forms; strings go
    /// through oxrdf's quoting and escaping.
    fn literal(value: &PropertyValue) -> Option<String> {
        match value {
            PropertyValue::String(s) => Some(Literal::new_simple_literal(s.as_str()).to_string()),
            PropertyValue::Integer(n) => Some(n.to_string()),
            PropertyValue::Float(f) if f.is_finite() => Some(format!("{:?}", f)),
            // NaN and infinities have no bare token form
            PropertyValue::Float(f) => Some(Literal::from(*f).to_string()),
            PropertyValue::Boolean(b) => Some(b.to_string()),
            PropertyValue::Null => None,
        }
    }
}


#[cfg(all(test, not(feature = "rdf")))]
mod tests_without_rdf {
    use super::*;
    use crate::options::Backend;

    #[test]
    fn test_missing_dependency_error() {
        let graph = PropertyGraph::new();
        let options = ExportOptions::new(Backend::Turtle);
        let result = serialize(&graph, &[], &options);
        assert!(matches!(result, Err(ExportError::MissingDependency(_))));
    }
}
