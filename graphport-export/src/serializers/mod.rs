//! Per-backend serializers.
//!
//! Each serializer is a pure transformation from (graph, resolved labels,
//! options) to the backend's textual grammar. Serializers escape all
//! user-controlled strings for their target syntax and never fail on legal
//! property values; only the Turtle serializer returns a `Result`, because
//! IRI construction can reject a malformed `base_uri` and the backend itself
//! is optional.

pub mod d2;
pub mod d3;
pub mod dot;
pub mod mermaid;
pub mod turtle;
