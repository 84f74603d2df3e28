//! Error types for the export engine.

use thiserror::Error;

/// Errors that can occur during an export call.
///
/// Renderer failures are deliberately absent: the dispatcher downgrades them
/// to warnings on the [`ExportOutcome`](crate::ExportOutcome) because the
/// textual export has already succeeded by the time a renderer runs.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Unsupported backend: {0}. Valid backends: graphviz, mermaid, d2, turtle, d3")]
    UnsupportedBackend(String),

    #[error("Invalid option: {0}")]
    InvalidOption(String),

    #[error("Label function failed for node {node}: {reason}")]
    LabelPolicy { node: String, reason: String },

    #[error("Missing dependency: {0}")]
    MissingDependency(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from external renderer invocation.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Renderer '{binary}' not found on PATH")]
    NotFound { binary: &'static str },

    #[error("Renderer '{binary}' failed ({status}): {stderr}")]
    Failed {
        binary: &'static str,
        status: String,
        stderr: String,
    },

    #[error("IO error invoking renderer: {0}")]
    Io(#[from] std::io::Error),
}
