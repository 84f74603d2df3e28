//! The backend dispatcher: the public entry point of the export engine.
//!
//! One export call is one graph read, one serialization pass, one atomic
//! file write, and at most one renderer subprocess. Serialization errors are
//! fatal to the call and leave any previous output file untouched; renderer
//! errors are downgraded to warnings because the textual artifact has
//! already been written by then.

use crate::error::ExportError;
use crate::options::{ExportOptions, RenderFormat};
use crate::policy;
use crate::render::{CommandRenderer, Renderer};
use crate::serializers::{d2, d3, dot, mermaid, turtle};
use graphport_graph::PropertyGraph;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Result of a successful export call.
#[derive(Debug, Clone)]
pub struct ExportOutcome {
    /// Path of the textual export, always written
    pub text_path: PathBuf,

    /// Path of the rendered image, when rendering was requested and succeeded
    pub image_path: Option<PathBuf>,

    /// Non-fatal problems, e.g. a requested renderer binary not being on PATH
    pub warnings: Vec<String>,
}

impl ExportOutcome {
    /// The most specific artifact produced: the image when one was rendered,
    /// the textual file otherwise.
    pub fn primary_path(&self) -> &Path {
        self.image_path.as_deref().unwrap_or(&self.text_path)
    }
}

/// Export a graph to `output_path` using the system renderer for any
/// requested image pass.
pub fn export(
    graph: &PropertyGraph,
    output_path: impl AsRef<Path>,
    options: &ExportOptions,
) -> Result<ExportOutcome, ExportError> {
    export_with(graph, output_path, options, &CommandRenderer)
}

/// Export a graph with an injected renderer.
///
/// Validates the option combination, resolves the label and color policies,
/// runs the chosen serializer, writes the output atomically, then optionally
/// renders. The backend match is exhaustive, so adding a backend variant is
/// a compile-time-checked change.
pub fn export_with(
    graph: &PropertyGraph,
    output_path: impl AsRef<Path>,
    options: &ExportOptions,
    renderer: &dyn Renderer,
) -> Result<ExportOutcome, ExportError> {
    options.validate()?;

    let resolved = policy::resolve(graph, options)?;

    let text = match options.backend {
        crate::Backend::Graphviz => dot::serialize(graph, &resolved, options),
        crate::Backend::Mermaid => mermaid::serialize(graph, &resolved, options),
        crate::Backend::D2 => d2::serialize(graph, &resolved, options),
        crate::Backend::Turtle => turtle::serialize(graph, &resolved, options)?,
        crate::Backend::D3 => d3::serialize(graph, &resolved, options),
    };

    let output_path = output_path.as_ref();
    write_atomic(output_path, &text)?;

    let mut outcome = ExportOutcome {
        text_path: output_path.to_path_buf(),
        image_path: None,
        warnings: Vec::new(),
    };

    if options.render != RenderFormat::None {
        // validate() has already rejected render requests for backends
        // without a tool.
        if let (Some(tool), Some(extension)) =
            (options.backend.render_tool(), options.render.extension())
        {
            let image_path = output_path.with_extension(extension);
            match renderer.render(
                tool,
                output_path,
                &image_path,
                options.render,
                options.engine.as_deref(),
            ) {
                Ok(path) => outcome.image_path = Some(path),
                Err(err) => outcome
                    .warnings
                    .push(format!("image rendering skipped: {}", err)),
            }
        }
    }

    Ok(outcome)
}

/// Write the full output, then atomically move it over the destination.
///
/// A failure mid-serialization or mid-write leaves either no file or the
/// previous file, never a truncated artifact.
fn write_atomic(path: &Path, text: &str) -> Result<(), ExportError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(text.as_bytes())?;
    tmp.persist(path).map_err(|e| ExportError::Io(e.error))?;

    Ok(())
}
