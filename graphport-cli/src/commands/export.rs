//! Implementation of the `graphport export` command.
//!
//! Loads a graph snapshot JSON, resolves export settings from flags and the
//! optional `graphport.yaml`, and drives the export engine. Flags win over
//! the config file; the config file wins over built-in defaults.
//!
//! # Usage
//!
//! ```bash
//! # DOT file next to the snapshot
//! graphport export --input graph.json
//!
//! # Colored mermaid diagram with readable labels
//! graphport export -i graph.json -b mermaid --node-label label_and_name --color
//!
//! # Graphviz with a layout engine, rendered to SVG (requires `dot` on PATH)
//! graphport export -i graph.json -b graphviz --engine neato --render svg
//! ```

use crate::config::{GraphportConfig, parse_direction, parse_render};
use crate::errors::CliError;
use crate::output;
use graphport_export::{Backend, ExportOptions, ExportOutcome, export};
use graphport_graph::PropertyGraph;
use std::path::{Path, PathBuf};

/// Options for the export command.
#[derive(Debug, Default)]
pub struct ExportArgs {
    /// Graph snapshot JSON to load
    pub input: String,

    /// Output file path; derived from the input name and backend when absent
    pub output: Option<String>,

    /// Backend name; config default when absent
    pub backend: Option<String>,

    /// Node label strategy name; config default when absent
    pub node_label: Option<String>,

    /// Color nodes by label (in addition to any config default)
    pub color: bool,

    /// Image render format: svg or png
    pub render: Option<String>,

    /// Graphviz layout engine
    pub engine: Option<String>,

    /// Turtle base IRI
    pub base_uri: Option<String>,

    /// Flow direction for mermaid/d2
    pub direction: Option<String>,

    /// Explicit configuration file path
    pub config: Option<String>,
}

/// Run the export command.
pub fn run_export(args: ExportArgs) -> Result<ExportOutcome, CliError> {
    let config = match &args.config {
        Some(path) => GraphportConfig::load_from_path(Path::new(path))?,
        None => GraphportConfig::load_or_default()?,
    };

    let input = Path::new(&args.input);
    if !input.exists() {
        return Err(CliError::GraphNotFound {
            path: args.input.clone(),
        });
    }

    output::verbose(&format!("Loading graph from {}", input.display()));
    let graph = PropertyGraph::load_from_file(input)?;
    output::verbose(&format!(
        "Loaded {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    ));

    let options = build_options(&args, &config)?;
    let output_path = resolve_output_path(&args, &config, input, options.backend);

    let outcome = export(&graph, &output_path, &options)?;

    for warning in &outcome.warnings {
        output::warning(warning);
    }
    output::success(&format!("Exported to {}", outcome.primary_path().display()));

    Ok(outcome)
}

/// Merge CLI flags over config defaults into exporter options.
fn build_options(args: &ExportArgs, config: &GraphportConfig) -> Result<ExportOptions, CliError> {
    let backend: Backend = match &args.backend {
        Some(s) => s.parse()?,
        None => config.default_backend()?,
    };

    let node_label = match &args.node_label {
        Some(s) => s.parse()?,
        None => config.default_node_label()?,
    };

    let direction = match &args.direction {
        Some(s) => parse_direction(s).map_err(CliError::InvalidFlag)?,
        None => config.default_direction()?,
    };

    let mut options = ExportOptions::new(backend)
        .with_node_label(node_label)
        .with_color_by_label(args.color || config.export.color_by_label)
        .with_direction(direction);

    if let Some(render) = &args.render {
        options = options.with_render(parse_render(render).map_err(CliError::InvalidFlag)?);
    }

    // Config-file engine and base_uri only apply to the backend they are
    // for; explicit flags are passed through so validation can reject
    // mismatched combinations loudly.
    match (&args.engine, backend) {
        (Some(engine), _) => options = options.with_engine(engine.clone()),
        (None, Backend::Graphviz) => {
            if let Some(engine) = &config.export.engine {
                options = options.with_engine(engine.clone());
            }
        }
        _ => {}
    }

    match (&args.base_uri, backend) {
        (Some(base_uri), _) => options = options.with_base_uri(base_uri.clone()),
        (None, Backend::Turtle) => {
            if let Some(base_uri) = &config.export.base_uri {
                options = options.with_base_uri(base_uri.clone());
            }
        }
        _ => {}
    }

    options.validate()?;
    Ok(options)
}

/// Pick the output file path.
///
/// An explicit `--output` is used as given. Otherwise the input file's stem
/// plus the backend's extension, placed in the configured output directory.
fn resolve_output_path(
    args: &ExportArgs,
    config: &GraphportConfig,
    input: &Path,
    backend: Backend,
) -> PathBuf {
    match &args.output {
        Some(output) => PathBuf::from(output),
        None => {
            let stem = input
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "graph".to_string());
            config
                .output
                .dir
                .join(format!("{}.{}", stem, backend.extension()))
        }
    }
}
