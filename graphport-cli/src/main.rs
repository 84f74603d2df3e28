//! Graphport CLI - Export property graphs to diagram and RDF formats.
//!
//! Graphport loads a labeled property graph from a JSON snapshot and
//! serializes it as Graphviz DOT, a Mermaid flowchart, a D2 diagram, RDF
//! Turtle, or a self-contained D3 HTML page, optionally rendering an image
//! through the backend's own CLI tool.
//!
//! # Usage
//!
//! ```bash
//! # Create a configuration file with default export settings
//! graphport init
//!
//! # Export a snapshot to DOT
//! graphport export --input graph.json
//!
//! # Colored mermaid diagram
//! graphport export -i graph.json -b mermaid --node-label label_and_name --color
//!
//! # Summarize a snapshot
//! graphport info graph.json
//! ```

use clap::{Parser, Subcommand};
use graphport_cli::{ExportArgs, InitOptions, commands, errors::CliError, output};

/// Graphport - Export property graphs to diagram and RDF formats
#[derive(Parser)]
#[command(name = "graphport")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Suppress all output except errors
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Show detailed progress
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a default graphport.yaml configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short)]
        output: Option<String>,

        /// Overwrite existing configuration file
        #[arg(long, short)]
        force: bool,
    },

    /// Export a graph snapshot to a diagram or RDF format
    Export {
        /// Graph snapshot JSON file
        #[arg(long, short)]
        input: String,

        /// Output file (default: input name with the backend's extension)
        #[arg(long, short)]
        output: Option<String>,

        /// Backend: graphviz, mermaid, d2, turtle, d3
        #[arg(long, short)]
        backend: Option<String>,

        /// Node label strategy: id, label, name, label_and_name
        #[arg(long)]
        node_label: Option<String>,

        /// Color nodes by their label
        #[arg(long)]
        color: bool,

        /// Also render an image: svg or png (requires the backend's CLI tool)
        #[arg(long, short)]
        render: Option<String>,

        /// Graphviz layout engine (dot, neato, sfdp, ...)
        #[arg(long)]
        engine: Option<String>,

        /// Base IRI for Turtle output
        #[arg(long)]
        base_uri: Option<String>,

        /// Flow direction for mermaid/d2: TB, BT, LR, RL
        #[arg(long, short)]
        direction: Option<String>,

        /// Path to the configuration file
        #[arg(long, short)]
        config: Option<String>,
    },

    /// Summarize a graph snapshot
    Info {
        /// Graph snapshot JSON file
        input: String,
    },
}

fn main() {
    let cli = Cli::parse();

    output::set_quiet(cli.quiet);
    output::set_verbosity(if cli.verbose { 1 } else { 0 });

    let result = match cli.command {
        Commands::Init { output, force } => {
            commands::run_init(InitOptions { output, force }).map_err(|e| e.to_string())
        }
        Commands::Export {
            input,
            output,
            backend,
            node_label,
            color,
            render,
            engine,
            base_uri,
            direction,
            config,
        } => {
            let args = ExportArgs {
                input,
                output,
                backend,
                node_label,
                color,
                render,
                engine,
                base_uri,
                direction,
                config,
            };
            commands::run_export(args)
                .map(|_| ())
                .map_err(|e: CliError| e.format_for_cli())
        }
        Commands::Info { input } => commands::run_info(&input)
            .map(|_| ())
            .map_err(|e| e.format_for_cli()),
    };

    if let Err(e) = result {
        output::error(&e);
        std::process::exit(1);
    }
}
