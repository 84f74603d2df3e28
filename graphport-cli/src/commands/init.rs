//! Implementation of the `graphport init` command.
//!
//! Generates a default `graphport.yaml` configuration file with comments
//! explaining each setting.
//!
//! # Usage
//!
//! ```bash
//! # Create graphport.yaml in current directory
//! graphport init
//!
//! # Specify output path
//! graphport init --output config/graphport.yaml
//!
//! # Overwrite existing file
//! graphport init --force
//! ```

use std::io::Write;
use std::path::Path;
use thiserror::Error;

use crate::output;

/// Errors that can occur during initialization.
#[derive(Debug, Error)]
pub enum InitError {
    /// Configuration file already exists and --force was not specified.
    #[error("Configuration file already exists: {path}. Use --force to overwrite.")]
    FileExists { path: String },

    /// Failed to write the configuration file.
    #[error("Failed to write configuration file: {0}")]
    WriteError(#[from] std::io::Error),
}

/// Default configuration template.
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# graphport.yaml - Graphport configuration file
# Command-line flags always override these defaults.

export:
  # Backend used when --backend is not given:
  # graphviz, mermaid, d2, turtle, or d3
  backend: "graphviz"

  # How node display labels are computed:
  #   id             - the node identifier
  #   label          - the node's label, falling back to the id
  #   name           - the 'name' property, falling back to the id
  #   label_and_name - "Label: name"
  node_label: "id"

  # Give every label a fixed color across all exports
  color_by_label: false

  # Flow direction for mermaid and d2 diagrams: TB, BT, LR, or RL
  direction: "TB"

  # Graphviz layout engine (graphviz backend only)
  # engine: "neato"

  # Base IRI for Turtle output (turtle backend only)
  # base_uri: "http://example.org/"

output:
  # Directory for derived output filenames
  dir: "."
"#;

/// Options for the init command.
#[derive(Debug, Default)]
pub struct InitOptions {
    /// Output path for the configuration file
    pub output: Option<String>,

    /// Overwrite an existing file
    pub force: bool,
}

/// Run the init command.
pub fn run_init(options: InitOptions) -> Result<(), InitError> {
    let path = options.output.as_deref().unwrap_or("graphport.yaml");

    if Path::new(path).exists() && !options.force {
        return Err(InitError::FileExists {
            path: path.to_string(),
        });
    }

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut file = std::fs::File::create(path)?;
    file.write_all(DEFAULT_CONFIG_TEMPLATE.as_bytes())?;

    output::success(&format!("Created {}", path));
    output::info("Edit it to change the default export settings.");

    Ok(())
}
