use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Graph file not found: {path}")]
    GraphNotFound { path: String },

    #[error("Configuration file not found at {path}")]
    ConfigNotFound { path: String },

    #[error(transparent)]
    Graph(#[from] graphport_graph::GraphError),

    #[error(transparent)]
    Export(#[from] graphport_export::ExportError),

    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    #[error("{0}")]
    InvalidFlag(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Get a suggestion for how to fix this error
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            CliError::GraphNotFound { .. } => Some(
                "Check the --input path. The file must be a graph snapshot JSON with 'nodes' and 'edges' arrays.",
            ),
            CliError::ConfigNotFound { .. } => Some(
                "Run 'graphport init' to create a configuration file, or use --config to specify a path",
            ),
            CliError::Export(graphport_export::ExportError::UnsupportedBackend(_)) => {
                Some("Use --backend with one of: graphviz, mermaid, d2, turtle, d3")
            }
            CliError::Export(graphport_export::ExportError::MissingDependency(_)) => {
                Some("Reinstall graphport with the 'rdf' feature enabled to use the turtle backend.")
            }
            _ => None,
        }
    }

    /// Format error with suggestion for CLI output
    pub fn format_for_cli(&self) -> String {
        let mut output = format!("Error: {}", self);

        if let Some(suggestion) = self.suggestion() {
            output.push_str(&format!("\n\nSuggestion: {}", suggestion));
        }

        output
    }
}
