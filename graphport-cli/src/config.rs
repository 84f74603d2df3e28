//! Configuration loading and validation for the Graphport CLI.
//!
//! The CLI reads an optional `graphport.yaml` from the current directory (or
//! from `--config`) holding default export settings. Command-line flags
//! always win over the file; the file wins over built-in defaults.
//!
//! # Environment Variable Overrides
//!
//! - `GRAPHPORT_EXPORT_BACKEND`: Override the default backend
//! - `GRAPHPORT_OUTPUT_DIR`: Override the output directory

use graphport_export::{Backend, Direction, NodeLabel, RenderFormat};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    /// Failed to read the configuration file.
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse the YAML configuration.
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation failed.
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Root configuration structure for `graphport.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GraphportConfig {
    /// Default export settings, overridable per invocation.
    #[serde(default)]
    pub export: ExportDefaults,

    /// Output location settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Default export settings.
///
/// Values are kept as strings in the file and parsed into the exporter's
/// types on use; `validate` parses them eagerly so a typo fails at load time
/// rather than mid-command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportDefaults {
    /// Default backend: graphviz, mermaid, d2, turtle, or d3.
    #[serde(default = "default_backend")]
    pub backend: String,

    /// Node label strategy: id, label, name, or label_and_name.
    #[serde(default = "default_node_label")]
    pub node_label: String,

    /// Color nodes by their label.
    #[serde(default)]
    pub color_by_label: bool,

    /// Flow direction for mermaid/d2: TB, BT, LR, or RL.
    #[serde(default = "default_direction")]
    pub direction: String,

    /// Graphviz layout engine (graphviz backend only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,

    /// Base IRI for Turtle output (turtle backend only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_uri: Option<String>,
}

impl Default for ExportDefaults {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            node_label: default_node_label(),
            color_by_label: false,
            direction: default_direction(),
            engine: None,
            base_uri: None,
        }
    }
}

fn default_backend() -> String {
    "graphviz".to_string()
}

fn default_node_label() -> String {
    "id".to_string()
}

fn default_direction() -> String {
    "TB".to_string()
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory where export files land when `--output` is a bare filename.
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl GraphportConfig {
    /// Load `./graphport.yaml` when present, built-in defaults otherwise.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        let path = Path::new("graphport.yaml");
        if path.exists() {
            Self::load_from_path(path)
        } else {
            let mut config = Self::default();
            config.apply_env_overrides();
            Ok(config)
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let mut config: GraphportConfig = serde_yaml::from_str(&content)?;

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides.
    ///
    /// Variables follow the pattern: `GRAPHPORT_{SECTION}_{KEY}`
    fn apply_env_overrides(&mut self) {
        if let Ok(backend) = env::var("GRAPHPORT_EXPORT_BACKEND") {
            self.export.backend = backend;
        }

        if let Ok(dir) = env::var("GRAPHPORT_OUTPUT_DIR") {
            self.output.dir = PathBuf::from(dir);
        }
    }

    /// Validate the configuration by parsing every stringly-typed field.
    fn validate(&self) -> Result<(), ConfigError> {
        self.default_backend()?;
        self.default_node_label()?;
        self.default_direction()?;
        Ok(())
    }

    /// Parsed default backend.
    pub fn default_backend(&self) -> Result<Backend, ConfigError> {
        self.export
            .backend
            .parse()
            .map_err(|e| ConfigError::ValidationError(format!("export.backend: {}", e)))
    }

    /// Parsed default node label strategy.
    pub fn default_node_label(&self) -> Result<NodeLabel, ConfigError> {
        self.export
            .node_label
            .parse()
            .map_err(|e| ConfigError::ValidationError(format!("export.node_label: {}", e)))
    }

    /// Parsed default direction.
    pub fn default_direction(&self) -> Result<Direction, ConfigError> {
        parse_direction(&self.export.direction)
            .map_err(|e| ConfigError::ValidationError(format!("export.direction: {}", e)))
    }
}

/// Parse a direction string the way the config file and CLI flags spell it.
pub fn parse_direction(s: &str) -> Result<Direction, String> {
    match s.to_uppercase().as_str() {
        "TB" => Ok(Direction::TB),
        "BT" => Ok(Direction::BT),
        "LR" => Ok(Direction::LR),
        "RL" => Ok(Direction::RL),
        _ => Err(format!(
            "unknown direction '{}', expected TB, BT, LR, or RL",
            s
        )),
    }
}

/// Parse a render format flag value.
pub fn parse_render(s: &str) -> Result<RenderFormat, String> {
    s.parse().map_err(|e| format!("{}", e))
}
