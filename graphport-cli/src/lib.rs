//! Graphport CLI library.
//!
//! The command implementations, configuration handling, and terminal output
//! helpers behind the `graphport` binary. Exposed as a library to enable
//! integration testing.

pub mod commands;
pub mod config;
pub mod errors;
pub mod output;

pub use commands::{ExportArgs, GraphSummary, InitOptions, run_export, run_info, run_init};
pub use config::{ConfigError, ExportDefaults, GraphportConfig, OutputConfig};
pub use errors::CliError;
