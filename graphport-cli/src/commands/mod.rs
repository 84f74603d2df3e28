//! CLI commands for Graphport.
//!
//! - `graphport init` - Create a default `graphport.yaml` configuration file
//! - `graphport export` - Export a graph snapshot to a diagram or RDF format
//! - `graphport info` - Summarize a graph snapshot

pub mod export;
pub mod info;
pub mod init;

pub use export::{ExportArgs, run_export};
pub use info::{GraphSummary, run_info};
pub use init::{InitError, InitOptions, run_init};
