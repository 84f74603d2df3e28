//! External renderer invocation.
//!
//! Turning a textual description into an image is delegated to the
//! backend's own CLI tool (`dot`, `mmdc`, `d2`). The [`Renderer`] trait is
//! the seam: the dispatcher talks to it, production code uses
//! [`CommandRenderer`], and tests substitute fakes so no external binary is
//! ever required.
//!
//! Invocation is a single deterministic attempt: no retries, no internal
//! timeout. A hung renderer hangs the calling thread for as long as the
//! subprocess lives.

use crate::error::RenderError;
use crate::options::RenderFormat;
use std::path::{Path, PathBuf};
use std::process::Command;

/// The external CLI tool for a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTool {
    /// Graphviz `dot`
    Dot,
    /// Mermaid CLI `mmdc`
    Mmdc,
    /// D2 CLI `d2`
    D2,
}

impl RenderTool {
    /// Name of the executable looked up on PATH.
    pub fn binary(&self) -> &'static str {
        match self {
            RenderTool::Dot => "dot",
            RenderTool::Mmdc => "mmdc",
            RenderTool::D2 => "d2",
        }
    }
}

/// A description-to-image renderer.
///
/// Implementations take the textual description at `input`, produce an image
/// at `output`, and return the image path. Failures are typed: a missing
/// binary is [`RenderError::NotFound`], a non-zero exit is
/// [`RenderError::Failed`] with the captured diagnostics.
pub trait Renderer {
    fn render(
        &self,
        tool: RenderTool,
        input: &Path,
        output: &Path,
        format: RenderFormat,
        engine: Option<&str>,
    ) -> Result<PathBuf, RenderError>;
}

/// Production renderer that shells out to the backend's CLI tool.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandRenderer;

impl Renderer for CommandRenderer {
    fn render(
        &self,
        tool: RenderTool,
        input: &Path,
        output: &Path,
        format: RenderFormat,
        engine: Option<&str>,
    ) -> Result<PathBuf, RenderError> {
        let image_format = format.extension().unwrap_or("svg");

        let mut command = Command::new(tool.binary());
        match tool {
            RenderTool::Dot => {
                command.arg(format!("-T{}", image_format));
                if let Some(engine) = engine {
                    command.arg(format!("-K{}", engine));
                }
                command.arg("-o").arg(output).arg(input);
            }
            RenderTool::Mmdc => {
                command.arg("-i").arg(input).arg("-o").arg(output);
            }
            RenderTool::D2 => {
                command.arg(input).arg(output);
            }
        }

        let result = command.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RenderError::NotFound {
                    binary: tool.binary(),
                }
            } else {
                RenderError::Io(e)
            }
        })?;

        if !result.status.success() {
            return Err(RenderError::Failed {
                binary: tool.binary(),
                status: result.status.to_string(),
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }

        Ok(output.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_binaries() {
        assert_eq!(RenderTool::Dot.binary(), "dot");
        assert_eq!(RenderTool::Mmdc.binary(), "mmdc");
        assert_eq!(RenderTool::D2.binary(), "d2");
    }

    #[test]
    fn test_missing_binary_maps_to_not_found() {
        // CommandRenderer classifies a spawn failure by io::ErrorKind;
        // verify the kind a nonexistent binary actually produces.
        let err = Command::new("graphport-no-such-renderer-binary")
            .output()
            .unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
