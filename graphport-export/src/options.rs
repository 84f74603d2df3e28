//! Export options: backend selection, label strategy, rendering.

use crate::error::ExportError;
use crate::render::RenderTool;
use graphport_graph::Node;
use std::str::FromStr;
use std::sync::Arc;

/// Default base IRI for the Turtle backend.
pub const DEFAULT_BASE_URI: &str = "graphport:";

/// A target output format for graph export.
///
/// This is a closed enum: the dispatcher matches it exhaustively, so adding
/// a backend is a compile-time-checked change. Unknown backend *names* are
/// rejected at the string boundary by the `FromStr` impl.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Graphviz DOT (`.dot`), renderable with the `dot` binary
    Graphviz,
    /// Mermaid flowchart (`.mmd`), renderable with the `mmdc` binary
    Mermaid,
    /// D2 diagram (`.d2`), renderable with the `d2` binary
    D2,
    /// RDF Turtle (`.ttl`), no visual renderer
    Turtle,
    /// Self-contained D3 force-layout HTML (`.html`), renders in a browser
    D3,
}

impl Backend {
    /// Canonical backend name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Graphviz => "graphviz",
            Backend::Mermaid => "mermaid",
            Backend::D2 => "d2",
            Backend::Turtle => "turtle",
            Backend::D3 => "d3",
        }
    }

    /// Conventional file extension for the textual output.
    pub fn extension(&self) -> &'static str {
        match self {
            Backend::Graphviz => "dot",
            Backend::Mermaid => "mmd",
            Backend::D2 => "d2",
            Backend::Turtle => "ttl",
            Backend::D3 => "html",
        }
    }

    /// The external renderer tool for this backend, if one exists.
    pub fn render_tool(&self) -> Option<RenderTool> {
        match self {
            Backend::Graphviz => Some(RenderTool::Dot),
            Backend::Mermaid => Some(RenderTool::Mmdc),
            Backend::D2 => Some(RenderTool::D2),
            Backend::Turtle | Backend::D3 => None,
        }
    }
}

impl FromStr for Backend {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "graphviz" | "dot" => Ok(Backend::Graphviz),
            "mermaid" | "mmd" => Ok(Backend::Mermaid),
            "d2" => Ok(Backend::D2),
            "turtle" | "ttl" => Ok(Backend::Turtle),
            "d3" | "html" => Ok(Backend::D3),
            _ => Err(ExportError::UnsupportedBackend(s.to_string())),
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Requested image rendering for the textual export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderFormat {
    /// Textual export only
    #[default]
    None,
    /// Render an SVG next to the textual file
    Svg,
    /// Render a PNG next to the textual file
    Png,
}

impl RenderFormat {
    /// Image file extension, or `None` when no rendering is requested.
    pub fn extension(&self) -> Option<&'static str> {
        match self {
            RenderFormat::None => None,
            RenderFormat::Svg => Some("svg"),
            RenderFormat::Png => Some("png"),
        }
    }
}

impl FromStr for RenderFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(RenderFormat::None),
            "svg" => Ok(RenderFormat::Svg),
            "png" => Ok(RenderFormat::Png),
            _ => Err(ExportError::InvalidOption(format!(
                "unknown render format '{}', expected none, svg, or png",
                s
            ))),
        }
    }
}

/// Layout direction for flowchart-style backends (Mermaid, D2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Top to Bottom
    #[default]
    TB,
    /// Bottom to Top
    BT,
    /// Left to Right
    LR,
    /// Right to Left
    RL,
}

impl Direction {
    /// Convert to Mermaid direction string.
    pub fn mermaid_str(&self) -> &'static str {
        match self {
            Direction::TB => "TB",
            Direction::BT => "BT",
            Direction::LR => "LR",
            Direction::RL => "RL",
        }
    }

    /// Convert to D2 direction string.
    pub fn d2_str(&self) -> &'static str {
        match self {
            Direction::TB => "down",
            Direction::BT => "up",
            Direction::LR => "right",
            Direction::RL => "left",
        }
    }
}

/// Caller-supplied per-node label function.
///
/// The closure returns `Err` rather than panicking; the error is surfaced as
/// [`ExportError::LabelPolicy`] with the offending node id attached.
pub type LabelFn =
    Arc<dyn Fn(&Node) -> Result<String, Box<dyn std::error::Error + Send + Sync>> + Send + Sync>;

/// Strategy for computing a node's display label.
#[derive(Clone, Default)]
pub enum NodeLabel {
    /// String form of the node identifier
    #[default]
    Id,
    /// Lexicographically smallest label, or the id if the node has none
    Label,
    /// The `name` property, or the id if absent
    Name,
    /// `"{label}: {name}"` with the fallbacks above; the id alone when
    /// neither a label nor a name resolves
    LabelAndName,
    /// Caller-supplied function
    Custom(LabelFn),
}

impl std::fmt::Debug for NodeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeLabel::Id => write!(f, "Id"),
            NodeLabel::Label => write!(f, "Label"),
            NodeLabel::Name => write!(f, "Name"),
            NodeLabel::LabelAndName => write!(f, "LabelAndName"),
            NodeLabel::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

impl FromStr for NodeLabel {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "id" => Ok(NodeLabel::Id),
            "label" => Ok(NodeLabel::Label),
            "name" => Ok(NodeLabel::Name),
            "label_and_name" => Ok(NodeLabel::LabelAndName),
            _ => Err(ExportError::InvalidOption(format!(
                "unknown node_label strategy '{}', expected id, label, name, or label_and_name",
                s
            ))),
        }
    }
}

/// Options controlling a single export call.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Target backend
    pub backend: Backend,

    /// Node display-label strategy
    pub node_label: NodeLabel,

    /// Assign a deterministic per-label color to each node
    pub color_by_label: bool,

    /// Optional image rendering via the backend's external binary
    pub render: RenderFormat,

    /// Graphviz layout engine (`dot`, `neato`, `sfdp`, ...); Graphviz only
    pub engine: Option<String>,

    /// Base IRI for subject/predicate construction; Turtle only
    pub base_uri: Option<String>,

    /// Flow direction for Mermaid and D2
    pub direction: Direction,
}

impl ExportOptions {
    /// Create options for a backend with default settings.
    pub fn new(backend: Backend) -> Self {
        Self {
            backend,
            node_label: NodeLabel::default(),
            color_by_label: false,
            render: RenderFormat::None,
            engine: None,
            base_uri: None,
            direction: Direction::default(),
        }
    }

    /// Set the node label strategy.
    pub fn with_node_label(mut self, strategy: NodeLabel) -> Self {
        self.node_label = strategy;
        self
    }

    /// Enable or disable per-label coloring.
    pub fn with_color_by_label(mut self, enabled: bool) -> Self {
        self.color_by_label = enabled;
        self
    }

    /// Request image rendering.
    pub fn with_render(mut self, render: RenderFormat) -> Self {
        self.render = render;
        self
    }

    /// Set the Graphviz layout engine.
    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = Some(engine.into());
        self
    }

    /// Set the Turtle base IRI.
    pub fn with_base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.base_uri = Some(base_uri.into());
        self
    }

    /// Set the flowchart direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Validate option combinations against the chosen backend.
    pub fn validate(&self) -> Result<(), ExportError> {
        if let Some(engine) = &self.engine {
            if self.backend != Backend::Graphviz {
                return Err(ExportError::InvalidOption(format!(
                    "layout engine '{}' only applies to the graphviz backend, not {}",
                    engine, self.backend
                )));
            }
            if engine.is_empty() {
                return Err(ExportError::InvalidOption(
                    "layout engine cannot be empty".to_string(),
                ));
            }
        }

        if self.render != RenderFormat::None && self.backend.render_tool().is_none() {
            return Err(ExportError::InvalidOption(format!(
                "backend {} has no image renderer",
                self.backend
            )));
        }

        if let Some(base_uri) = &self.base_uri {
            if self.backend != Backend::Turtle {
                return Err(ExportError::InvalidOption(format!(
                    "base_uri only applies to the turtle backend, not {}",
                    self.backend
                )));
            }
            if base_uri.is_empty() {
                return Err(ExportError::InvalidOption(
                    "base_uri cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
