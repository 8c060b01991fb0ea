#![forbid(unsafe_code)]

//! Output generators for flowgram graphs.
//!
//! Two independent serializers consume an immutable [`flowgram_core::Graph`]:
//! - [`dot::generate_dot`] — Graphviz DOT source for an external layout
//!   renderer
//! - [`drawio::generate_drawio`] — draw.io interchange XML for an external
//!   diagram editor
//!
//! Both route their visual decisions through [`style::resolve_style`], and
//! both are deterministic: identical inputs produce byte-identical output.

pub mod dot;
pub mod drawio;
pub mod style;

pub use dot::{DotOptions, generate_dot};
pub use drawio::{DrawioOptions, generate_drawio};
pub use style::{StyleDescriptor, resolve_style};

/// Rendering profile that biases layout algorithm and style choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisualizationMode {
    #[default]
    Flow,
    Sequence,
    Mindmap,
    Network,
}

impl VisualizationMode {
    pub fn as_str(self) -> &'static str {
        match self {
            VisualizationMode::Flow => "flow",
            VisualizationMode::Sequence => "sequence",
            VisualizationMode::Mindmap => "mindmap",
            VisualizationMode::Network => "network",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "flow" => Some(VisualizationMode::Flow),
            "sequence" => Some(VisualizationMode::Sequence),
            "mindmap" => Some(VisualizationMode::Mindmap),
            "network" => Some(VisualizationMode::Network),
            _ => None,
        }
    }
}

/// Human-facing layout preference, mapped to a Graphviz engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutChoice {
    #[default]
    Hierarchy,
    Organic,
    Circular,
    Radial,
    Freeform,
}

impl LayoutChoice {
    pub fn engine(self) -> &'static str {
        match self {
            LayoutChoice::Hierarchy => "dot",
            LayoutChoice::Organic => "neato",
            LayoutChoice::Circular => "circo",
            LayoutChoice::Radial => "twopi",
            LayoutChoice::Freeform => "fdp",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            LayoutChoice::Hierarchy => "Hierarchy (Waterfall)",
            LayoutChoice::Organic => "Organic (Force)",
            LayoutChoice::Circular => "Circular (Ring)",
            LayoutChoice::Radial => "Radial (Star)",
            LayoutChoice::Freeform => "Freeform",
        }
    }

    /// Accepts either the short keyword or the display name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "hierarchy" | "Hierarchy (Waterfall)" => Some(LayoutChoice::Hierarchy),
            "organic" | "Organic (Force)" => Some(LayoutChoice::Organic),
            "circular" | "Circular (Ring)" => Some(LayoutChoice::Circular),
            "radial" | "Radial (Star)" => Some(LayoutChoice::Radial),
            "freeform" | "Freeform" => Some(LayoutChoice::Freeform),
            _ => None,
        }
    }
}

/// Edge routing preference, passed through as the DOT `splines` value unless
/// the engine or mode overrides it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeRouting {
    #[default]
    Ortho,
    Polyline,
    Curved,
    Line,
}

impl EdgeRouting {
    pub fn as_str(self) -> &'static str {
        match self {
            EdgeRouting::Ortho => "ortho",
            EdgeRouting::Polyline => "polyline",
            EdgeRouting::Curved => "curved",
            EdgeRouting::Line => "line",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ortho" => Some(EdgeRouting::Ortho),
            "polyline" => Some(EdgeRouting::Polyline),
            "curved" => Some(EdgeRouting::Curved),
            "line" => Some(EdgeRouting::Line),
            _ => None,
        }
    }
}
