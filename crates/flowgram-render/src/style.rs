//! Maps a node label + theme + visualization mode to concrete visual
//! attributes.
//!
//! The descriptor is a structured value, not a pre-serialized attribute
//! string: the DOT and draw.io generators each turn it into their own target
//! syntax.

use crate::VisualizationMode;
use flowgram_core::label::{Category, classify};
use flowgram_core::theme::Theme;

/// Resolved visual attributes for one node. All fields are opaque strings
/// interpreted by the generators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDescriptor {
    pub shape: String,
    pub fill: String,
    pub border: String,
    pub text: String,
    /// Comma-joined DOT style flags ("rounded,filled", "dashed", ...).
    pub flags: String,
}

/// Total and side-effect free: any label/theme/mode combination resolves,
/// falling back to the theme's default block for unmatched categories.
pub fn resolve_style(label: &str, theme: &Theme, mode: VisualizationMode) -> StyleDescriptor {
    let category = classify(label);
    let block = theme.block_for(category);
    let base_flags = block.style.unwrap_or("filled");

    let (shape, flags) = match mode {
        // Organic shapes for mind maps; categorized nodes keep their shape.
        VisualizationMode::Mindmap => {
            let shape = if category == Category::Default {
                "ellipse"
            } else {
                block.shape
            };
            (shape, format!("{base_flags},rounded"))
        }
        VisualizationMode::Sequence => ("box", format!("{base_flags},rounded")),
        VisualizationMode::Network => (block.shape, format!("{base_flags},rounded")),
        VisualizationMode::Flow => (block.shape, base_flags.to_string()),
    };

    StyleDescriptor {
        shape: shape.to_string(),
        fill: block.fill.to_string(),
        border: block.border.to_string(),
        text: block.text.to_string(),
        flags,
    }
}

/// Per-category draw.io cell styles. These are fixed strings in the draw.io
/// style grammar and intentionally independent of the theme, which only
/// drives the DOT target.
pub fn drawio_style(category: Category) -> &'static str {
    match category {
        Category::Database => {
            "shape=cylinder3;whiteSpace=wrap;html=1;boundedLbl=1;backgroundOutline=1;size=15;fillColor=#fff2cc;strokeColor=#d6b656;"
        }
        Category::Api => {
            "shape=component;align=left;spacingLeft=36;fillColor=#d5e8d4;strokeColor=#82b366;"
        }
        Category::Error => {
            "rounded=1;whiteSpace=wrap;html=1;fillColor=#f8cecc;strokeColor=#b85450;dashed=1;"
        }
        Category::Actor => "shape=ellipse;fillColor=#dae8fc;strokeColor=#6c8ebf;",
        Category::Ui => "rounded=1;whiteSpace=wrap;html=1;fillColor=#e1d5e7;strokeColor=#9673a6;",
        Category::Default => {
            "rounded=1;whiteSpace=wrap;html=1;absoluteArcSize=1;arcSize=14;strokeWidth=2;fillColor=#f5f5f5;strokeColor=#666666;fontColor=#333333;"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme() -> &'static Theme {
        Theme::builtin("Professional (Blue)").unwrap()
    }

    #[test]
    fn flow_mode_keeps_the_theme_shape_and_flags() {
        let s = resolve_style("Oracle DB", theme(), VisualizationMode::Flow);
        assert_eq!(s.shape, "cylinder");
        assert_eq!(s.flags, "rounded,filled");
        assert_eq!(s.fill, "#fff3cd");
    }

    #[test]
    fn mindmap_mode_rounds_default_nodes_into_ellipses() {
        let s = resolve_style("Mapping Drawer", theme(), VisualizationMode::Mindmap);
        assert_eq!(s.shape, "ellipse");
        assert!(s.flags.ends_with(",rounded"));

        // Categorized nodes keep their shape in mindmap mode.
        let db = resolve_style("Oracle DB", theme(), VisualizationMode::Mindmap);
        assert_eq!(db.shape, "cylinder");
    }

    #[test]
    fn sequence_mode_forces_boxes() {
        let s = resolve_style("User", theme(), VisualizationMode::Sequence);
        assert_eq!(s.shape, "box");
        assert!(s.flags.ends_with(",rounded"));
    }

    #[test]
    fn network_mode_keeps_shape_but_rounds_flags() {
        let s = resolve_style("User", theme(), VisualizationMode::Network);
        assert_eq!(s.shape, "ellipse");
        assert!(s.flags.ends_with(",rounded"));
    }

    #[test]
    fn unmatched_labels_use_the_default_block() {
        let s = resolve_style("Mapping Drawer", theme(), VisualizationMode::Flow);
        assert_eq!(s.shape, "box");
        assert_eq!(s.fill, "#e6f3ff");
    }

    #[test]
    fn resolve_style_is_pure() {
        let a = resolve_style("User", theme(), VisualizationMode::Flow);
        let b = resolve_style("User", theme(), VisualizationMode::Flow);
        assert_eq!(a, b);
    }

    #[test]
    fn drawio_styles_cover_every_category() {
        for c in [
            Category::Database,
            Category::Api,
            Category::Error,
            Category::Actor,
            Category::Ui,
            Category::Default,
        ] {
            assert!(!drawio_style(c).is_empty());
        }
    }
}
