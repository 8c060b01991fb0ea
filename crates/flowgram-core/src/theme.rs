//! Built-in visual themes.
//!
//! Themes are static configuration: a default style block plus per-category
//! overrides. The core never mutates them; the style mapper merges an override
//! over the default block at render time.

use crate::label::Category;

/// Concrete visual attributes for one node category, as opaque strings
/// interpreted by the generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleBlock {
    pub shape: &'static str,
    /// Extra style flags ("filled", "rounded,filled", "dashed", ...). `None`
    /// means inherit from the theme default block.
    pub style: Option<&'static str>,
    pub fill: &'static str,
    pub border: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub bgcolor: &'static str,
    pub edge_color: &'static str,
    pub font: &'static str,
    pub default: StyleBlock,
    overrides: &'static [(Category, StyleBlock)],
}

impl Theme {
    /// Looks up a built-in theme by its display name.
    pub fn builtin(name: &str) -> Option<&'static Theme> {
        BUILTIN.iter().find(|t| t.name == name)
    }

    pub fn all_builtin() -> &'static [Theme] {
        BUILTIN
    }

    /// The merged style block for a category: override fields win, a missing
    /// override `style` inherits the default block's flags, and categories
    /// without an override fall back to the default block entirely.
    pub fn block_for(&self, category: Category) -> StyleBlock {
        match self.overrides.iter().find(|(c, _)| *c == category) {
            Some((_, block)) => StyleBlock {
                style: block.style.or(self.default.style),
                ..*block
            },
            None => self.default,
        }
    }
}

macro_rules! block {
    ($shape:expr, $fill:expr, $border:expr, $text:expr) => {
        StyleBlock {
            shape: $shape,
            style: None,
            fill: $fill,
            border: $border,
            text: $text,
        }
    };
    ($shape:expr, $style:expr, $fill:expr, $border:expr, $text:expr) => {
        StyleBlock {
            shape: $shape,
            style: Some($style),
            fill: $fill,
            border: $border,
            text: $text,
        }
    };
}

static BUILTIN: &[Theme] = &[
    Theme {
        name: "Professional (Blue)",
        bgcolor: "#ffffff",
        edge_color: "#555555",
        font: "Helvetica",
        default: block!("box", "rounded,filled", "#e6f3ff", "#336699", "#000000"),
        overrides: &[
            (Category::Database, block!("cylinder", "#fff3cd", "#856404", "#000000")),
            (Category::Api, block!("component", "#d1e7dd", "#0f5132", "#000000")),
            (Category::Error, block!("box", "filled,dashed", "#f8d7da", "#842029", "#000000")),
            (Category::Ui, block!("rect", "#cff4fc", "#055160", "#000000")),
            (Category::Actor, block!("ellipse", "#e2e3e5", "#383d41", "#000000")),
        ],
    },
    Theme {
        name: "Whiteboard Sketch",
        bgcolor: "#ffffff",
        edge_color: "#333333",
        font: "Comic Sans MS",
        default: block!("box", "dashed", "#ffffff", "#333333", "#333333"),
        overrides: &[
            (Category::Database, block!("cylinder", "#ffffff", "#333333", "#333333")),
            (Category::Api, block!("component", "#ffffff", "#333333", "#333333")),
            (Category::Error, block!("box", "dotted", "#ffffff", "#ff0000", "#ff0000")),
            (Category::Ui, block!("rect", "#ffffff", "#0000ff", "#0000ff")),
            (Category::Actor, block!("ellipse", "#ffffff", "#333333", "#333333")),
        ],
    },
    Theme {
        name: "Neon Cyberpunk",
        bgcolor: "#0b0f19",
        edge_color: "#00f3ff",
        font: "Courier",
        default: block!("polygon", "filled", "#1a1f2e", "#00f3ff", "#e0e0e0"),
        overrides: &[
            (Category::Database, block!("cylinder", "#2d1b2e", "#ff0055", "#ff0055")),
            (Category::Api, block!("component", "#0d2b2a", "#00ff99", "#00ff99")),
            (Category::Error, block!("box", "dashed", "#2a0e0e", "#ff3333", "#ff3333")),
            (Category::Ui, block!("parallelogram", "#1a2a3a", "#00aaff", "#00aaff")),
            (Category::Actor, block!("diamond", "#222222", "#ffff00", "#ffff00")),
        ],
    },
    Theme {
        name: "Blueprint",
        bgcolor: "#1c3b70",
        edge_color: "#ffffff",
        font: "Consolas",
        default: block!("box", "filled", "#1c3b70", "#ffffff", "#ffffff"),
        overrides: &[
            (Category::Database, block!("cylinder", "#1c3b70", "#ffffff", "#ffffff")),
            (Category::Api, block!("component", "#1c3b70", "#ffffff", "#ffffff")),
            (Category::Error, block!("box", "dashed", "#1c3b70", "#ff6b6b", "#ff6b6b")),
            (Category::Ui, block!("rect", "#1c3b70", "#ffffff", "#ffffff")),
            (Category::Actor, block!("ellipse", "#1c3b70", "#ffffff", "#ffffff")),
        ],
    },
    Theme {
        name: "Minimalist",
        bgcolor: "#fafafa",
        edge_color: "#cccccc",
        font: "Arial",
        default: block!("box", "rounded", "#ffffff", "#333333", "#333333"),
        overrides: &[
            (Category::Database, block!("cylinder", "#ffffff", "#666666", "#333333")),
            (Category::Api, block!("component", "#ffffff", "#666666", "#333333")),
            (Category::Error, block!("box", "dashed", "#ffffff", "#cc0000", "#cc0000")),
            (Category::Ui, block!("rect", "#ffffff", "#666666", "#333333")),
            (Category::Actor, block!("ellipse", "#ffffff", "#666666", "#333333")),
        ],
    },
    Theme {
        name: "Vibrant",
        bgcolor: "#ffffff",
        edge_color: "#333333",
        font: "Verdana",
        default: block!("box", "rounded,filled", "#e8f4f8", "#2c5aa0", "#1a1a1a"),
        overrides: &[
            (Category::Database, block!("cylinder", "#fff4e6", "#ff8c00", "#1a1a1a")),
            (Category::Api, block!("component", "#e8f5e9", "#4caf50", "#1a1a1a")),
            (Category::Error, block!("box", "filled,dashed", "#ffebee", "#f44336", "#1a1a1a")),
            (Category::Ui, block!("rect", "#f3e5f5", "#9c27b0", "#1a1a1a")),
            (Category::Actor, block!("ellipse", "#e1f5fe", "#03a9f4", "#1a1a1a")),
        ],
    },
];
