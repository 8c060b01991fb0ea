#![forbid(unsafe_code)]

//! `flowgram` compiles a lightweight flow notation ("A → B → C") into a graph
//! and serializes it for external renderers and editors.
//!
//! The facade re-exports the parser/model from `flowgram-core`. Enable the
//! `render` feature for the DOT and draw.io generators (`flowgram::render`),
//! and `remote` for the HTTP client that rasterizes DOT via an external
//! Graphviz service (`flowgram::remote`).

pub use flowgram_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use flowgram_render::{
        DotOptions, DrawioOptions, EdgeRouting, LayoutChoice, StyleDescriptor, VisualizationMode,
        generate_dot, generate_drawio, resolve_style,
    };

    #[derive(Debug, thiserror::Error)]
    pub enum PipelineError {
        #[error("diagram failed validation: {}", .errors.join("; "))]
        Validation { errors: Vec<String> },
        #[error(transparent)]
        Core(#[from] flowgram_core::Error),
    }

    pub type Result<T> = std::result::Result<T, PipelineError>;

    /// The locally computed outputs of one compilation. Both artifacts are
    /// always available together; remote rasterization is a separate,
    /// best-effort step.
    #[derive(Debug, Clone)]
    pub struct Artifacts {
        pub graph: flowgram_core::Graph,
        pub dot: String,
        pub drawio: String,
        /// Validator warnings. Never block compilation.
        pub warnings: Vec<String>,
    }

    /// Runs the full local pipeline: validate (gate), parse, generate both
    /// artifacts. Validation errors abort before parsing; warnings are passed
    /// through on the result.
    pub fn compile(
        text: &str,
        theme: &flowgram_core::Theme,
        dot_options: &DotOptions,
        drawio_options: &DrawioOptions,
    ) -> Result<Artifacts> {
        let diagnostics = flowgram_core::validate(text);
        if diagnostics.has_errors() {
            return Err(PipelineError::Validation {
                errors: diagnostics.errors,
            });
        }

        let graph = flowgram_core::parse_diagram(text);
        let dot = generate_dot(&graph, theme, dot_options);
        let drawio = generate_drawio(&graph, drawio_options);
        Ok(Artifacts {
            graph,
            dot,
            drawio,
            warnings: diagnostics.warnings,
        })
    }
}

#[cfg(feature = "remote")]
pub mod remote;
