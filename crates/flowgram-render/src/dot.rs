//! Graphviz DOT generation.
//!
//! The output is the textual source handed to an external layout/rendering
//! service. Iteration follows the graph's insertion order everywhere, so
//! identical inputs serialize to byte-identical DOT.

use crate::style::resolve_style;
use crate::{EdgeRouting, LayoutChoice, VisualizationMode};
use flowgram_core::graph::Graph;
use flowgram_core::theme::Theme;
use std::collections::HashSet;
use std::fmt::Write as _;

#[derive(Debug, Clone, Default)]
pub struct DotOptions {
    pub layout: LayoutChoice,
    pub splines: EdgeRouting,
    pub mode: VisualizationMode,
    /// Cluster ids rendered as a collapsed title-only box.
    pub collapsed_clusters: Vec<String>,
}

fn escape_label(s: &str) -> String {
    s.replace('"', "\\\"")
}

pub fn generate_dot(graph: &Graph, theme: &Theme, options: &DotOptions) -> String {
    let mode = options.mode;

    let mut engine = options.layout.engine();
    let rankdir = match mode {
        VisualizationMode::Sequence => {
            engine = "dot";
            Some("LR")
        }
        VisualizationMode::Mindmap => {
            engine = "twopi";
            None
        }
        VisualizationMode::Network => {
            engine = "neato";
            None
        }
        VisualizationMode::Flow => {
            if engine == "dot" {
                Some("TB")
            } else {
                None
            }
        }
    };

    let splines = if matches!(engine, "neato" | "fdp") || mode == VisualizationMode::Mindmap {
        "curved"
    } else {
        options.splines.as_str()
    };
    let (nodesep, ranksep) = if mode == VisualizationMode::Mindmap {
        ("0.8", "1.2")
    } else {
        ("0.6", "0.8")
    };
    let node_fontsize = if mode == VisualizationMode::Mindmap { 12 } else { 10 };
    let node_penwidth = if matches!(mode, VisualizationMode::Network | VisualizationMode::Mindmap) {
        "2.0"
    } else {
        "1.5"
    };
    let edge_penwidth = if mode == VisualizationMode::Sequence { "1.5" } else { "1.0" };

    let mut out = String::new();
    out.push_str("digraph G {\n");
    let _ = writeln!(out, "  layout={engine};");
    if let Some(dir) = rankdir {
        let _ = writeln!(out, "  rankdir={dir};");
    }
    out.push_str("  bgcolor=\"transparent\";\n");
    let _ = writeln!(out, "  splines={splines};");
    out.push_str("  overlap=false;\n");
    let _ = writeln!(out, "  nodesep={nodesep};");
    let _ = writeln!(out, "  ranksep={ranksep};");
    let _ = writeln!(
        out,
        "  node [fontname=\"{}\", fontsize={node_fontsize}, penwidth={node_penwidth}];",
        theme.font
    );
    let _ = writeln!(
        out,
        "  edge [fontname=\"{}\", fontsize=9, color=\"{}\", arrowsize=0.8, penwidth={edge_penwidth}];",
        theme.font, theme.edge_color
    );

    let mut rendered: HashSet<&str> = HashSet::new();
    // Only engines with true subgraph grouping get visual clusters, and
    // sequence mode flattens everything into one lane.
    let use_clusters = matches!(engine, "dot" | "fdp") && mode != VisualizationMode::Sequence;

    if use_clusters {
        for cluster in &graph.clusters {
            let collapsed = options.collapsed_clusters.iter().any(|c| c == &cluster.id);
            let _ = writeln!(out, "  subgraph {} {{", cluster.id);
            if collapsed {
                let _ = writeln!(out, "    label=\"{} [Collapsed]\";", escape_label(&cluster.title));
                out.push_str("    style=\"rounded,dashed,filled\";\n");
                let _ = writeln!(out, "    fillcolor=\"{}\";", theme.default.fill);
            } else {
                let _ = writeln!(out, "    label=\"{}\";", escape_label(&cluster.title));
                out.push_str("    style=\"rounded,dashed\";\n");
                let _ = writeln!(out, "    color=\"{}\";", theme.edge_color);
                let _ = writeln!(out, "    fontcolor=\"{}\";", theme.edge_color);
                for id in &cluster.nodes {
                    if let Some(label) = graph.nodes.get(id) {
                        write_node(&mut out, "    ", id, label, theme, mode);
                        rendered.insert(id.as_str());
                    }
                }
            }
            out.push_str("  }\n");
        }
    }

    // Every node appears exactly once, whether or not it was emitted inside a
    // cluster above.
    for (id, label) in &graph.nodes {
        if !use_clusters || !rendered.contains(id.as_str()) {
            write_node(&mut out, "  ", id, label, theme, mode);
        }
    }

    for edge in &graph.edges {
        let dashed = mode == VisualizationMode::Sequence;
        let attrs = match (edge.label.is_empty(), dashed) {
            (true, false) => String::new(),
            (true, true) => " [style=\"dashed\"]".to_string(),
            (false, false) => format!(" [label=\"{}\"]", escape_label(&edge.label)),
            (false, true) => format!(
                " [label=\"{}\", style=\"dashed\"]",
                escape_label(&edge.label)
            ),
        };
        let _ = writeln!(out, "  {} -> {}{attrs};", edge.source, edge.target);
    }

    out.push_str("}\n");
    tracing::debug!(engine, mode = mode.as_str(), bytes = out.len(), "generated dot");
    out
}

fn write_node(
    out: &mut String,
    indent: &str,
    id: &str,
    label: &str,
    theme: &Theme,
    mode: VisualizationMode,
) {
    let style = resolve_style(label, theme, mode);
    let _ = writeln!(
        out,
        "{indent}{id} [label=\"{}\", shape=\"{}\", style=\"{}\", fillcolor=\"{}\", color=\"{}\", fontcolor=\"{}\"];",
        escape_label(label),
        style.shape,
        style.flags,
        style.fill,
        style.border,
        style.text
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowgram_core::parse_diagram;

    fn theme() -> &'static Theme {
        Theme::builtin("Professional (Blue)").unwrap()
    }

    #[test]
    fn output_is_byte_identical_across_calls() {
        let graph = parse_diagram("## Auth\nUser → Login → DB\n↓\nDashboard");
        let opts = DotOptions::default();
        assert_eq!(
            generate_dot(&graph, theme(), &opts),
            generate_dot(&graph, theme(), &opts)
        );
    }

    #[test]
    fn hierarchy_flow_sets_top_to_bottom_rank() {
        let graph = parse_diagram("A → B");
        let dot = generate_dot(&graph, theme(), &DotOptions::default());
        assert!(dot.contains("layout=dot;"));
        assert!(dot.contains("rankdir=TB;"));
        assert!(dot.contains("splines=ortho;"));
    }

    #[test]
    fn sequence_mode_overrides_engine_and_rank_direction() {
        let graph = parse_diagram("A → B");
        let opts = DotOptions {
            layout: LayoutChoice::Radial,
            mode: VisualizationMode::Sequence,
            ..DotOptions::default()
        };
        let dot = generate_dot(&graph, theme(), &opts);
        assert!(dot.contains("layout=dot;"));
        assert!(dot.contains("rankdir=LR;"));
        assert!(dot.contains("[style=\"dashed\"]"));
    }

    #[test]
    fn mindmap_mode_forces_twopi_and_wider_separation() {
        let graph = parse_diagram("A → B");
        let opts = DotOptions {
            mode: VisualizationMode::Mindmap,
            ..DotOptions::default()
        };
        let dot = generate_dot(&graph, theme(), &opts);
        assert!(dot.contains("layout=twopi;"));
        assert!(!dot.contains("rankdir="));
        assert!(dot.contains("nodesep=0.8;"));
        assert!(dot.contains("ranksep=1.2;"));
        assert!(dot.contains("splines=curved;"));
    }

    #[test]
    fn organic_layout_forces_curved_splines() {
        let graph = parse_diagram("A → B");
        let opts = DotOptions {
            layout: LayoutChoice::Organic,
            ..DotOptions::default()
        };
        let dot = generate_dot(&graph, theme(), &opts);
        assert!(dot.contains("layout=neato;"));
        assert!(dot.contains("splines=curved;"));
        assert!(!dot.contains("rankdir="));
    }

    #[test]
    fn clusters_are_emitted_as_dashed_subgraphs_for_dot_engine() {
        let graph = parse_diagram("## Auth\nA → B");
        let dot = generate_dot(&graph, theme(), &DotOptions::default());
        assert!(dot.contains("subgraph cluster_0 {"));
        assert!(dot.contains("label=\"Auth\";"));
        assert!(dot.contains("style=\"rounded,dashed\";"));
    }

    #[test]
    fn circular_layout_emits_nodes_flat() {
        let graph = parse_diagram("## Auth\nA → B");
        let opts = DotOptions {
            layout: LayoutChoice::Circular,
            ..DotOptions::default()
        };
        let dot = generate_dot(&graph, theme(), &opts);
        assert!(!dot.contains("subgraph"));
        assert_eq!(dot.matches("A [label=").count(), 1);
        assert_eq!(dot.matches("B [label=").count(), 1);
    }

    #[test]
    fn every_node_appears_exactly_once_with_clusters() {
        let graph = parse_diagram("## Auth\nA → B\n# Other\nC\nD");
        let dot = generate_dot(&graph, theme(), &DotOptions::default());
        for id in ["A", "B", "C", "D"] {
            assert_eq!(dot.matches(&format!("{id} [label=")).count(), 1, "node {id}");
        }
    }

    #[test]
    fn collapsed_cluster_renders_title_only() {
        let graph = parse_diagram("## Auth\nA → B");
        let opts = DotOptions {
            collapsed_clusters: vec!["cluster_0".to_string()],
            ..DotOptions::default()
        };
        let dot = generate_dot(&graph, theme(), &opts);
        assert!(dot.contains("label=\"Auth [Collapsed]\";"));
        assert!(dot.contains("style=\"rounded,dashed,filled\";"));
        // Members are pushed out of the subgraph but still emitted flat.
        assert_eq!(dot.matches("A [label=").count(), 1);
    }

    #[test]
    fn embedded_quotes_are_escaped() {
        let graph = parse_diagram("Say \"hi\" → Done");
        let dot = generate_dot(&graph, theme(), &DotOptions::default());
        assert!(!dot.contains("label=\"Say \"hi\"\""));
        assert!(dot.contains("\\\""));
    }

    #[test]
    fn edge_labels_are_attached() {
        let graph = parse_diagram("[yes] A -> B");
        let dot = generate_dot(&graph, theme(), &DotOptions::default());
        assert!(dot.contains("A -> B [label=\"yes\"];"));
    }
}
