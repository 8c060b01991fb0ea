//! draw.io interchange XML generation.
//!
//! Produces a self-contained `mxfile` document: one swimlane container per
//! non-empty cluster, one vertex cell per node on a computed grid, one
//! orthogonal edge cell per connection. The geometry is a plain grid — good
//! enough as a starting point for round-trip editing in an external editor.

use crate::style::drawio_style;
use chrono::{DateTime, Utc};
use flowgram_core::graph::Graph;
use flowgram_core::label::classify;
use std::collections::HashMap;
use std::fmt::Write as _;

const NODE_WIDTH: i64 = 180;
const NODE_HEIGHT: i64 = 80;
const SPACING_X: i64 = 250;
const SPACING_Y: i64 = 120;
const START_X: i64 = 40;
const START_Y: i64 = 40;
/// Vertical allowance for the swimlane title bar when re-basing member
/// coordinates into a container.
const CLUSTER_HEADER: i64 = 30;

#[derive(Debug, Clone, Default)]
pub struct DrawioOptions {
    /// Fixed diagram id; defaults to a fresh UUID v4.
    pub diagram_id: Option<String>,
    /// Fixed `modified` timestamp; defaults to now. Pin both for
    /// byte-identical output.
    pub modified: Option<DateTime<Utc>>,
}

fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Grid placement: fixed cell size, column count grows with the square root
/// of the node count so wide diagrams stay roughly square.
fn grid_positions(graph: &Graph) -> HashMap<String, (i64, i64)> {
    let count = graph.nodes.len();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cols = usize::max(3, (count as f64).sqrt() as usize + 1);

    let mut positions = HashMap::with_capacity(count);
    for (idx, id) in graph.nodes.keys().enumerate() {
        let row = (idx / cols) as i64;
        let col = (idx % cols) as i64;
        positions.insert(
            id.clone(),
            (START_X + col * SPACING_X, START_Y + row * SPACING_Y),
        );
    }
    positions
}

pub fn generate_drawio(graph: &Graph, options: &DrawioOptions) -> String {
    let positions = grid_positions(graph);
    let diagram_id = options
        .diagram_id
        .clone()
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    let modified = options
        .modified
        .unwrap_or_else(Utc::now)
        .format("%Y-%m-%dT%H:%M:%S.000Z");

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<mxfile host="app.diagrams.net" modified="{modified}" agent="flowgram" version="21.0.0" type="device">"#
    );
    let _ = writeln!(out, r#"  <diagram id="{diagram_id}" name="Architecture">"#);
    out.push_str(
        "    <mxGraphModel dx=\"1422\" dy=\"794\" grid=\"1\" gridSize=\"10\" guides=\"1\" tooltips=\"1\" connect=\"1\" arrows=\"1\" fold=\"1\" page=\"1\" pageScale=\"1\" pageWidth=\"1169\" pageHeight=\"827\" math=\"0\" shadow=\"0\">\n",
    );
    out.push_str("      <root>\n");
    out.push_str("        <mxCell id=\"0\" />\n");
    out.push_str("        <mxCell id=\"1\" parent=\"0\" />\n");

    // Containers first, so the editor stacks members above them. A cluster
    // with no placed members gets no container.
    let mut cluster_bounds: HashMap<&str, (i64, i64)> = HashMap::new();
    for cluster in &graph.clusters {
        let member_positions: Vec<(i64, i64)> = cluster
            .nodes
            .iter()
            .filter_map(|id| positions.get(id).copied())
            .collect();
        if member_positions.is_empty() {
            continue;
        }

        let min_x = member_positions.iter().map(|p| p.0).min().unwrap_or(0) - 20;
        let min_y = member_positions.iter().map(|p| p.1).min().unwrap_or(0) - 40;
        let max_x = member_positions.iter().map(|p| p.0).max().unwrap_or(0) + NODE_WIDTH + 20;
        let max_y = member_positions.iter().map(|p| p.1).max().unwrap_or(0) + NODE_HEIGHT + 20;
        cluster_bounds.insert(cluster.id.as_str(), (min_x, min_y));

        let _ = writeln!(
            out,
            r#"        <mxCell id="{}" value="{}" style="swimlane;whiteSpace=wrap;html=1;fillColor=#dae8fc;strokeColor=#6c8ebf;startSize=30;fontStyle=1;fontSize=14;" vertex="1" parent="1">"#,
            cluster.id,
            xml_escape(&cluster.title)
        );
        let _ = writeln!(
            out,
            r#"          <mxGeometry x="{min_x}" y="{min_y}" width="{}" height="{}" as="geometry" />"#,
            max_x - min_x,
            max_y - min_y
        );
        out.push_str("        </mxCell>\n");
    }

    for (id, label) in &graph.nodes {
        let style = drawio_style(classify(label));
        let (mut x, mut y) = positions.get(id).copied().unwrap_or((START_X, START_Y));

        // A node referenced under several headings keeps the first cluster in
        // document order; the rest are ignored here.
        let mut parent = "1";
        for cluster in &graph.clusters {
            if cluster.contains(id) {
                if let Some(&(cx, cy)) = cluster_bounds.get(cluster.id.as_str()) {
                    parent = cluster.id.as_str();
                    x -= cx;
                    y = y - cy + CLUSTER_HEADER;
                }
                break;
            }
        }

        let _ = writeln!(
            out,
            r#"        <mxCell id="{id}" value="{}" style="{style}" vertex="1" parent="{parent}">"#,
            xml_escape(label)
        );
        let _ = writeln!(
            out,
            r#"          <mxGeometry x="{x}" y="{y}" width="{NODE_WIDTH}" height="{NODE_HEIGHT}" as="geometry" />"#
        );
        out.push_str("        </mxCell>\n");
    }

    for (i, edge) in graph.edges.iter().enumerate() {
        let edge_id = 10000 + i;
        let _ = writeln!(
            out,
            r#"        <mxCell id="{edge_id}" value="{}" style="edgeStyle=orthogonalEdgeStyle;rounded=0;orthogonalLoop=1;jettySize=auto;html=1;strokeWidth=2;" edge="1" parent="1" source="{}" target="{}">"#,
            xml_escape(&edge.label),
            edge.source,
            edge.target
        );
        out.push_str("          <mxGeometry relative=\"1\" as=\"geometry\" />\n");
        out.push_str("        </mxCell>\n");
    }

    out.push_str("      </root>\n    </mxGraphModel>\n  </diagram>\n</mxfile>\n");
    tracing::debug!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        bytes = out.len(),
        "generated drawio xml"
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use flowgram_core::parse_diagram;

    fn fixed_options() -> DrawioOptions {
        DrawioOptions {
            diagram_id: Some("test-diagram".to_string()),
            modified: Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()),
        }
    }

    #[test]
    fn output_is_byte_identical_with_pinned_id_and_timestamp() {
        let graph = parse_diagram("## Auth\nA → B → C");
        let opts = fixed_options();
        assert_eq!(generate_drawio(&graph, &opts), generate_drawio(&graph, &opts));
    }

    #[test]
    fn document_has_root_scaffolding() {
        let graph = parse_diagram("A → B");
        let xml = generate_drawio(&graph, &fixed_options());
        assert!(xml.starts_with("<mxfile"));
        assert!(xml.contains("<mxCell id=\"0\" />"));
        assert!(xml.contains("<mxCell id=\"1\" parent=\"0\" />"));
        assert!(xml.trim_end().ends_with("</mxfile>"));
    }

    #[test]
    fn unclustered_nodes_are_parented_to_the_document_root() {
        let graph = parse_diagram("A → B");
        let xml = generate_drawio(&graph, &fixed_options());
        assert!(xml.contains(r#"<mxCell id="A" value="A" style="#));
        assert!(xml.contains(r#"vertex="1" parent="1">"#));
    }

    #[test]
    fn grid_uses_at_least_three_columns() {
        let graph = parse_diagram("A → B → C → D");
        let xml = generate_drawio(&graph, &fixed_options());
        // Four nodes, three columns: D wraps to the second row.
        assert!(xml.contains(&format!(r#"x="{}" y="{}""#, START_X, START_Y + SPACING_Y)));
    }

    #[test]
    fn cluster_container_wraps_member_extent() {
        let graph = parse_diagram("## Auth\nA → B");
        let xml = generate_drawio(&graph, &fixed_options());
        // Members at (40,40) and (290,40): bounds (20,0) 470x140.
        assert!(xml.contains(r#"<mxCell id="cluster_0" value="Auth""#));
        assert!(xml.contains(r#"<mxGeometry x="20" y="0" width="470" height="140" as="geometry" />"#));
    }

    #[test]
    fn member_positions_are_rebased_into_the_container() {
        let graph = parse_diagram("## Auth\nA");
        let xml = generate_drawio(&graph, &fixed_options());
        assert!(xml.contains(r#"vertex="1" parent="cluster_0">"#));
        // Node at (40,40), container origin (20,0): rebased to (20, 70).
        assert!(xml.contains(r#"<mxGeometry x="20" y="70" width="180" height="80" as="geometry" />"#));
    }

    #[test]
    fn first_cluster_wins_for_shared_nodes() {
        let graph = parse_diagram("# One\nShared\n# Two\nShared → Other");
        let xml = generate_drawio(&graph, &fixed_options());
        assert!(xml.contains(r#"<mxCell id="Shared" value="Shared" style="#));
        assert!(xml.contains(r#"parent="cluster_0">"#));
    }

    #[test]
    fn empty_clusters_get_no_container() {
        let graph = parse_diagram("# Empty\n## Full\nA");
        let xml = generate_drawio(&graph, &fixed_options());
        assert!(!xml.contains(r#"id="cluster_0""#));
        assert!(xml.contains(r#"id="cluster_1""#));
    }

    #[test]
    fn edges_reference_nodes_by_id_with_sequential_ids() {
        let graph = parse_diagram("A → B → C");
        let xml = generate_drawio(&graph, &fixed_options());
        assert!(xml.contains(r#"<mxCell id="10000" value="" style="edgeStyle=orthogonalEdgeStyle"#));
        assert!(xml.contains(r#"source="A" target="B""#));
        assert!(xml.contains(r#"<mxCell id="10001""#));
        assert!(xml.contains(r#"source="B" target="C""#));
    }

    #[test]
    fn labels_are_xml_escaped() {
        let graph = parse_diagram("[a & b] X → R&D");
        let xml = generate_drawio(&graph, &fixed_options());
        assert!(xml.contains("R&amp;D"));
        assert!(xml.contains("a &amp; b"));
        assert!(!xml.contains(r#"value="R&D""#));
    }
}
