//! JSON export/import of the parsed graph.
//!
//! The document schema is stable:
//! `{metadata: {version, created, node_count, edge_count, cluster_count},
//!   nodes: {id: label}, edges: [{source, target, label}],
//!   clusters: [{id, title, nodes}]}`.
//!
//! Import is atomic: it either yields a complete [`Graph`] or an error, and
//! never touches caller state on failure. Labels round-trip verbatim — export
//! stores the decorated form and import does not re-decorate.

use crate::error::Result;
use crate::graph::{Cluster, Edge, Graph};
use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

pub const EXPORT_VERSION: &str = "2.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub version: String,
    pub created: String,
    pub node_count: usize,
    pub edge_count: usize,
    pub cluster_count: usize,
}

/// On-disk shape of an exported diagram. Every section is optional on import
/// so hand-edited documents with missing sections still load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagramDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ExportMetadata>,
    #[serde(default)]
    pub nodes: IndexMap<String, String>,
    #[serde(default)]
    pub edges: Vec<Edge>,
    #[serde(default)]
    pub clusters: Vec<Cluster>,
}

pub fn export_json(graph: &Graph) -> Result<String> {
    export_json_at(graph, Utc::now())
}

/// Like [`export_json`] with an explicit `created` timestamp, so callers (and
/// tests) can produce byte-identical documents.
pub fn export_json_at(graph: &Graph, created: DateTime<Utc>) -> Result<String> {
    let doc = DiagramDocument {
        metadata: Some(ExportMetadata {
            version: EXPORT_VERSION.to_string(),
            created: created.to_rfc3339_opts(SecondsFormat::Secs, true),
            node_count: graph.nodes.len(),
            edge_count: graph.edges.len(),
            cluster_count: graph.clusters.len(),
        }),
        nodes: graph.nodes.clone(),
        edges: graph.edges.clone(),
        clusters: graph.clusters.clone(),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Reconstructs a graph from an exported document. Metadata counts are
/// informational and are not cross-checked against the sections.
pub fn import_json(json: &str) -> Result<Graph> {
    let doc: DiagramDocument = serde_json::from_str(json)?;
    Ok(Graph {
        nodes: doc.nodes,
        edges: doc.edges,
        clusters: doc.clusters,
    })
}

/// Heuristic reconstruction of a textual rendering from a graph: one heading
/// per cluster with its member labels joined by arrows, then any unclustered
/// nodes. Lossy for the original formatting (continuation lines and edge
/// labels are gone) but structurally useful as an editing starting point.
pub fn graph_to_text(graph: &Graph) -> String {
    let mut out = String::new();

    for cluster in &graph.clusters {
        let _ = writeln!(out, "## {}", cluster.title);
        let labels: Vec<&str> = cluster
            .nodes
            .iter()
            .filter_map(|id| graph.nodes.get(id))
            .map(String::as_str)
            .collect();
        if !labels.is_empty() {
            let _ = writeln!(out, "{}", labels.join(" → "));
        }
        out.push('\n');
    }

    let leftover: Vec<&str> = graph
        .nodes
        .iter()
        .filter(|(id, _)| !graph.clusters.iter().any(|c| c.contains(id)))
        .map(|(_, label)| label.as_str())
        .collect();
    if !leftover.is_empty() {
        let _ = writeln!(out, "{}", leftover.join(" → "));
    }

    out.trim_end().to_string()
}
