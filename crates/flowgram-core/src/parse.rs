//! Line-oriented parser for the flow notation.
//!
//! The grammar is deliberately small: heading lines open clusters, standalone
//! continuation tokens link the previous row's tail to the next row's head,
//! and everything else is a content row of arrow-separated labels. The parser
//! never fails on well-formed strings; use [`crate::validate`] for the
//! pre-parse diagnostics gate.

use crate::graph::{Cluster, Edge, Graph, node_id};
use crate::label::decorate;
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

fn arrow_split_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*(?:→|->|=>)\s*").expect("valid regex"))
}

fn edge_label_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[([^\]]+)\]").expect("valid regex"))
}

/// Recognized spellings of the standalone vertical-continuation line, after
/// removing spaces.
fn is_continuation_token(line: &str) -> bool {
    let compact: String = line.chars().filter(|c| *c != ' ').collect();
    matches!(compact.as_str(), "↓" | "v" | "|" | "||")
}

fn strip_box_glyphs(segment: &str) -> String {
    segment
        .chars()
        .filter(|c| !matches!(c, '┌' | '┐' | '└' | '┘' | '│'))
        .collect()
}

/// Pulls `[label]` annotations out of a content line.
///
/// Returns the line with the annotations removed, plus each label keyed by the
/// character offset where its `[` sat in the original line. The offset keys
/// feed the positional edge-label association: the carry-over edge consults
/// offset 0, and the adjacent pair `i` consults key `i`. When several labels
/// sit on one line this mapping is approximate (first-offset-wins); that
/// behavior is intentional and pinned by tests.
fn extract_edge_labels(line: &str) -> (String, HashMap<usize, String>) {
    let mut labels = HashMap::new();
    let mut stripped = String::with_capacity(line.len());
    let mut cursor = 0usize;
    for caps in edge_label_regex().captures_iter(line) {
        let m = caps.get(0).expect("match 0 always present");
        let char_offset = line[..m.start()].chars().count();
        labels.insert(char_offset, caps[1].to_string());
        stripped.push_str(&line[cursor..m.start()]);
        cursor = m.end();
    }
    stripped.push_str(&line[cursor..]);
    (stripped, labels)
}

/// Parses the notation into a [`Graph`]. Infallible: unrecognizable content
/// simply produces fewer nodes, and pre-flight problems are the validator's
/// job.
pub fn parse_diagram(text: &str) -> Graph {
    let mut graph = Graph::default();
    let mut current_cluster: Option<usize> = None;
    let mut cluster_counter = 0usize;
    let mut last_row_tail: Option<String> = None;
    let mut pending_vertical_link = false;

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('#') {
            let title = line.trim_start_matches('#').trim();
            graph
                .clusters
                .push(Cluster::new(format!("cluster_{cluster_counter}"), title));
            cluster_counter += 1;
            current_cluster = Some(graph.clusters.len() - 1);
            // A heading interrupts any pending carry-over link.
            last_row_tail = None;
            pending_vertical_link = false;
            continue;
        }

        if is_continuation_token(line) {
            pending_vertical_link = true;
            continue;
        }

        let (stripped, edge_labels) = extract_edge_labels(line);
        let mut row_ids: Vec<String> = Vec::new();

        for part in arrow_split_regex().split(&stripped) {
            let mut segment = strip_box_glyphs(part.trim());
            if let Some(rest) = segment.strip_suffix('↓') {
                segment = rest.trim().to_string();
                pending_vertical_link = true;
            }
            if let Some(rest) = segment.strip_prefix('↓') {
                segment = rest.trim().to_string();
                pending_vertical_link = true;
            }
            if segment.is_empty() {
                continue;
            }

            let id = node_id(&segment);
            graph.nodes.insert(id.clone(), decorate(&segment));
            if let Some(idx) = current_cluster {
                graph.clusters[idx].add_member(&id);
            }
            row_ids.push(id);
        }

        if row_ids.is_empty() {
            continue;
        }

        // The flag is only consumed when a tail exists; a marker seen before
        // any content row stays armed until a linkable row pair shows up.
        if pending_vertical_link {
            if let Some(tail) = last_row_tail.take() {
                let label = edge_labels.get(&0).cloned().unwrap_or_default();
                graph.edges.push(Edge::new(tail, row_ids[0].clone(), label));
                pending_vertical_link = false;
            }
        }

        for i in 0..row_ids.len().saturating_sub(1) {
            let label = edge_labels.get(&i).cloned().unwrap_or_default();
            graph
                .edges
                .push(Edge::new(row_ids[i].clone(), row_ids[i + 1].clone(), label));
        }

        last_row_tail = Some(row_ids[row_ids.len() - 1].clone());
    }

    tracing::debug!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        clusters = graph.clusters.len(),
        "parsed diagram"
    );
    graph
}
