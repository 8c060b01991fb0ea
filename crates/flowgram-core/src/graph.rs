//! Semantic graph model produced by the parser.
//!
//! Node identity is a pure function of the label text (see [`node_id`]); two
//! occurrences of the same label in one document collapse to one node. Edges
//! and clusters keep insertion order, and both generators rely on that order
//! for deterministic output.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A directed connection between two nodes. `label` may be empty.
///
/// Parallel edges between the same pair are allowed and never deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub label: String,
}

impl Edge {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label: label.into(),
        }
    }
}

/// A named group of nodes opened by a heading line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster {
    pub id: String,
    pub title: String,
    /// Member node ids, first-insert order, no duplicates.
    pub nodes: Vec<String>,
}

impl Cluster {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            nodes: Vec::new(),
        }
    }

    pub fn contains(&self, node_id: &str) -> bool {
        self.nodes.iter().any(|n| n == node_id)
    }

    /// Adds a member id unless it is already present.
    pub fn add_member(&mut self, node_id: &str) {
        if !self.contains(node_id) {
            self.nodes.push(node_id.to_string());
        }
    }
}

/// The parse result: decorated labels keyed by node id, plus ordered edges and
/// clusters. Owned by one parse invocation; generators borrow it immutably.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    pub nodes: IndexMap<String, String>,
    pub edges: Vec<Edge>,
    pub clusters: Vec<Cluster>,
}

impl Graph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.clusters.is_empty()
    }
}

/// Derives the stable node id for a label: runs of non-word characters become
/// a single `_`, leading/trailing separators are trimmed. Labels that sanitize
/// to nothing fall back to a hash-derived id so they still get a stable
/// identity.
pub fn node_id(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut pending_sep = false;
    for ch in label.chars() {
        if ch.is_alphanumeric() || ch == '_' {
            if pending_sep && !out.is_empty() {
                out.push('_');
            }
            pending_sep = false;
            out.push(ch);
        } else {
            pending_sep = true;
        }
    }
    if out.is_empty() {
        return format!("node_{}", fnv1a64(label.as_bytes()));
    }
    out
}

/// FNV-1a over the raw bytes. Used for the empty-id fallback and for render
/// cache keys; stable across runs and platforms, unlike a hasher seeded per
/// process.
pub fn fnv1a64(bytes: &[u8]) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for &b in bytes {
        hash ^= u64::from(b);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}
