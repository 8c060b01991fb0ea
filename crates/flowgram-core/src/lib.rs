#![forbid(unsafe_code)]

//! Flow-notation parser + semantic graph model (headless).
//!
//! The input is a lightweight line notation for flows:
//!
//! ```text
//! ## Authentication
//! User → Login Dialog → POST /auth/login
//! ↓
//! [ok] Generate Token → Dashboard
//! ```
//!
//! Heading lines open clusters, arrows chain nodes within a row, standalone
//! `↓` / `v` / `|` lines carry the previous row's tail over to the next row,
//! and `[text]` annotations become edge labels. Parsing yields a [`Graph`]
//! (deduplicated nodes, insertion-ordered edges, clusters) consumed by the
//! generators in `flowgram-render`.
//!
//! Design goals:
//! - stateless entry points (`parse_diagram`, `validate`, export/import) that
//!   take every input as a parameter
//! - deterministic outputs (insertion order everywhere, stable node ids)
//! - no I/O anywhere in this crate

pub mod error;
pub mod graph;
pub mod json;
pub mod label;
pub mod parse;
pub mod snapshot;
pub mod theme;
pub mod validate;

pub use error::{Error, Result};
pub use graph::{Cluster, Edge, Graph, node_id};
pub use json::{export_json, export_json_at, graph_to_text, import_json};
pub use label::{Category, classify, decorate};
pub use parse::parse_diagram;
pub use snapshot::{Snapshot, SnapshotStore};
pub use theme::{StyleBlock, Theme};
pub use validate::{Diagnostics, validate};
