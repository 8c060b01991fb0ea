//! Named snapshots of diagram source text.
//!
//! The store is plain data owned by the host (a CLI, a UI session, a test) —
//! the core pipeline never holds one. Saving under an existing name replaces
//! the previous snapshot.

use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub text: String,
    pub created: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotStore {
    snapshots: IndexMap<String, Snapshot>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save(&mut self, name: &str, text: &str) {
        self.save_at(name, text, Utc::now());
    }

    pub fn save_at(&mut self, name: &str, text: &str, created: DateTime<Utc>) {
        self.snapshots.insert(
            name.to_string(),
            Snapshot {
                text: text.to_string(),
                created: created.to_rfc3339_opts(SecondsFormat::Secs, true),
            },
        );
    }

    pub fn load(&self, name: &str) -> Option<&Snapshot> {
        self.snapshots.get(name)
    }

    /// Removes a snapshot, preserving the order of the remaining entries.
    pub fn remove(&mut self, name: &str) -> Option<Snapshot> {
        self.snapshots.shift_remove(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.snapshots.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
