//! Keyword-driven label classification and icon decoration.
//!
//! Both tables are ordered and evaluated top to bottom with first-match-wins
//! semantics, so a keyword claimed by an earlier group is unreachable for every
//! later group. The ordering is part of the observable behavior and is pinned
//! by tests.

use serde::{Deserialize, Serialize};

/// Semantic role inferred from a node label, driving visual style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Database,
    Api,
    Error,
    Actor,
    Ui,
    Default,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Database => "database",
            Category::Api => "api",
            Category::Error => "error",
            Category::Actor => "actor",
            Category::Ui => "ui",
            Category::Default => "default",
        }
    }
}

const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Database,
        &["db", "database", "store", "storage", "sql", "oracle"],
    ),
    (
        Category::Api,
        &["api", "post", "get", "endpoint", "request"],
    ),
    (Category::Error, &["error", "failure", "401", "403", "500"]),
    (Category::Actor, &["user", "customer", "actor"]),
    (
        Category::Ui,
        &["dashboard", "ui", "screen", "dialog", "wizard", "mode"],
    ),
];

/// Maps a label to its semantic category. Total: unmatched labels are
/// [`Category::Default`].
pub fn classify(label: &str) -> Category {
    let lower = label.to_lowercase();
    for (category, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|k| lower.contains(k)) {
            return *category;
        }
    }
    Category::Default
}

/// Icon table. Broader than the category table; a label can pick up an icon
/// from a group that has no styling category of its own (queues, payments,
/// lifecycle verbs, ...).
const ICON_KEYWORDS: &[(&str, &[&str])] = &[
    ("👤", &["user", "actor", "client", "customer"]),
    ("🛢️", &["db", "data", "sql", "store", "oracle", "database"]),
    ("☁️", &["cloud", "aws", "azure", "gcp"]),
    ("🔌", &["api", "rest", "json", "endpoint", "service"]),
    ("🔒", &["lock", "auth", "login", "security", "token"]),
    ("📧", &["email", "message", "notification", "alert"]),
    ("⚠️", &["error", "fail", "404", "500", "exception"]),
    ("⚙️", &["settings", "config", "setup", "configuration"]),
    ("📄", &["file", "upload", "excel", "csv", "document"]),
    ("✅", &["check", "validate", "success", "ok", "verified"]),
    ("🖥️", &["web", "site", "dashboard", "ui", "interface"]),
    ("📱", &["mobile", "app", "phone", "ios", "android"]),
    ("🖥️", &["server", "host", "machine", "vm"]),
    ("🌐", &["network", "router", "switch", "gateway"]),
    ("📬", &["queue", "message", "broker", "kafka", "rabbit"]),
    ("⚡", &["cache", "redis", "memcached"]),
    ("🔍", &["search", "elastic", "lucene"]),
    ("💳", &["payment", "transaction", "money", "billing"]),
    ("📊", &["analytics", "report", "metrics", "stats"]),
    ("📈", &["monitor", "log", "trace", "debug"]),
    ("🚀", &["deploy", "ci", "cd", "pipeline", "build"]),
    ("🧪", &["test", "qa", "quality"]),
    ("▶️", &["start", "begin", "init"]),
    ("🏁", &["end", "finish", "complete", "done"]),
    ("⚖️", &["load", "balance", "distribute"]),
    ("🔄", &["sync", "replicate", "copy"]),
    ("🗑️", &["delete", "remove", "drop"]),
    ("➕", &["add", "create", "insert", "new"]),
    ("✏️", &["update", "modify", "edit", "change"]),
    ("📖", &["read", "get", "fetch", "retrieve"]),
    ("✍️", &["write", "post", "put", "save"]),
];

/// Prefixes the label with an icon glyph when a keyword group matches; the
/// original-case label is otherwise returned unchanged. Pure, so calling it
/// repeatedly during a parse is harmless.
pub fn decorate(label: &str) -> String {
    let lower = label.to_lowercase();
    for (icon, keywords) in ICON_KEYWORDS {
        if keywords.iter().any(|k| lower.contains(k)) {
            return format!("{icon} {label}");
        }
    }
    label.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_is_case_insensitive() {
        assert_eq!(classify("Oracle DB"), Category::Database);
        assert_eq!(classify("REST API"), Category::Api);
    }

    #[test]
    fn classify_unmatched_is_default() {
        assert_eq!(classify("Mapping Drawer"), Category::Default);
    }

    #[test]
    fn classify_first_match_wins_across_groups() {
        // "store" (database) beats "user" (actor) because the database group
        // is evaluated first.
        assert_eq!(classify("user store"), Category::Database);
        // "post" is claimed by the api group, so "POST /login" never reaches
        // the actor group even though login-ish labels exist elsewhere.
        assert_eq!(classify("POST /login"), Category::Api);
    }

    #[test]
    fn classify_matches_substrings() {
        // Substring membership is intentional: "mode" matches "Design Mode"
        // but also "model". Pinned so nobody "fixes" it to word boundaries.
        assert_eq!(classify("model registry"), Category::Ui);
    }

    #[test]
    fn decorate_prepends_icon_and_keeps_case() {
        assert_eq!(decorate("User Arrives"), "👤 User Arrives");
        assert_eq!(decorate("Oracle DB"), "🛢️ Oracle DB");
    }

    #[test]
    fn decorate_unmatched_is_identity() {
        assert_eq!(decorate("Mapping Drawer"), "Mapping Drawer");
    }

    #[test]
    fn decorate_is_pure() {
        let a = decorate("Generate JWT Token");
        let b = decorate("Generate JWT Token");
        assert_eq!(a, b);
    }

    #[test]
    fn decorate_first_match_wins() {
        // "user" (person group) is checked before "dashboard" (web group).
        assert_eq!(decorate("user dashboard"), "👤 user dashboard");
    }
}
