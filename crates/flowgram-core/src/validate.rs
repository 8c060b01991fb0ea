//! Pre-parse syntactic checks.
//!
//! Purely observational: the validator never mutates anything and never fails
//! on a well-formed string. Errors block downstream generation; warnings are
//! advisory and never block.

/// Categorized diagnostics for one input document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl Diagnostics {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

const ARROW_TOKENS: [&str; 3] = ["→", "->", "=>"];
const MAX_HEADING_LEN: usize = 100;

/// Scans the raw text line by line and returns categorized diagnostics.
pub fn validate(text: &str) -> Diagnostics {
    let mut diag = Diagnostics::default();

    if text.trim().is_empty() {
        diag.errors
            .push("Diagram text is empty. Please enter some content.".to_string());
        return diag;
    }

    let mut has_cluster = false;
    let mut has_nodes = false;

    for (i, raw) in text.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('#') {
            has_cluster = true;
            if line.chars().count() > MAX_HEADING_LEN {
                diag.warnings.push(format!(
                    "Line {line_no}: Cluster title is very long ({} chars)",
                    line.chars().count()
                ));
            }
        }

        if ARROW_TOKENS.iter().any(|a| line.contains(a)) {
            has_nodes = true;
            let opens = line.matches('[').count();
            let closes = line.matches(']').count();
            if opens != closes {
                diag.errors
                    .push(format!("Line {line_no}: Unbalanced brackets in edge labels"));
            }
        }

        // Angle brackets can leak into HTML contexts downstream. This also
        // fires on the ASCII arrow spellings themselves; kept that way for
        // compatibility with the established diagnostics.
        if line.contains('<') || line.contains('>') {
            diag.warnings.push(format!(
                "Line {line_no}: Contains potentially problematic characters (< or >)"
            ));
        }
    }

    if !has_nodes && !has_cluster {
        diag.warnings.push(
            "No nodes or clusters detected. Make sure to use arrows (→, ->, =>) or cluster markers (#)"
                .to_string(),
        );
    }

    diag
}
