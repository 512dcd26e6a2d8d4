//! Hook metadata parsing
//!
//! Hook scripts declare what they do and when they run in a leading
//! comment block:
//!
//! ```text
//! #!/bin/sh
//! # description: Keep submodules in sync after moving between branches
//! # targets: ["post-checkout", "post-merge"]
//! ```
//!
//! Parsing is a pure function of the script content and never fails:
//! absent fields fall back to empty defaults and a malformed target list
//! degrades to an empty target set, so a broken header can narrow a hook's
//! wiring but never block discovery or the dispatcher.

use serde::{Deserialize, Serialize};

/// Declarative metadata extracted from a hook script's header comments
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Free-text description of what the hook does (empty when undeclared)
    #[serde(default)]
    pub description: String,

    /// Event names the hook should be wired to, in declaration order
    ///
    /// Empty when undeclared, in which case the hook is installable but
    /// gets no automatic trigger wiring.
    #[serde(default)]
    pub targets: Vec<String>,
}

impl Metadata {
    /// Parse metadata from script content
    ///
    /// Only the leading comment block is inspected: an optional shebang
    /// line is skipped, then every `#` comment line up to the first
    /// non-comment line. A script without a metadata block is valid and
    /// yields empty metadata.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut metadata = Self::default();

        let mut lines = content.lines().peekable();
        if lines.peek().is_some_and(|line| line.starts_with("#!")) {
            lines.next();
        }

        for line in lines {
            let Some(comment) = line.trim_start().strip_prefix('#') else {
                break;
            };
            let comment = comment.trim_start();

            if let Some(value) = comment.strip_prefix("description:") {
                metadata.description = value.trim().to_string();
            } else if let Some(value) = comment.strip_prefix("targets:") {
                metadata.targets = parse_targets(value.trim());
            }
        }

        metadata
    }

    /// Whether the script declares any trigger events
    #[must_use]
    pub fn has_targets(&self) -> bool {
        !self.targets.is_empty()
    }
}

/// Parse a `targets:` value, e.g. `["post-checkout", "post-merge"]`
fn parse_targets(value: &str) -> Vec<String> {
    match serde_json::from_str::<Vec<String>>(value) {
        Ok(targets) => targets,
        Err(e) => {
            tracing::warn!("Ignoring malformed targets list {value:?}: {e}");
            Vec::new()
        }
    }
}
