//! Domain value objects: ProjectKind.
//!
//! # Design
//!
//! These are plain `Copy` value types without identity.
//! They hold NO detection logic. All signals, entrypoint conventions and
//! version rules live in `profiles.rs`. This file's only job is to define
//! the types and their string representations.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str`, `display_name`, `family` and `source_extension` arms here
//! 3. Add a `KindProfile` entry in `profiles.rs`
//! 4. The classification cascade picks it up

use serde::Serialize;
use std::fmt;

// ── ProjectKind ──────────────────────────────────────────────────────────────

/// The technology stack a scanned directory was classified as.
///
/// The closed set mirrors the three stack families the classifier knows:
/// native-compiled (Go), node-runtime (Node.js) and interpreted-script
/// (Python).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    /// Native-compiled.
    Go,
    /// Node runtime.
    NodeJs,
    /// Interpreted script.
    Python,
}

impl ProjectKind {
    pub const ALL: [ProjectKind; 3] = [Self::Go, Self::NodeJs, Self::Python];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::NodeJs => "nodejs",
            Self::Python => "python",
        }
    }

    /// Human-facing name used in CLI messages.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Go => "Go",
            Self::NodeJs => "Node.js",
            Self::Python => "Python",
        }
    }

    /// The stack family this kind belongs to.
    pub const fn family(&self) -> &'static str {
        match self {
            Self::Go => "native-compiled",
            Self::NodeJs => "node-runtime",
            Self::Python => "interpreted-script",
        }
    }

    /// Source file extension, without the leading dot.
    pub const fn source_extension(&self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::NodeJs => "js",
            Self::Python => "py",
        }
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_as_str() {
        for kind in ProjectKind::ALL {
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn families() {
        assert_eq!(ProjectKind::Go.family(), "native-compiled");
        assert_eq!(ProjectKind::NodeJs.family(), "node-runtime");
        assert_eq!(ProjectKind::Python.family(), "interpreted-script");
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ProjectKind::NodeJs).unwrap(),
            "\"nodejs\""
        );
    }

    #[test]
    fn source_extensions() {
        assert_eq!(ProjectKind::Go.source_extension(), "go");
        assert_eq!(ProjectKind::NodeJs.source_extension(), "js");
        assert_eq!(ProjectKind::Python.source_extension(), "py");
    }
}
