//! Kind profile registry.
//!
//! # Design Rationale
//!
//! Each project kind is described exactly once by its [`KindProfile`]: the
//! files and directories that signal it, its source extension, where its
//! entrypoint conventionally lives and how its runtime version is read.
//! The classification cascade walks [`KIND_REGISTRY`] in declaration order
//! and the first profile whose signals match wins.
//!
//! # Adding a New Kind
//!
//! 1. Add a variant to `ProjectKind` in `value_objects.rs`
//! 2. Add one [`KindProfile`] entry to [`KIND_REGISTRY`] at the right priority
//! 3. No other files change
//!
//! The text extractors at the bottom of this module are pure functions over
//! file content; reading the files is the job of a `SignalMatcher` adapter.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::value_objects::ProjectKind;

/// Placeholder in entrypoint candidates replaced by the scanned directory's basename.
pub const ROOT_PLACEHOLDER: &str = "{root}";

/// Port used when no environment file declares one.
pub const DEFAULT_PORT: u16 = 3000;

/// Go toolchain version used when `go.mod` is absent or has no `go` directive.
pub const DEFAULT_GO_VERSION: &str = "1.22";

/// Environment-definition files searched for a port, in priority order.
pub const ENV_FILES: &[&str] = &[".env", ".env.development", ".env.local"];

/// Directories never descended into by tree searches.
pub const EXCLUDED_DIRS: &[&str] = &[".git", "node_modules", "vendor", "venv", ".venv", "__pycache__"];

/// How a kind's runtime version is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionRule {
    /// Parse a `<tool> <major>.<minor>[.<patch>]` directive from a manifest.
    ManifestDirective {
        manifest: &'static str,
        default: &'static str,
    },
    /// Version detection not implemented for this kind; always empty.
    Unimplemented,
}

/// Everything the classifier needs to know about one project kind.
#[derive(Debug, Clone, Copy)]
pub struct KindProfile {
    pub kind: ProjectKind,

    /// Any of these files present at the root selects the kind.
    pub signal_files: &'static [&'static str],

    /// Any of these directories present at the root selects the kind.
    pub signal_dirs: &'static [&'static str],

    /// Manifest carrying a `"main": "<path>"` field tried before the candidates.
    pub main_field_manifest: Option<&'static str>,

    /// Conventional entrypoint locations, tried in order.
    pub entrypoint_candidates: &'static [&'static str],

    /// Content markers identifying a main source file for the tree fallback.
    pub main_markers: &'static [&'static str],

    pub version: VersionRule,
}

impl KindProfile {
    /// Extension (no dot) of the kind's source files.
    pub fn source_extension(&self) -> &'static str {
        self.kind.source_extension()
    }

    /// Glob pattern matching top-level source files, e.g. `*.go`. A match
    /// also selects the kind.
    pub fn source_glob(&self) -> String {
        format!("*.{}", self.source_extension())
    }

    /// Entrypoint candidates with the root placeholder expanded.
    pub fn candidates_for(&self, root_name: &str) -> Vec<String> {
        self.entrypoint_candidates
            .iter()
            .map(|c| c.replace(ROOT_PLACEHOLDER, root_name))
            .collect()
    }
}

/// Classification cascade, highest priority first.
pub static KIND_REGISTRY: &[KindProfile] = &[
    KindProfile {
        kind: ProjectKind::Go,
        signal_files: &["go.mod", "go.sum"],
        signal_dirs: &[],
        main_field_manifest: None,
        entrypoint_candidates: &["main.go", "cmd/main.go", "cmd/{root}/main.go"],
        main_markers: &["func main()"],
        version: VersionRule::ManifestDirective {
            manifest: "go.mod",
            default: DEFAULT_GO_VERSION,
        },
    },
    KindProfile {
        kind: ProjectKind::NodeJs,
        signal_files: &["package.json"],
        signal_dirs: &["node_modules"],
        main_field_manifest: Some("package.json"),
        entrypoint_candidates: &["index.js", "server.js", "app.js", "main.js", "src/index.js"],
        main_markers: &[],
        version: VersionRule::Unimplemented,
    },
    KindProfile {
        kind: ProjectKind::Python,
        signal_files: &["requirements.txt", "setup.py", "Pipfile"],
        signal_dirs: &["venv", ".venv"],
        main_field_manifest: None,
        entrypoint_candidates: &["app.py", "main.py", "run.py", "{root}.py"],
        main_markers: &[
            r#"if __name__ == "__main__""#,
            r#"if __name__ == '__main__'"#,
        ],
        version: VersionRule::Unimplemented,
    },
];

// ── Text extractors ──────────────────────────────────────────────────────────

static GO_DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*go\s+(\d+)\.(\d+)").expect("valid regex"));

static MAIN_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""main"\s*:\s*"([^"]+)""#).expect("valid regex"));

static PORT_ASSIGNMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bPORT\s*=\s*(\d+)").expect("valid regex"));

/// Parse the `go <major>.<minor>` directive, keeping `major.minor`.
///
/// Patch components, pre-release suffixes and trailing comments are ignored.
pub fn parse_go_directive(manifest: &str) -> Option<String> {
    let caps = GO_DIRECTIVE.captures(manifest)?;
    Some(format!("{}.{}", caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

/// Extract the `"main"` field of a package manifest without a full JSON parse.
pub fn extract_main_field(manifest: &str) -> Option<String> {
    MAIN_FIELD
        .captures(manifest)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// First `PORT=<n>` assignment whose value fits a port number.
pub fn parse_port_assignment(content: &str) -> Option<u16> {
    PORT_ASSIGNMENT
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .find_map(|m| m.as_str().parse::<u16>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_priority_is_go_node_python() {
        let order: Vec<_> = KIND_REGISTRY.iter().map(|p| p.kind).collect();
        assert_eq!(
            order,
            vec![ProjectKind::Go, ProjectKind::NodeJs, ProjectKind::Python]
        );
    }

    #[test]
    fn every_kind_has_exactly_one_profile() {
        for kind in ProjectKind::ALL {
            assert_eq!(KIND_REGISTRY.iter().filter(|p| p.kind == kind).count(), 1);
        }
    }


    #[test]
    fn candidates_expand_root_placeholder() {
        let go = &KIND_REGISTRY[0];
        assert_eq!(
            go.candidates_for("myapp"),
            vec!["main.go", "cmd/main.go", "cmd/myapp/main.go"]
        );
        assert_eq!(go.source_glob(), "*.go");
    }

    #[test]
    fn go_directive_drops_patch() {
        let manifest = "module example.com/app\n\ngo 1.21.0\n\nrequire foo v1.0.0\n";
        assert_eq!(parse_go_directive(manifest).as_deref(), Some("1.21"));
    }

    #[test]
    fn go_directive_major_minor() {
        assert_eq!(
            parse_go_directive("module x\ngo 1.18\n").as_deref(),
            Some("1.18")
        );
    }

    #[test]
    fn go_directive_with_trailing_comment() {
        assert_eq!(
            parse_go_directive("module m\n\ngo 1.21 // minimum\n").as_deref(),
            Some("1.21")
        );
    }

    #[test]
    fn go_directive_with_prerelease_suffix() {
        assert_eq!(
            parse_go_directive("module m\n\ngo 1.21rc1\n").as_deref(),
            Some("1.21")
        );
    }

    #[test]
    fn go_directive_ignores_toolchain_and_module_lines() {
        assert_eq!(parse_go_directive("module example.com/go\n"), None);
        assert_eq!(
            parse_go_directive("module x\ntoolchain go1.22.3\n"),
            None
        );
    }

    #[test]
    fn main_field_extraction() {
        let manifest = r#"{
  "name": "api",
  "main" : "lib/server.js",
  "scripts": { "start": "node lib/server.js" }
}"#;
        assert_eq!(extract_main_field(manifest).as_deref(), Some("lib/server.js"));
        assert_eq!(extract_main_field(r#"{"name": "x"}"#), None);
    }

    #[test]
    fn port_assignment_first_valid_wins() {
        assert_eq!(parse_port_assignment("PORT=5678\n"), Some(5678));
        assert_eq!(parse_port_assignment("HOST=0.0.0.0\nPORT = 8080\n"), Some(8080));
    }

    #[test]
    fn port_assignment_requires_whole_word() {
        assert_eq!(parse_port_assignment("DB_PORT=5432\n"), None);
        assert_eq!(parse_port_assignment("DB_PORT=5432\nPORT=9000\n"), Some(9000));
    }

    #[test]
    fn port_assignment_skips_out_of_range_values() {
        assert_eq!(parse_port_assignment("PORT=999999999999\n"), None);
        assert_eq!(parse_port_assignment("PORT=70000\nPORT=4000\n"), Some(4000));
    }
}
