use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::value_objects::ProjectKind;

/// The structured description of a scanned project.
///
/// Produced once by the classifier and immutable afterwards, except for a
/// single explicit port override through [`ProjectClassification::with_port`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectClassification {
    kind: ProjectKind,
    entrypoint: String,
    port: u16,
    root_dir: PathBuf,
    runtime_version: String,
}

impl ProjectClassification {
    pub fn new(
        kind: ProjectKind,
        entrypoint: impl Into<String>,
        port: u16,
        root_dir: impl Into<PathBuf>,
        runtime_version: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            entrypoint: entrypoint.into(),
            port,
            root_dir: root_dir.into(),
            runtime_version: runtime_version.into(),
        }
    }

    pub fn kind(&self) -> ProjectKind {
        self.kind
    }

    /// Relative path of the main source file; empty when undetermined.
    pub fn entrypoint(&self) -> &str {
        &self.entrypoint
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Empty for kinds without version detection.
    pub fn runtime_version(&self) -> &str {
        &self.runtime_version
    }

    /// Replace the detected port with a caller-supplied one.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Compose project name: lower-cased root basename, with spaces and
    /// underscores turned into hyphens.
    pub fn project_name(&self) -> String {
        self.root_dir
            .file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default()
            .replace([' ', '_'], "-")
    }
}
