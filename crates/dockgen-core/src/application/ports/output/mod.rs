//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `dockgen-adapters` crate provides implementations.

use crate::domain::{OrchestrationDocument, RecipeParameters};
use crate::error::DockgenResult;
use std::path::Path;

/// Port answering read-only questions about one project directory.
///
/// Implemented by:
/// - `dockgen_adapters::signals::LocalSignals` (production)
/// - `dockgen_adapters::signals::MemorySignals` (testing)
///
/// ## Design Notes
///
/// - All names are relative to [`SignalMatcher::root`] and `/`-separated
/// - An I/O failure on a single candidate answers "no match", never an error
/// - `is_file` and `is_dir` are distinct: a directory named `go.mod` is not a manifest
pub trait SignalMatcher {
    /// Absolute path of the scanned directory.
    fn root(&self) -> &Path;

    /// `relative` exists and is a regular file.
    fn is_file(&self, relative: &str) -> bool;

    /// `relative` exists and is a directory.
    fn is_dir(&self, relative: &str) -> bool;

    /// Any top-level entry matches a single-level wildcard such as `*.go`.
    fn glob_matches(&self, pattern: &str) -> bool;

    /// Content of a file, or `None` if missing or unreadable. Invalid UTF-8
    /// sequences are replaced rather than rejected.
    fn read_file(&self, relative: &str) -> Option<String>;

    /// The file exists and its content contains `needle`.
    fn file_contains(&self, relative: &str, needle: &str) -> bool {
        self.read_file(relative)
            .is_some_and(|content| content.contains(needle))
    }

    /// First file in the subtree with the given extension whose content
    /// contains any of `needles`, as a `/`-separated relative path.
    ///
    /// The walk never enters the dependency and VCS directories listed in
    /// [`EXCLUDED_DIRS`](crate::domain::profiles::EXCLUDED_DIRS): `.git`,
    /// `node_modules`, `vendor`, `venv`, `.venv` and `__pycache__`.
    /// Traversal order must be deterministic for a fixed directory state.
    fn find_in_tree(&self, extension: &str, needles: &[&str]) -> Option<String>;
}

/// Port for persisting generated artifacts.
///
/// Implemented by:
/// - `dockgen_adapters::filesystem::LocalFilesystem` (production)
/// - `dockgen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> DockgenResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> DockgenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for build recipe (Dockerfile) rendering.
///
/// Implemented by:
/// - `dockgen_adapters::renderer::DockerfileRenderer`
pub trait RecipeRenderer: Send + Sync {
    /// Render the recipe for `params.kind`.
    ///
    /// Fails for kinds without a recipe and on rendering failure; never
    /// returns partial output.
    fn render(&self, params: &RecipeParameters) -> DockgenResult<String>;
}

/// Port for orchestration descriptor (docker-compose) rendering.
///
/// Implemented by:
/// - `dockgen_adapters::renderer::ComposeRenderer`
pub trait DescriptorRenderer: Send + Sync {
    /// Serialize a document. Total: every document has a rendering.
    fn render(&self, document: &OrchestrationDocument) -> String;
}
