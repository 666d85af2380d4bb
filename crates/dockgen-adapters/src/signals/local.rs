//! Signal matcher over a real directory.

use std::fs;
use std::path::{Path, PathBuf};

use dockgen_core::{
    application::{ApplicationError, ports::SignalMatcher},
    domain::profiles::EXCLUDED_DIRS,
    error::DockgenResult,
};
use glob::Pattern;
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

/// Read-only view of one project directory on disk.
#[derive(Debug, Clone)]
pub struct LocalSignals {
    root: PathBuf,
}

impl LocalSignals {
    /// Open `path` for classification.
    ///
    /// Fails with `AccessError` if the path is missing or not a directory.
    /// The stored root is canonical.
    pub fn open(path: impl AsRef<Path>) -> DockgenResult<Self> {
        let path = path.as_ref();
        let root = fs::canonicalize(path).map_err(|e| ApplicationError::AccessError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        if !root.is_dir() {
            return Err(ApplicationError::AccessError {
                path: path.to_path_buf(),
                reason: "not a directory".into(),
            }
            .into());
        }

        debug!(root = %root.display(), "Opened project directory");
        Ok(Self { root })
    }
}

fn is_excluded(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| EXCLUDED_DIRS.contains(&name))
}

impl SignalMatcher for LocalSignals {
    fn root(&self) -> &Path {
        &self.root
    }

    fn is_file(&self, relative: &str) -> bool {
        self.root.join(relative).is_file()
    }

    fn is_dir(&self, relative: &str) -> bool {
        self.root.join(relative).is_dir()
    }

    fn glob_matches(&self, pattern: &str) -> bool {
        let Ok(pattern) = Pattern::new(pattern) else {
            return false;
        };
        let Ok(entries) = fs::read_dir(&self.root) else {
            return false;
        };

        entries.flatten().any(|entry| {
            entry.file_type().is_ok_and(|t| t.is_file())
                && entry.file_name().to_str().is_some_and(|n| pattern.matches(n))
        })
    }

    fn read_file(&self, relative: &str) -> Option<String> {
        read_lossy(&self.root.join(relative))
    }

    fn find_in_tree(&self, extension: &str, needles: &[&str]) -> Option<String> {
        WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_excluded(e))
            .flatten()
            .filter(|e| e.file_type().is_file())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == extension))
            .find(|e| {
                trace!(path = %e.path().display(), "Scanning");
                read_lossy(e.path()).is_some_and(|c| needles.iter().any(|n| c.contains(n)))
            })
            .and_then(|e| {
                let relative = e.path().strip_prefix(&self.root).ok()?;
                let parts: Vec<_> = relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect();
                Some(parts.join("/"))
            })
    }
}

/// File content with invalid UTF-8 sequences replaced.
fn read_lossy(path: &Path) -> Option<String> {
    fs::read(path)
        .ok()
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn tree(files: &[(&str, &str)]) -> TempDir {
        let tmp = tempfile::tempdir().unwrap();
        for (name, content) in files {
            let path = tmp.path().join(name);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        tmp
    }

    #[test]
    fn open_rejects_missing_path() {
        let tmp = tempfile::tempdir().unwrap();
        let err = LocalSignals::open(tmp.path().join("nope")).unwrap_err();
        assert!(err.to_string().contains("nope"), "{err}");
    }

    #[test]
    fn open_rejects_file() {
        let tmp = tree(&[("go.mod", "module m\n")]);
        assert!(LocalSignals::open(tmp.path().join("go.mod")).is_err());
    }

    #[test]
    fn open_canonicalizes_root() {
        let tmp = tree(&[("sub/keep", "")]);
        let signals = LocalSignals::open(tmp.path().join("sub/../sub")).unwrap();
        assert!(signals.root().is_absolute());
        assert_eq!(signals.root().file_name().unwrap(), "sub");
    }

    #[test]
    fn file_and_dir_are_distinct() {
        let tmp = tree(&[("go.mod/placeholder", ""), ("package.json", "{}")]);
        let signals = LocalSignals::open(tmp.path()).unwrap();

        assert!(signals.is_dir("go.mod"));
        assert!(!signals.is_file("go.mod"));
        assert!(signals.is_file("package.json"));
        assert!(!signals.is_dir("package.json"));
    }

    #[test]
    fn glob_is_single_level() {
        let tmp = tree(&[("pkg/util.go", "package pkg\n")]);
        let signals = LocalSignals::open(tmp.path()).unwrap();
        assert!(!signals.glob_matches("*.go"));

        fs::write(tmp.path().join("main.go"), "package main\n").unwrap();
        assert!(signals.glob_matches("*.go"));
    }

    #[test]
    fn contains_and_read() {
        let tmp = tree(&[(".env", "PORT=8080\n")]);
        let signals = LocalSignals::open(tmp.path()).unwrap();

        assert!(signals.file_contains(".env", "PORT"));
        assert!(!signals.file_contains(".env", "HOST"));
        assert!(!signals.file_contains(".env.local", "PORT"));
        assert_eq!(signals.read_file(".env").as_deref(), Some("PORT=8080\n"));
    }

    #[test]
    fn tree_search_is_lexical_and_skips_vendor_dirs() {
        let tmp = tree(&[
            ("vendor/dep/main.go", "func main() {}"),
            ("b/main.go", "func main() {}"),
            ("a/z/run.go", "func main() {}"),
            ("a.go", "func main() {}"),
        ]);
        let signals = LocalSignals::open(tmp.path()).unwrap();

        assert_eq!(
            signals.find_in_tree("go", &["func main()"]).as_deref(),
            Some("a/z/run.go")
        );
        assert_eq!(signals.find_in_tree("py", &["__main__"]), None);
    }

    #[test]
    fn tree_search_tolerates_invalid_utf8() {
        let tmp = tree(&[("go.mod", "module m\n")]);
        fs::create_dir_all(tmp.path().join("internal")).unwrap();
        fs::write(
            tmp.path().join("internal/entry.go"),
            b"package main\n// caf\xe9\nfunc main() {}\n",
        )
        .unwrap();
        let signals = LocalSignals::open(tmp.path()).unwrap();

        assert_eq!(
            signals.find_in_tree("go", &["func main()"]).as_deref(),
            Some("internal/entry.go")
        );
        assert!(signals.file_contains("internal/entry.go", "caf"));
    }
}
