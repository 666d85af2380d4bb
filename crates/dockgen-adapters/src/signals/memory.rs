//! In-memory signal matcher for testing.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use dockgen_core::{application::ports::SignalMatcher, domain::profiles::EXCLUDED_DIRS};
use glob::Pattern;

/// A project tree held in memory. Paths are `/`-separated and relative.
#[derive(Debug, Clone, Default)]
pub struct MemorySignals {
    root: PathBuf,
    files: BTreeMap<String, String>,
    dirs: BTreeSet<String>,
}

impl MemorySignals {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Add a file, creating every parent directory.
    pub fn file(mut self, path: &str, content: &str) -> Self {
        if let Some((parent, _)) = path.rsplit_once('/') {
            self = self.dir(parent);
        }
        self.files.insert(path.to_string(), content.to_string());
        self
    }

    /// Add a directory and its parents.
    pub fn dir(mut self, path: &str) -> Self {
        let mut current = String::new();
        for part in path.split('/').filter(|p| !p.is_empty()) {
            if !current.is_empty() {
                current.push('/');
            }
            current.push_str(part);
            self.dirs.insert(current.clone());
        }
        self
    }
}

impl SignalMatcher for MemorySignals {
    fn root(&self) -> &Path {
        &self.root
    }

    fn is_file(&self, relative: &str) -> bool {
        self.files.contains_key(relative)
    }

    fn is_dir(&self, relative: &str) -> bool {
        self.dirs.contains(relative)
    }

    fn glob_matches(&self, pattern: &str) -> bool {
        let Ok(pattern) = Pattern::new(pattern) else {
            return false;
        };
        self.files
            .keys()
            .any(|name| !name.contains('/') && pattern.matches(name))
    }

    fn read_file(&self, relative: &str) -> Option<String> {
        self.files.get(relative).cloned()
    }

    /// Same visiting order as a directory walk sorted by file name.
    fn find_in_tree(&self, extension: &str, needles: &[&str]) -> Option<String> {
        let suffix = format!(".{extension}");
        let mut candidates: Vec<(Vec<&str>, &str)> = Vec::new();
        for (name, content) in &self.files {
            if !name.ends_with(&suffix) {
                continue;
            }
            let parts: Vec<&str> = name.split('/').collect();
            if parts[..parts.len() - 1]
                .iter()
                .any(|dir| EXCLUDED_DIRS.contains(dir))
            {
                continue;
            }
            candidates.push((parts, content.as_str()));
        }
        candidates.sort();

        candidates
            .into_iter()
            .find(|(_, content)| needles.iter().any(|n| content.contains(n)))
            .map(|(parts, _)| parts.join("/"))
    }
}
