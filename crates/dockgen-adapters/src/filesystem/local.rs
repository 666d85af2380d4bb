//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use dockgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{DockgenError, DockgenResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> DockgenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> DockgenResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> DockgenError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_into_created_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested/out");
        let fs = LocalFilesystem::new();

        fs.create_dir_all(&dir).unwrap();
        fs.write_file(&dir.join("Dockerfile"), "FROM scratch\n").unwrap();

        assert!(fs.exists(&dir.join("Dockerfile")));
        assert_eq!(
            std::fs::read_to_string(dir.join("Dockerfile")).unwrap(),
            "FROM scratch\n"
        );
    }

    #[test]
    fn write_into_missing_directory_reports_path() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("missing/Dockerfile");

        let err = LocalFilesystem::new().write_file(&target, "x").unwrap_err();
        match err {
            DockgenError::Application(ApplicationError::FilesystemError { path, reason }) => {
                assert_eq!(path, target);
                assert!(reason.starts_with("Failed to write file"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
