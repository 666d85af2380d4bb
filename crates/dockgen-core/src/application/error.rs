//! Application layer errors.
//!
//! These errors represent failures in I/O and rendering, not detection
//! rules. Rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The directory to scan is missing or is not a directory.
    #[error("Failed to access directory {}: {reason}", path.display())]
    AccessError { path: PathBuf, reason: String },

    /// Build recipe text could not be produced.
    #[error("Template rendering failed: {reason}")]
    TemplateError { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {}: {reason}", path.display())]
    FilesystemError { path: PathBuf, reason: String },

    /// A generated artifact would overwrite an existing file.
    #[error("{} already exists", path.display())]
    ArtifactExists { path: PathBuf },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::AccessError { path, .. } => vec![
                format!("Could not open: {}", path.display()),
                "Check that the path exists and is a directory".into(),
            ],
            Self::TemplateError { reason } => vec![
                format!("Rendering failed: {}", reason),
                "No files were written".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::ArtifactExists { path } => vec![
                format!("File already exists: {}", path.display()),
                "Use --force to overwrite".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AccessError { .. } => ErrorCategory::NotFound,
            Self::TemplateError { .. } | Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::ArtifactExists { .. } => ErrorCategory::Validation,
        }
    }
}
