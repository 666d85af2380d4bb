// ============================================================================
// domain/error.rs - DETECTION AND MODEL ERRORS
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (can be carried inside results that get cached or compared)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("Unable to determine project type in {}", path.display())]
    NotDetected { path: PathBuf },

    // ========================================================================
    // Unsupported Errors
    // ========================================================================
    #[error("Unsupported project type: {kind}")]
    UnsupportedKind { kind: String },

    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotDetected { path } => vec![
                format!("No Go, Node.js or Python signals found in {}", path.display()),
                "Go projects are detected by go.mod, go.sum or *.go files".into(),
                "Node.js projects are detected by package.json, node_modules or *.js files".into(),
                "Python projects are detected by requirements.txt, setup.py, Pipfile, *.py or a venv".into(),
            ],
            Self::UnsupportedKind { kind } => vec![
                format!("Dockerfile generation is not available for {} projects yet", kind),
                "Currently supported: go".into(),
            ],
            Self::InvalidParameters(msg) => vec![
                format!("Details: {}", msg),
                "A docker-compose file needs a project name and a port".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotDetected { .. } => ErrorCategory::NotFound,
            Self::UnsupportedKind { .. } => ErrorCategory::Unsupported,
            Self::InvalidParameters(_) => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Unsupported,
    NotFound,
}
