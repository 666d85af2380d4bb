//! Unified error handling for Dockgen Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Dockgen Core operations.
///
/// This enum wraps all possible errors that can occur when using dockgen-core,
/// providing a unified interface for error handling.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DockgenError {
    /// Errors from the domain layer (detection and model violations).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (I/O and rendering failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl DockgenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Unsupported => ErrorCategory::Unsupported,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Unsupported,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type DockgenResult<T> = Result<T, DockgenError>;
