//! Application layer for Dockgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ProjectClassifier, GenerateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer. Detection rules and
//! the artifact model live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{GenerateOptions, GenerateService, GeneratedArtifacts, ProjectClassifier};

// Re-export port traits (for adapter implementation)
pub use ports::{DescriptorRenderer, Filesystem, RecipeRenderer, SignalMatcher};

pub use error::ApplicationError;
