//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "classify a directory" or "generate artifacts".

pub mod classifier;
pub mod generate_service;

pub use classifier::ProjectClassifier;
pub use generate_service::{GenerateOptions, GenerateService, GeneratedArtifacts};
