// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Dockgen.
//!
//! This module contains pure detection rules and the artifact model.
//! All filesystem access and text rendering are handled via ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Few external crates**: std, thiserror, serde and regex for text extraction
//! - **Immutable entities**: Classifications are built once and never mutated
//! - **Data-driven detection**: Kind behaviour lives in the profile registry
//!
pub mod entities;
pub mod error;
pub mod profiles;
pub mod value_objects;

pub use entities::{
    classification::ProjectClassification,
    compose::{
        Build, Deploy, FileObject, HealthCheck, Mapping, Network, OrchestrationDocument,
        Placement, ResourceSpec, Resources, Service, UpdateConfig, Volume,
    },
    recipe::RecipeParameters,
};

pub use error::{DomainError, ErrorCategory};

pub use profiles::{KIND_REGISTRY, KindProfile, VersionRule};

pub use value_objects::ProjectKind;
