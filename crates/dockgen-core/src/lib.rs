//! Dockgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Dockgen
//! container scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           dockgen-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ProjectClassifier, GenerateService)   │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Driven: Signals, Filesystem, Render)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    dockgen-adapters (Infrastructure)    │
//! │ (LocalSignals, ComposeRenderer, etc)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ProjectKind, Classification, Compose)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dockgen_core::application::{GenerateOptions, GenerateService, ProjectClassifier};
//!
//! // 1. Classify a directory through any `SignalMatcher` adapter
//! let classification = ProjectClassifier::new().classify(&signals)?;
//!
//! // 2. Render artifacts with injected renderers
//! let service = GenerateService::new(recipe_renderer, descriptor_renderer, filesystem);
//! let artifacts = service.generate(&classification, &GenerateOptions::default())?;
//! service.write(&artifacts, classification.root_dir(), false)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateOptions, GenerateService, GeneratedArtifacts, ProjectClassifier,
        ports::{DescriptorRenderer, Filesystem, RecipeRenderer, SignalMatcher},
    };
    pub use crate::domain::{
        OrchestrationDocument, ProjectClassification, ProjectKind, RecipeParameters, Service,
    };
    pub use crate::error::{DockgenError, DockgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
