//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `dockgen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `SignalMatcher`: Read-only questions about a project directory
//!   - `Filesystem`: Artifact persistence
//!   - `RecipeRenderer`: Dockerfile text
//!   - `DescriptorRenderer`: docker-compose text
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{DescriptorRenderer, Filesystem, RecipeRenderer, SignalMatcher};

#[cfg(test)]
pub use output::MockFilesystem;
