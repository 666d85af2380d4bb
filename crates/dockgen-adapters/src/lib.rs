//! Infrastructure adapters for Dockgen.
//!
//! This crate implements the ports defined in `dockgen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod renderer;
pub mod signals;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::{ComposeRenderer, DockerfileRenderer};
pub use signals::{LocalSignals, MemorySignals};
