//! Artifact renderers.

mod compose;
mod dockerfile;

pub use compose::{ComposeRenderer, quote};
pub use dockerfile::DockerfileRenderer;
