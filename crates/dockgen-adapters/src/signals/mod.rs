//! Signal matcher adapters.

mod local;
mod memory;

pub use local::LocalSignals;
pub use memory::MemorySignals;
