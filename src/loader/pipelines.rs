//! Pipelines module (orchestration)

pub mod dependencies;
pub mod entry;

pub use dependencies::{DependencyLayout, load_dependencies};
pub use entry::{entry_from_loaded, resolve_entry};
