//! Resolve module - base directory and library search path
//!
//! ## Module Structure
//! - `pure/`: Base directory derivation, search-path variable values
//! - `operations/`: Volume probing, working directory, environment
//! - `pipelines.rs`: Executable-based and volume-based resolution

mod operations;
mod pipelines;
mod pure;

// Re-export public API
pub use operations::{extend_env_search_path, relaunch_once};
pub use pipelines::{resolve_executable_base, resolve_volume_base};
pub use pure::search_var::Placement;
