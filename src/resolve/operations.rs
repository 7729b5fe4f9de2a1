//! Operations module (atomic side effects)

pub mod env;
pub mod volumes;
pub mod workdir;

pub use env::{extend_env_search_path, relaunch_once};
