//! Pipelines module (orchestration)

pub mod remote_share;
pub mod synthetic_argv;

pub use remote_share::prepare_remote_launch;
pub use synthetic_argv::build_synthetic_context;
