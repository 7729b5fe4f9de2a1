//! Launch module - launch context construction
//!
//! This module provides:
//! - Command-line token matching and rewriting
//! - Synthetic argument vectors built from a pending launch event
//! - Storage planning and command-line rewrite for remote-share launches
//!
//! ## Module Structure
//! - `types.rs`: Launch records, flags and storage plans
//! - `pure/`: Pure functions (cmdline, exclude, storage, synthetic, target)
//! - `operations/`: Atomic side effects (console services, launch events, share probing)
//! - `pipelines/`: High-level orchestration (synthetic_argv, remote_share)

mod operations;
mod pipelines;
pub mod pure;
mod types;

// Re-export public API
pub use operations::{EnvLaunchEvents, HostConsole};
pub use pipelines::{build_synthetic_context, prepare_remote_launch};
