//! Pure functions for launch module
//!
//! These functions have no side effects and are deterministic.

pub mod cmdline;
pub mod exclude;
pub mod storage;
pub mod synthetic;
pub mod target;
