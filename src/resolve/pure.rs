//! Pure functions for resolve module
//!
//! These functions have no side effects and are deterministic.

pub mod base_dir;
pub mod search_var;
