//! Pure functions for loader module
//!
//! These functions have no side effects and are deterministic.

pub mod naming;
