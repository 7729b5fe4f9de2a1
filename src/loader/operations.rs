//! Operations module (atomic side effects)

pub mod dynlib;

pub use dynlib::DynamicLoader;
