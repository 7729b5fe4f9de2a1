//! Operations module (atomic side effects)

pub mod console;
pub mod launch_event;
pub mod share;

pub use console::HostConsole;
pub use launch_event::EnvLaunchEvents;
