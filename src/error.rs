//! Launch failure taxonomy
//!
//! Every fatal condition of the bootstrap maps to one `BootError` variant. The
//! variant decides how the process ends: a normal exit with a failure status, or
//! a cold device restart for the remote-share mount failures.

use std::path::PathBuf;
use thiserror::Error;

/// Exit status used for every fatal launch error.
pub const EXIT_FAILURE: i32 = 1;

/// Exit status used once a cold reboot has been requested.
pub const EXIT_COLD_REBOOT: i32 = 75;

/// How a fatal error terminates the bootstrap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escalation {
    /// Report the diagnostic and exit with a failure status
    Exit,
    /// The failure points at a corrupted remote mount; only a device restart helps
    ColdReboot,
}

/// One failed attempt at loading a library
#[derive(Debug, Clone, PartialEq)]
pub struct LoadAttempt {
    pub path: String,
    pub reason: String,
}

#[derive(Debug, Error)]
pub enum BootError {
    #[error("Could not determine the base directory: {0}")]
    PathResolution(String),

    #[error("Could not load {name} ({path}): {reason}")]
    RequiredDependency {
        name: String,
        path: String,
        reason: String,
    },

    #[error("Failed to load the launcher:{}", format_attempts(.attempts))]
    TargetLoad { attempts: Vec<LoadAttempt> },

    #[error("'{symbol}' entry point not found in {library}: {reason}")]
    EntrySymbolMissing {
        symbol: String,
        library: String,
        reason: String,
    },

    #[error("Access to remote share '{path}' on host PC lost")]
    RemoteShareUnreachable { path: String },

    #[error("Could not determine host identity: {0}")]
    HostIdentity(String),

    #[error("Invalid config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn format_attempts(attempts: &[LoadAttempt]) -> String {
    attempts
        .iter()
        .map(|a| format!("\n  {}: {}", a.path, a.reason))
        .collect()
}

impl BootError {
    pub fn escalation(&self) -> Escalation {
        match self {
            BootError::RemoteShareUnreachable { .. } => Escalation::ColdReboot,
            _ => Escalation::Exit,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.escalation() {
            Escalation::Exit => EXIT_FAILURE,
            Escalation::ColdReboot => EXIT_COLD_REBOOT,
        }
    }
}
