//! Launch context type definitions

use bitflags::bitflags;

/// Launch id a relaunching instance stamps on its launch record
pub const VALVE_LAUNCH_ID: u32 = 0x5641_4C56;

/// Launch id of a demo-disc blob; recognized and ignored
pub const LAUNCH_DATA_DEMO_ID: u32 = 0x4445_4D4F;

/// Event kind carrying a launcher (LiveArea) parameter
pub const LIVEAREA_EVENT_KIND: u32 = 0x05;

/// How this process came to be started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// First start, command line from the system
    ColdBoot,
    /// Relaunched by a previous instance through the launch record
    InternalRestart,
    /// Restarted with an explicit argument vector
    ExternalRelaunch,
    /// Argument vector built from the pending launch event
    SyntheticFromEvent,
}

/// The argument vector handed to the target entry point
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchContext {
    pub argv: Vec<String>,
    pub source_kind: SourceKind,
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct LaunchFlags: u32 {
        /// A debugger is driving the relaunch; wait for it to attach
        const IS_DEBUGGING = 0x0000_0001;
        /// The previous instance left a game
        const EXIT_FROM_GAME = 0x0000_0002;
        /// The previous instance asked for its game to be restarted
        const GAME_RESTART = 0x0000_0004;
        /// Restarting to accept an invite
        const INVITE_RESTART = 0x0000_0008;
    }
}

/// Launch data preserved across a self-triggered relaunch
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub launch_id: u32,
    pub flags: LaunchFlags,
    /// NUL-terminated command line followed by data owned by the application
    pub payload: Vec<u8>,
}

/// A pending foreground launch event
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchEvent {
    pub kind: u32,
    pub param: String,
}

/// Where the game runs from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    /// Local media only
    LocalOnly,
    /// Local media, falling through to the remote share
    LocalWithRemoteFallback,
    /// Remote share only
    RemoteOnly,
}

/// Exclusions read from the user's manifest on the remote share
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExcludePolicy {
    pub exclude_all: bool,
    /// The local library directory is excluded
    pub exclude_specific_path: bool,
}

impl ExcludePolicy {
    pub fn excludes_local(&self) -> bool {
        self.exclude_all || self.exclude_specific_path
    }
}

/// Base path, library search order and whether the remote path is forwarded
#[derive(Debug, Clone, PartialEq)]
pub struct StoragePlan {
    pub base_path: String,
    pub search_paths: Vec<String>,
    /// Remote path appended as `-remote <path>` for file-level fallback
    pub append_remote: Option<String>,
}
