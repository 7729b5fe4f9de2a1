pub mod operations;
pub mod types;

// Re-export types
pub use types::{
    BootstrapConfig, LibraryNaming, MultiVolumeConfig, PlatformProfile, RemoteShareConfig,
};

// Re-export operations
pub use operations::load_cfg;
