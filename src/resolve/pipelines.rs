//! Base directory resolution pipelines
//!
//! Both resolvers end by making the base directory the working directory.

use crate::config::MultiVolumeConfig;
use crate::error::BootError;
use crate::paths::PATH_EXE;
use crate::resolve::operations::volumes::{VolumeBase, probe_volumes};
use crate::resolve::operations::workdir::{enter_base_dir, ensure_scratch_dir};
use crate::resolve::pure::base_dir::base_dir_of;

use log::{info, warn};
use std::path::Path;

/// Base directory of the executable at `exe`.
///
/// There is no fallback: a platform that cannot report the executable path
/// cannot be launched from.
pub fn executable_base(exe: Option<&Path>) -> Result<String, BootError> {
    let exe = exe.ok_or_else(|| {
        BootError::PathResolution("the platform did not report the executable path".to_string())
    })?;
    Ok(base_dir_of(&exe.to_string_lossy()))
}

/// Resolve the base directory from the running executable and enter it.
pub fn resolve_executable_base() -> Result<String, BootError> {
    let base = executable_base(PATH_EXE.as_deref())?;
    if let Err(e) = enter_base_dir(Path::new(&base)) {
        warn!("Could not enter {}: {}", base, e);
    }
    info!("Base directory {}", base);
    Ok(base)
}

/// Resolve the base directory from the candidate volumes and enter it.
///
/// An unverified fallback directory is still adopted; failing to enter it or
/// to create the scratch directory is logged and left to later steps.
pub fn resolve_volume_base(cfg: &MultiVolumeConfig) -> Result<VolumeBase, BootError> {
    let base = probe_volumes(&cfg.volumes, &cfg.data_subpath)?;

    if let Err(e) = enter_base_dir(Path::new(&base.path)) {
        warn!("Could not enter {}: {}", base.path, e);
    }
    if let Err(e) = ensure_scratch_dir(&cfg.scratch_dir) {
        warn!("Could not create {}: {}", cfg.scratch_dir, e);
    }

    info!("Base directory {}", base.path);
    Ok(base)
}
