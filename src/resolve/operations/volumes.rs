use crate::error::BootError;

use log::{debug, warn};
use std::fs;

/// Base directory picked from the candidate volumes
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeBase {
    pub path: String,
    /// False when no candidate could be opened and the last one was adopted anyway
    pub verified: bool,
}

/// Probe `<volume>:<data_subpath>` for each volume in priority order.
///
/// The first directory that can be opened wins. When none can, the last
/// candidate is returned unverified and later steps fail on their own.
pub fn probe_volumes(volumes: &[String], data_subpath: &str) -> Result<VolumeBase, BootError> {
    let mut last = None;

    for volume in volumes {
        let candidate = format!("{}:{}", volume, data_subpath);
        if fs::read_dir(&candidate).is_ok() {
            debug!("Found data directory {}", candidate);
            return Ok(VolumeBase {
                path: candidate,
                verified: true,
            });
        }
        debug!("No data directory at {}", candidate);
        last = Some(candidate);
    }

    match last {
        Some(path) => {
            warn!("No volume holds {}, defaulting to {}", data_subpath, path);
            Ok(VolumeBase {
                path,
                verified: false,
            })
        }
        None => Err(BootError::PathResolution(
            "no storage volumes configured".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn volume(root: &std::path::Path, name: &str) -> String {
        root.join(name).to_string_lossy().to_string()
    }

    #[test]
    fn first_existing_volume_wins() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(root.path().join("imc0:data/halflife2")).unwrap();
        std::fs::create_dir_all(root.path().join("ux0:data/halflife2")).unwrap();
        let volumes = vec![
            volume(root.path(), "uma0"),
            volume(root.path(), "imc0"),
            volume(root.path(), "ux0"),
        ];

        let base = probe_volumes(&volumes, "data/halflife2").unwrap();

        assert!(base.verified);
        assert_eq!(base.path, format!("{}:data/halflife2", volumes[1]));
    }

    #[test]
    fn falls_back_to_last_candidate() {
        let root = tempfile::tempdir().unwrap();
        let volumes = vec![volume(root.path(), "uma0"), volume(root.path(), "ux0")];

        let base = probe_volumes(&volumes, "data/halflife2").unwrap();

        assert!(!base.verified);
        assert_eq!(base.path, format!("{}:data/halflife2", volumes[1]));
    }

    #[test]
    fn no_volumes_is_an_error() {
        assert!(matches!(
            probe_volumes(&[], "data/halflife2"),
            Err(BootError::PathResolution(_))
        ));
    }
}
