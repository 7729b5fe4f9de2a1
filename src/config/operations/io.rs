use crate::config::types::BootstrapConfig;
use crate::error::BootError;
use crate::paths::PATH_CONFIG;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub fn load_cfg() -> Result<BootstrapConfig, BootError> {
    load_cfg_from(&PATH_CONFIG)
}

/// Load the config at `path`.
///
/// A missing file yields the defaults; a file that exists but does not parse is fatal.
pub fn load_cfg_from(path: &Path) -> Result<BootstrapConfig, BootError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(BootstrapConfig::default());
        }
    };

    let config = serde_json::from_reader::<_, BootstrapConfig>(BufReader::new(file)).map_err(
        |source| BootError::Config {
            path: path.to_path_buf(),
            source,
        },
    )?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::PlatformProfile;
    use crate::loader::LibrarySpec;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_cfg_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(cfg, BootstrapConfig::default());
    }

    #[test]
    fn partial_file_overrides_only_named_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chainload.json");
        std::fs::write(
            &path,
            r#"{
                "profile": "multi_volume",
                "multi_volume": {
                    "volumes": ["ux0"],
                    "dependencies": [
                        { "name": "tier0" },
                        { "name": "extras", "required": false }
                    ]
                }
            }"#,
        )
        .unwrap();

        let cfg = load_cfg_from(&path).unwrap();
        assert_eq!(cfg.profile, PlatformProfile::MultiVolume);
        assert_eq!(cfg.multi_volume.volumes, vec!["ux0".to_string()]);
        assert_eq!(
            cfg.multi_volume.dependencies,
            vec![LibrarySpec::required("tier0"), LibrarySpec::optional("extras")]
        );
        // untouched sections keep their defaults
        assert_eq!(cfg.multi_volume.data_subpath, "data/halflife2");
        assert_eq!(cfg.entry_symbol, "LauncherMain");
        assert_eq!(cfg.remote_share.local_root, "d:");
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chainload.json");
        std::fs::write(&path, "{ \"profile\": \"toaster\" }").unwrap();

        match load_cfg_from(&path) {
            Err(BootError::Config { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected config error, got {:?}", other),
        }
    }
}
