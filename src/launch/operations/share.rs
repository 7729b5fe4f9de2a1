use crate::launch::pure::exclude::parse_exclude_manifest;
use crate::launch::types::ExcludePolicy;

use std::fs;
use std::path::Path;

/// True when the game directory on the share can be opened for listing.
pub fn share_reachable(game_dir: &Path) -> bool {
    fs::read_dir(game_dir).is_ok()
}

/// Exclusions from the optional manifest; a missing or unreadable manifest excludes nothing.
pub fn read_exclude_policy(manifest: &Path) -> ExcludePolicy {
    match fs::read(manifest) {
        Ok(data) => parse_exclude_manifest(&String::from_utf8_lossy(&data)),
        Err(_) => ExcludePolicy::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_manifest_excludes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            read_exclude_policy(&dir.path().join("xbox_exclude_paths.txt")),
            ExcludePolicy::default()
        );
    }

    #[test]
    fn manifest_on_disk_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("xbox_exclude_paths.txt");
        std::fs::write(&manifest, "\"\\Bin\"\n").unwrap();
        assert!(read_exclude_policy(&manifest).exclude_specific_path);
    }

    #[test]
    fn missing_game_dir_is_unreachable() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!share_reachable(&dir.path().join("hl2")));
    }

    #[test]
    fn empty_game_dir_is_reachable() {
        let dir = tempfile::tempdir().unwrap();
        let game = dir.path().join("tf");
        std::fs::create_dir(&game).unwrap();
        assert!(share_reachable(&game));
    }
}
