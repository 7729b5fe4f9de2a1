//! Exclusion manifest parsing (pure, no I/O)

use crate::launch::types::ExcludePolicy;

/// Excludes everything: the game runs from the remote path only
const MARKER_ALL: &str = "\"*\"";

/// Excludes the local library directory
const MARKER_BIN: &str = "\"\\bin\"";

/// Policy described by a manifest's contents; markers match case-insensitively
/// anywhere in the text.
pub fn parse_exclude_manifest(contents: &str) -> ExcludePolicy {
    let contents = contents.to_lowercase();
    if contents.contains(MARKER_ALL) {
        ExcludePolicy {
            exclude_all: true,
            exclude_specific_path: true,
        }
    } else if contents.contains(MARKER_BIN) {
        ExcludePolicy {
            exclude_all: false,
            exclude_specific_path: true,
        }
    } else {
        ExcludePolicy::default()
    }
}
