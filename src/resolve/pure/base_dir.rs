//! Base directory derivation (pure, no I/O)

const SEPARATORS: [char; 2] = ['\\', '/'];

/// Directory of an executable path: the filename component and the separator
/// before it are stripped.
///
/// Both separators are accepted so that Windows module paths and Unix paths
/// resolve the same way. A bare file name resolves to the current directory.
pub fn base_dir_of(exe_path: &str) -> String {
    let Some(idx) = exe_path.rfind(SEPARATORS) else {
        return ".".to_string();
    };

    let dir = exe_path[..idx].trim_end_matches(SEPARATORS);
    if dir.is_empty() {
        // executable sits directly under the root
        return exe_path[..idx + 1].to_string();
    }
    dir.to_string()
}
