use crate::resolve::pure::search_var::{Placement, extend_search_var};

use std::env;
use std::io;
use std::path::Path;

/// Extend the library search-path variable `var` with `entry` and return the new value.
///
/// Must run before the first library load, while the process is still single-threaded.
pub fn extend_env_search_path(
    var: &str,
    entry: &str,
    separator: char,
    placement: Placement,
) -> String {
    let existing = env::var(var).ok();
    let value = extend_search_var(existing.as_deref(), entry, separator, placement);
    unsafe {
        env::set_var(var, &value);
    }
    value
}

/// Re-execute the process once so the dynamic linker starts with the updated
/// environment.
///
/// When `guard_var` is already set this is the relaunched process and nothing
/// happens. Otherwise the guard is set and the process image is replaced; this
/// only returns if the exec itself failed.
#[cfg(unix)]
pub fn relaunch_once(guard_var: &str, exe: &Path, argv: &[String]) -> io::Result<()> {
    use std::os::unix::process::CommandExt;

    if env::var_os(guard_var).is_some() {
        return Ok(());
    }
    unsafe {
        env::set_var(guard_var, "1");
    }

    let mut cmd = std::process::Command::new(exe);
    if let Some(arg0) = argv.first() {
        cmd.arg0(arg0);
    }
    cmd.args(argv.iter().skip(1));
    Err(cmd.exec())
}

#[cfg(not(unix))]
pub fn relaunch_once(_guard_var: &str, _exe: &Path, _argv: &[String]) -> io::Result<()> {
    Ok(())
}
