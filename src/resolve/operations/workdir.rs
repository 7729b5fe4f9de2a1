use std::env;
use std::fs;
use std::io;
use std::path::Path;

/// Make `dir` the working directory; every later relative load assumes it.
pub fn enter_base_dir(dir: &Path) -> io::Result<()> {
    env::set_current_dir(dir)
}

/// Create the scratch directory `name` under the working directory.
pub fn ensure_scratch_dir(name: &str) -> io::Result<()> {
    match fs::create_dir(name) {
        Err(e) if e.kind() != io::ErrorKind::AlreadyExists => Err(e),
        _ => Ok(()),
    }
}
