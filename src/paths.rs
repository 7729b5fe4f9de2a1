use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;

pub const CONFIG_FILE_NAME: &str = "chainload.json";

pub const ENV_CONFIG: &str = "CHAINLOAD_CONFIG";
pub const ENV_LOG: &str = "CHAINLOAD_LOG";
pub const ENV_LAUNCH_EVENT: &str = "CHAINLOAD_LAUNCH_EVENT";

/// Absolute path of the running executable, if the platform can report it.
pub static PATH_EXE: LazyLock<Option<PathBuf>> = LazyLock::new(|| env::current_exe().ok());

pub static PATH_CONFIG: LazyLock<PathBuf> = LazyLock::new(|| {
    if let Ok(path) = env::var(ENV_CONFIG) {
        return PathBuf::from(path);
    }
    match PATH_EXE.as_ref().and_then(|exe| exe.parent()) {
        Some(dir) => dir.join(CONFIG_FILE_NAME),
        None => PathBuf::from(CONFIG_FILE_NAME),
    }
});

/// Where the host build keeps the launch record between a relaunch and the next start.
pub static PATH_LAUNCH_RECORD: LazyLock<PathBuf> =
    LazyLock::new(|| env::temp_dir().join("chainload_launch.json"));
