//! Storage mode selection and command-line rewrite (pure, no I/O)

use crate::launch::pure::cmdline::{append_arg, has_arg, strip_arg};
use crate::launch::types::{ExcludePolicy, StorageMode, StoragePlan};

pub const FLAG_LOCAL_ONLY: &str = "-dvd";
pub const FLAG_LOCAL_WITH_REMOTE: &str = "-dvddev";
pub const FLAG_BASEDIR: &str = "-basedir";
pub const FLAG_GAME: &str = "-game";
pub const FLAG_REMOTE: &str = "-remote";

/// Storage mode selected on the command line; no mode flag means remote only.
pub fn storage_mode(cmdline: &str) -> StorageMode {
    if has_arg(cmdline, FLAG_LOCAL_ONLY) {
        StorageMode::LocalOnly
    } else if has_arg(cmdline, FLAG_LOCAL_WITH_REMOTE) {
        StorageMode::LocalWithRemoteFallback
    } else {
        StorageMode::RemoteOnly
    }
}

/// Base path and library search order for `mode`.
///
/// With the fallback mode, a manifest that excludes everything makes the
/// remote path the base as well, even though the mode asked for local media
/// first. Without a remote path only the local plan is possible.
pub fn plan_storage(
    mode: StorageMode,
    local_root: &str,
    remote: Option<&str>,
    policy: ExcludePolicy,
) -> StoragePlan {
    let local_plan = StoragePlan {
        base_path: local_root.to_string(),
        search_paths: vec![local_root.to_string()],
        append_remote: None,
    };

    let Some(remote) = remote else {
        return local_plan;
    };

    match mode {
        StorageMode::LocalOnly => local_plan,
        StorageMode::LocalWithRemoteFallback => {
            let search_paths = if policy.excludes_local() {
                vec![remote.to_string()]
            } else {
                vec![local_root.to_string(), remote.to_string()]
            };

            if policy.exclude_all {
                StoragePlan {
                    base_path: remote.to_string(),
                    search_paths,
                    append_remote: None,
                }
            } else {
                StoragePlan {
                    base_path: local_root.to_string(),
                    search_paths,
                    append_remote: Some(remote.to_string()),
                }
            }
        }
        StorageMode::RemoteOnly => StoragePlan {
            base_path: remote.to_string(),
            search_paths: vec![remote.to_string()],
            append_remote: None,
        },
    }
}

/// Final command line for the target: stale path flags are dropped and
/// `-basedir <base> -game <base><sep><game>` is appended, preceded by
/// `-remote <path>` when the plan forwards the remote path.
pub fn rewrite_command_line(cmdline: &str, plan: &StoragePlan, game: &str, separator: char) -> String {
    let mut clean = strip_arg(&strip_arg(cmdline, FLAG_BASEDIR), FLAG_GAME);

    if let Some(remote) = &plan.append_remote {
        clean = append_arg(&strip_arg(&clean, FLAG_REMOTE), FLAG_REMOTE, remote);
    }

    let clean = append_arg(&clean, FLAG_BASEDIR, &plan.base_path);
    let game_path = format!("{}{}{}", plan.base_path, separator, game);
    append_arg(&clean, FLAG_GAME, &game_path)
}
