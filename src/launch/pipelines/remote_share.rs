use crate::config::{BootstrapConfig, RemoteShareConfig};
use crate::error::BootError;
use crate::launch::operations::console::ConsoleServices;
use crate::launch::operations::share::{read_exclude_policy, share_reachable};
use crate::launch::pure::cmdline::{arg_value, embedded_command_line};
use crate::launch::pure::storage::{plan_storage, rewrite_command_line, storage_mode};
use crate::launch::pure::target::{
    FLAG_HOST, TargetSelection, host_from_console_name, remote_root, select_target,
};
use crate::launch::types::{
    ExcludePolicy, LAUNCH_DATA_DEMO_ID, LaunchFlags, LaunchRecord, SourceKind, StorageMode,
    VALVE_LAUNCH_ID,
};
use crate::loader::{
    DependencyLayout, EntryPointHandle, EntrySymbol, LibrarySpec, LoadedLibrary, ModuleLoader,
    entry_from_loaded, join_path, load_dependencies,
};

use log::{debug, info, warn};
use std::path::Path;
use std::thread::sleep;
use std::time::Duration;

const DEBUGGER_POLL: Duration = Duration::from_millis(100);
const DEBUGGER_SETTLE: Duration = Duration::from_secs(1);

/// Everything needed to hand control to the target
pub struct RemoteLaunch<M, F> {
    pub entry: EntryPointHandle<M, F>,
    /// Libraries loaded ahead of the target; they stay loaded for the process lifetime
    pub dependencies: Vec<LoadedLibrary<M>>,
    pub command_line: String,
    pub source_kind: SourceKind,
}

/// Resolve storage, load the libraries and rewrite the command line for the target.
///
/// Losing the remote share requests a cold reboot from `console` before the
/// error is returned.
pub fn prepare_remote_launch<C, L>(
    console: &mut C,
    loader: &mut L,
    cfg: &BootstrapConfig,
) -> Result<RemoteLaunch<L::Module, L::Entry>, BootError>
where
    C: ConsoleServices,
    L: ModuleLoader,
{
    let share_cfg = &cfg.remote_share;

    let (cmdline, record, source_kind) = initial_command_line(console, share_cfg);
    let flags = record.as_ref().map(|r| r.flags).unwrap_or_default();
    info!("Command line ({:?}): {}", source_kind, cmdline);

    if flags.contains(LaunchFlags::IS_DEBUGGING) {
        wait_for_attach(console);
    }

    if let Some(record) = &record {
        // The application reads the rest of the payload after we hand over
        if let Err(e) = console.restore_launch_record(record) {
            warn!("Could not re-establish the launch record: {}", e);
        }
    }

    let selection = select_target(&cmdline, flags, share_cfg);
    debug!(
        "Selected game {} on share {} (chooser: {})",
        selection.game, selection.share, selection.chooser
    );

    let mode = storage_mode(&cmdline);
    let remote = match mode {
        StorageMode::LocalOnly => None,
        _ => Some(connect_remote(console, &cmdline, &selection, share_cfg)?),
    };

    let policy = match (&remote, mode) {
        (Some(remote), StorageMode::LocalWithRemoteFallback) => {
            let manifest = join_path(remote, &[&share_cfg.exclude_manifest], share_cfg.separator);
            read_exclude_policy(Path::new(&manifest))
        }
        _ => ExcludePolicy::default(),
    };

    let plan = plan_storage(mode, &share_cfg.local_root, remote.as_deref(), policy);
    info!(
        "Storage {:?}: base {}, search [{}]",
        mode,
        plan.base_path,
        plan.search_paths.join(", ")
    );

    let mut specs = share_cfg.dependencies.clone();
    specs.push(LibrarySpec::required(selection.target_library(share_cfg)));

    let layout = DependencyLayout {
        roots: &plan.search_paths,
        library_dir: &cfg.library_dir,
        separator: share_cfg.separator,
        naming: &cfg.naming,
    };
    let mut libraries = load_dependencies(loader, &specs, &layout)?;

    // The target is the last required slot, so a successful load always ends with it
    let Some(target) = libraries.pop() else {
        return Err(BootError::TargetLoad { attempts: vec![] });
    };
    let entry = entry_from_loaded(loader, target, &EntrySymbol::Ordinal(share_cfg.entry_ordinal))?;

    let command_line = rewrite_command_line(&cmdline, &plan, &selection.game, share_cfg.separator);
    info!("Launching {} with: {}", entry.library.display(), command_line);

    Ok(RemoteLaunch {
        entry,
        dependencies: libraries,
        command_line,
        source_kind,
    })
}

/// Command line to start from, with the launch record to carry over (if any).
fn initial_command_line<C: ConsoleServices>(
    console: &mut C,
    cfg: &RemoteShareConfig,
) -> (String, Option<LaunchRecord>, SourceKind) {
    let record = match console.take_launch_record() {
        Some(record) if record.launch_id == VALVE_LAUNCH_ID => {
            if !record.payload.is_empty() {
                let cmdline = embedded_command_line(&record.payload);
                return (cmdline, Some(record), SourceKind::InternalRestart);
            }
            // No command line, but the flags and the record itself still carry over
            Some(record)
        }
        Some(record) if record.launch_id == LAUNCH_DATA_DEMO_ID => {
            debug!("Ignoring demo launch data");
            None
        }
        Some(record) => {
            debug!("Ignoring launch data with id {:#010x}", record.launch_id);
            None
        }
        None => None,
    };

    let cmdline = console.system_command_line();
    let retail = format!("\"{}\"", cfg.retail_image);
    let cmdline = if cmdline.trim().eq_ignore_ascii_case(&retail) {
        // First launch from retail media
        format!("{} {}", cfg.retail_image, cfg.retail_default_args)
    } else {
        cmdline
    };
    (cmdline, record, SourceKind::ColdBoot)
}

fn wait_for_attach<C: ConsoleServices>(console: &C) {
    info!("Waiting for debugger to attach");
    while !console.debugger_present() {
        sleep(DEBUGGER_POLL);
    }
    sleep(DEBUGGER_SETTLE);
}

/// Remote root for the selected share, checked for reachability.
fn connect_remote<C: ConsoleServices>(
    console: &mut C,
    cmdline: &str,
    selection: &TargetSelection,
    cfg: &RemoteShareConfig,
) -> Result<String, BootError> {
    let host = match arg_value(cmdline, FLAG_HOST).filter(|h| !h.is_empty()) {
        Some(host) => host.to_string(),
        None => {
            let name = console.console_name().map_err(BootError::HostIdentity)?;
            host_from_console_name(&name, &cfg.console_name_suffix).ok_or_else(|| {
                BootError::HostIdentity(format!(
                    "console name '{}' lacks the '{}' suffix",
                    name, cfg.console_name_suffix
                ))
            })?
        }
    };

    let remote = remote_root(&cfg.remote_root_template, &host, &selection.share);
    let game_dir = join_path(&remote, &[&selection.game], cfg.separator);
    if !share_reachable(Path::new(&game_dir)) {
        console.request_cold_reboot();
        return Err(BootError::RemoteShareUnreachable { path: game_dir });
    }

    Ok(remote)
}
