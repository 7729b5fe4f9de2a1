use crate::config::BootstrapConfig;
use crate::error::BootError;
use crate::loader::{DynamicLoader, EntrySymbol, LauncherMainArgv, join_path, resolve_entry, target_file_name};
use crate::paths::PATH_EXE;
use crate::platform::Platform;
use crate::platform::native::NativeArgv;
use crate::resolve::{Placement, extend_env_search_path, relaunch_once, resolve_executable_base};
use crate::util::wait_for_debugger;

use log::{debug, warn};
use std::time::Duration;

const WAIT_FOR_DEBUGGER: &str = "-wait_for_debugger";

/// Launcher for Linux and macOS: `LauncherMain(argc, argv)` from `bin/`.
pub struct PosixPlatform {
    cfg: BootstrapConfig,
}

impl PosixPlatform {
    pub fn new(cfg: BootstrapConfig) -> Self {
        PosixPlatform { cfg }
    }
}

impl Platform for PosixPlatform {
    fn name(&self) -> &str {
        "posix"
    }

    fn launch(&mut self, argv: &[String]) -> Result<i32, BootError> {
        let posix = &self.cfg.posix;
        let base = resolve_executable_base()?;

        let entry = format!("{}/", self.cfg.library_dir);
        let value = extend_env_search_path(&posix.search_path_var, &entry, ':', Placement::Append);
        debug!("{}={}", posix.search_path_var, value);

        if posix.relaunch {
            if let Some(exe) = PATH_EXE.as_deref() {
                // Only returns when this is already the relaunched process or exec failed
                if let Err(e) = relaunch_once(&posix.relaunch_guard_var, exe, argv) {
                    warn!("Could not re-exec {}: {}", exe.display(), e);
                }
            }
        }

        if argv.iter().any(|arg| arg.contains(WAIT_FOR_DEBUGGER)) {
            wait_for_debugger(Duration::from_secs(posix.debugger_wait_secs));
        }

        let candidates: Vec<String> = posix
            .target_candidates
            .iter()
            .map(|stem| {
                let file = target_file_name(stem, &self.cfg.naming);
                join_path(&base, &[&self.cfg.library_dir, &file], '/')
            })
            .collect();

        let mut loader = unsafe { DynamicLoader::<LauncherMainArgv>::new() };
        let symbol = EntrySymbol::Name(self.cfg.entry_symbol.clone());
        let handle = resolve_entry(&mut loader, &candidates, &symbol)?;

        let mut native = NativeArgv::new(argv);
        Ok(unsafe { (handle.entry)(native.argc(), native.as_mut_ptr()) })
    }
}
