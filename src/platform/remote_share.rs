use crate::config::BootstrapConfig;
use crate::error::BootError;
use crate::launch::{HostConsole, prepare_remote_launch};
use crate::loader::{DynamicLoader, LauncherMainCmdLine};
use crate::paths::PATH_LAUNCH_RECORD;
use crate::platform::Platform;
use crate::platform::native::c_string;

use std::ffi::{c_char, c_void};
use std::ptr;

/// Instance handle the target expects from this launcher
const SPOOFED_INSTANCE: usize = 1;

/// Launcher for development consoles running games off local media or a host PC share.
pub struct RemoteSharePlatform {
    cfg: BootstrapConfig,
}

impl RemoteSharePlatform {
    pub fn new(cfg: BootstrapConfig) -> Self {
        RemoteSharePlatform { cfg }
    }
}

impl Platform for RemoteSharePlatform {
    fn name(&self) -> &str {
        "remote_share"
    }

    fn launch(&mut self, argv: &[String]) -> Result<i32, BootError> {
        let mut console = HostConsole::new(PATH_LAUNCH_RECORD.clone(), argv.to_vec());
        let mut loader = unsafe { DynamicLoader::<LauncherMainCmdLine>::new() };
        let launch = prepare_remote_launch(&mut console, &mut loader, &self.cfg)?;

        let cmdline = c_string(&launch.command_line);
        Ok(unsafe {
            (launch.entry.entry)(
                SPOOFED_INSTANCE as *mut c_void,
                ptr::null_mut(),
                cmdline.as_ptr() as *mut c_char,
                0,
            )
        })
    }
}
