use crate::paths::ENV_LOG;

use dialog::DialogBox;
use env_logger::Env;
use log::info;
use std::io::Write;
use std::thread::sleep;
use std::time::Duration;

pub fn msg(title: &str, contents: &str) {
    let _ = dialog::Message::new(contents).title(title).show();
}

/// Log through `env_logger`, filtered by `CHAINLOAD_LOG` (default `info`).
pub fn init_logging() {
    let mut builder = env_logger::Builder::from_env(Env::new().filter_or(ENV_LOG, "info"));
    builder.format(|buf, record| writeln!(buf, "[chainload] {} {}", record.level(), record.args()));
    let _ = builder.try_init();
}

/// `TracerPid` from the contents of `/proc/<pid>/status`.
pub fn parse_tracer_pid(status: &str) -> Option<i32> {
    status
        .lines()
        .find_map(|line| line.strip_prefix("TracerPid:"))
        .and_then(|value| value.trim().parse().ok())
}

#[cfg(target_os = "linux")]
pub fn is_debugger_present() -> bool {
    std::fs::read_to_string("/proc/self/status")
        .ok()
        .and_then(|status| parse_tracer_pid(&status))
        .is_some_and(|pid| pid > 0)
}

#[cfg(not(target_os = "linux"))]
pub fn is_debugger_present() -> bool {
    false
}

/// Poll once per second until a debugger attaches or `limit` passes.
pub fn wait_for_debugger(limit: Duration) -> bool {
    info!(
        "Waiting up to {}s for a debugger to attach to pid {}",
        limit.as_secs(),
        std::process::id()
    );

    let step = Duration::from_secs(1);
    let mut waited = Duration::ZERO;
    loop {
        if is_debugger_present() {
            info!("Debugger attached");
            return true;
        }
        if waited >= limit {
            info!("No debugger attached, continuing");
            return false;
        }
        sleep(step);
        waited += step;
    }
}
