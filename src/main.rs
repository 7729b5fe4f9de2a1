mod config;
mod error;
mod launch;
mod loader;
mod paths;
mod platform;
mod resolve;
mod util;

use crate::config::{BootstrapConfig, PlatformProfile, load_cfg};
use crate::error::BootError;
use crate::util::{init_logging, msg};

use log::{error, info};

fn main() {
    init_logging();

    let argv: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().to_string())
        .collect();

    let cfg = match load_cfg() {
        Ok(cfg) => cfg,
        Err(e) => fatal(&BootstrapConfig::default(), &e),
    };

    let mut platform = cfg.profile.as_platform(&cfg);
    info!("Starting {} launcher", platform.name());

    match platform.launch(&argv) {
        Ok(status) => std::process::exit(status),
        Err(e) => fatal(&cfg, &e),
    }
}

fn fatal(cfg: &BootstrapConfig, err: &BootError) -> ! {
    error!("{}", err);
    if cfg.profile == PlatformProfile::Desktop && cfg.desktop.show_error_dialog {
        msg("Launcher Error", &err.to_string());
    }
    std::process::exit(err.exit_code());
}
