//! Argument vector synthesis for launches without a native argv (pure, no I/O)

use crate::config::MultiVolumeConfig;
use crate::launch::types::{LaunchContext, SourceKind};

/// Argument vector for the target entry point.
///
/// A native vector with real arguments is a restart with explicit arguments and
/// passes through untouched. Otherwise the vector is built from the launch
/// event parameter: the developer marker adds the developer flags, anything
/// else (or no event) gives the program name alone.
pub fn synthesize_argv(
    native: &[String],
    event_param: Option<&str>,
    cfg: &MultiVolumeConfig,
) -> LaunchContext {
    if native.len() > 1 {
        return LaunchContext {
            argv: native.to_vec(),
            source_kind: SourceKind::ExternalRelaunch,
        };
    }

    let mut argv = vec![cfg.program_name.clone()];
    if event_param == Some(cfg.developer_marker.as_str()) {
        argv.extend(cfg.developer_args.iter().cloned());
    }

    LaunchContext {
        argv,
        source_kind: SourceKind::SyntheticFromEvent,
    }
}
