use crate::config::MultiVolumeConfig;
use crate::launch::operations::launch_event::{LaunchEventSource, live_area_parameter};
use crate::launch::pure::synthetic::synthesize_argv;
use crate::launch::types::LaunchContext;

use log::info;
use std::sync::OnceLock;

static LAUNCH_CONTEXT: OnceLock<LaunchContext> = OnceLock::new();

/// Build the launch context once for the whole process.
///
/// The returned context outlives every pointer handed to the entry point.
pub fn build_synthetic_context<S: LaunchEventSource>(
    native: &[String],
    events: &mut S,
    cfg: &MultiVolumeConfig,
) -> &'static LaunchContext {
    LAUNCH_CONTEXT.get_or_init(|| {
        let ctx = build_context(native, events, cfg);
        info!("Launch arguments ({:?}): {}", ctx.source_kind, ctx.argv.join(" "));
        ctx
    })
}

fn build_context<S: LaunchEventSource>(
    native: &[String],
    events: &mut S,
    cfg: &MultiVolumeConfig,
) -> LaunchContext {
    // Real arguments mean an explicit restart; the pending event is left alone
    let param = if native.len() > 1 {
        None
    } else {
        live_area_parameter(events)
    };
    synthesize_argv(native, param.as_deref(), cfg)
}
