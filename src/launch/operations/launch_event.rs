use crate::launch::types::{LIVEAREA_EVENT_KIND, LaunchEvent};
use crate::paths::ENV_LAUNCH_EVENT;

/// Source of the pending foreground launch event
pub trait LaunchEventSource {
    fn pending_launch_event(&mut self) -> Option<LaunchEvent>;
}

/// Host launch events: the launcher parameter is handed over in `CHAINLOAD_LAUNCH_EVENT`.
pub struct EnvLaunchEvents;

impl LaunchEventSource for EnvLaunchEvents {
    fn pending_launch_event(&mut self) -> Option<LaunchEvent> {
        let param = std::env::var(ENV_LAUNCH_EVENT).ok()?;
        Some(LaunchEvent {
            kind: LIVEAREA_EVENT_KIND,
            param,
        })
    }
}

/// Parameter of the pending event, if it came from the launcher screen.
pub fn live_area_parameter<S: LaunchEventSource>(source: &mut S) -> Option<String> {
    source
        .pending_launch_event()
        .filter(|event| event.kind == LIVEAREA_EVENT_KIND)
        .map(|event| event.param)
}
