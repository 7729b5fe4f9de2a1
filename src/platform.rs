//! Platform profiles - HOW the launcher gets started
//!
//! Each profile pairs a way of finding the base directory with a way of
//! building the arguments for the target entry point:
//! - Desktop: executable-relative base, command-line entry
//! - Posix: executable-relative base, argv entry, one self re-exec
//! - MultiVolume: probed volume base, argv synthesized from the launch event
//! - RemoteShare: storage planned from the command line, ordinal entry

use crate::config::{BootstrapConfig, PlatformProfile};
use crate::error::BootError;

/// Platform trait - one launch strategy per profile
pub trait Platform {
    /// Profile name for diagnostics
    fn name(&self) -> &str;

    /// Resolve, load and call the target; returns its exit status.
    fn launch(&mut self, argv: &[String]) -> Result<i32, BootError>;
}

impl PlatformProfile {
    /// Convert the selected profile to a trait object
    pub fn as_platform(&self, cfg: &BootstrapConfig) -> Box<dyn Platform> {
        match self {
            PlatformProfile::Desktop => Box::new(DesktopPlatform::new(cfg.clone())),
            PlatformProfile::Posix => Box::new(PosixPlatform::new(cfg.clone())),
            PlatformProfile::MultiVolume => Box::new(MultiVolumePlatform::new(cfg.clone())),
            PlatformProfile::RemoteShare => Box::new(RemoteSharePlatform::new(cfg.clone())),
        }
    }
}

mod desktop;
mod multi_volume;
mod native;
mod posix;
mod remote_share;

pub use desktop::DesktopPlatform;
pub use multi_volume::MultiVolumePlatform;
pub use posix::PosixPlatform;
pub use remote_share::RemoteSharePlatform;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_profile_maps_to_its_platform() {
        let cfg = BootstrapConfig::default();
        let names: Vec<String> = [
            PlatformProfile::Desktop,
            PlatformProfile::Posix,
            PlatformProfile::MultiVolume,
            PlatformProfile::RemoteShare,
        ]
        .iter()
        .map(|p| p.as_platform(&cfg).name().to_string())
        .collect();
        assert_eq!(names, vec!["desktop", "posix", "multi_volume", "remote_share"]);
    }
}
