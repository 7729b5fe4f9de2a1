use crate::loader::LibrarySpec;
use serde::{Deserialize, Serialize};

/// Which native launch environment the bootstrap runs in
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "snake_case")]
pub enum PlatformProfile {
    /// Windowed entry: instance handle plus a single command-line string
    Desktop,
    /// Console entry with argc/argv and a search-path relaunch
    Posix,
    /// Embedded target with several storage volumes and no usable argv
    MultiVolume,
    /// Local executable, libraries and data possibly on a remote share
    RemoteShare,
}

impl Default for PlatformProfile {
    fn default() -> Self {
        if cfg!(windows) {
            PlatformProfile::Desktop
        } else {
            PlatformProfile::Posix
        }
    }
}

/// File name decoration applied to library names
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(default)]
pub struct LibraryNaming {
    /// Prefix for dependency names ("lib" on Unix-likes)
    pub prefix: String,
    /// Shared library extension, including the dot
    pub suffix: String,
}

impl Default for LibraryNaming {
    fn default() -> Self {
        LibraryNaming {
            prefix: std::env::consts::DLL_PREFIX.to_string(),
            suffix: std::env::consts::DLL_SUFFIX.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(default)]
pub struct DesktopConfig {
    pub search_path_var: String,
    pub target_candidates: Vec<String>,
    /// Show fatal diagnostics in a message dialog as well as the log
    pub show_error_dialog: bool,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        DesktopConfig {
            search_path_var: "PATH".to_string(),
            target_candidates: vec!["launcher".to_string()],
            show_error_dialog: true,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(default)]
pub struct PosixConfig {
    pub search_path_var: String,
    /// Set before the one-shot relaunch so the relaunched process does not repeat it
    pub relaunch_guard_var: String,
    pub relaunch: bool,
    pub target_candidates: Vec<String>,
    /// How long `-wait_for_debugger` waits for a tracer to attach
    pub debugger_wait_secs: u64,
}

impl Default for PosixConfig {
    fn default() -> Self {
        PosixConfig {
            search_path_var: "LD_LIBRARY_PATH".to_string(),
            relaunch_guard_var: "NO_EXECVE_AGAIN".to_string(),
            relaunch: true,
            target_candidates: vec!["liblauncher".to_string(), "launcher".to_string()],
            debugger_wait_secs: 30,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(default)]
pub struct MultiVolumeConfig {
    /// Storage volumes in probe order; the last one is the fallback
    pub volumes: Vec<String>,
    pub data_subpath: String,
    pub scratch_dir: String,
    pub dependencies: Vec<LibrarySpec>,
    pub target_candidates: Vec<String>,
    pub program_name: String,
    /// Launch event parameter that selects developer mode
    pub developer_marker: String,
    pub developer_args: Vec<String>,
}

impl Default for MultiVolumeConfig {
    fn default() -> Self {
        MultiVolumeConfig {
            volumes: vec!["uma0".to_string(), "imc0".to_string(), "ux0".to_string()],
            data_subpath: "data/halflife2".to_string(),
            scratch_dir: "temp".to_string(),
            dependencies: vec![
                LibrarySpec::required("tier0"),
                LibrarySpec::required("steam_api"),
                LibrarySpec::required("vstdlib"),
                LibrarySpec::required("togl"),
            ],
            target_candidates: vec!["liblauncher".to_string(), "launcher".to_string()],
            program_name: "./eboot.bin".to_string(),
            developer_marker: "dev".to_string(),
            developer_args: vec!["-log".to_string(), "-dev".to_string(), "2".to_string()],
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(default)]
pub struct RemoteShareConfig {
    /// Path separator of the console file system
    pub separator: char,
    /// Root of the local media
    pub local_root: String,
    /// Remote root, `{host}` and `{share}` are substituted
    pub remote_root_template: String,
    /// The console name must be `<HostPC><suffix>`
    pub console_name_suffix: String,
    pub default_game: String,
    pub default_share: String,
    /// Game forced when restarting from an invite
    pub invite_game: String,
    pub exclude_manifest: String,
    /// Executable image name the system reports on a first retail start
    pub retail_image: String,
    pub retail_default_args: String,
    /// Implicitly linked libraries, loaded ahead of the target
    pub dependencies: Vec<LibrarySpec>,
    pub chooser_target: String,
    pub launcher_target: String,
    pub entry_ordinal: u16,
}

impl Default for RemoteShareConfig {
    fn default() -> Self {
        RemoteShareConfig {
            separator: '\\',
            local_root: "d:".to_string(),
            remote_root_template: "net:\\smb\\{host}\\{share}".to_string(),
            console_name_suffix: "_360".to_string(),
            default_game: "hl2".to_string(),
            default_share: "game".to_string(),
            invite_game: "tf".to_string(),
            exclude_manifest: "xbox_exclude_paths.txt".to_string(),
            retail_image: "default.xex".to_string(),
            retail_default_args: "-dvd".to_string(),
            dependencies: vec![
                LibrarySpec::required("tier0_360.dll"),
                LibrarySpec::required("vstdlib_360.dll"),
                LibrarySpec::optional("vxbdm_360.dll"),
            ],
            chooser_target: "AppChooser_360.dll".to_string(),
            launcher_target: "launcher_360.dll".to_string(),
            entry_ordinal: 1,
        }
    }
}

/// Bootstrap configuration
///
/// Every field falls back to its default, so a config file only has to name
/// what it overrides.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(default)]
pub struct BootstrapConfig {
    pub profile: PlatformProfile,
    /// Subdirectory of the base path holding every library
    pub library_dir: String,
    pub entry_symbol: String,
    pub naming: LibraryNaming,
    pub desktop: DesktopConfig,
    pub posix: PosixConfig,
    pub multi_volume: MultiVolumeConfig,
    pub remote_share: RemoteShareConfig,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        BootstrapConfig {
            profile: PlatformProfile::default(),
            library_dir: "bin".to_string(),
            entry_symbol: "LauncherMain".to_string(),
            naming: LibraryNaming::default(),
            desktop: DesktopConfig::default(),
            posix: PosixConfig::default(),
            multi_volume: MultiVolumeConfig::default(),
            remote_share: RemoteShareConfig::default(),
        }
    }
}
