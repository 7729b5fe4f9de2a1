//! Target application and remote location selection (pure, no I/O)

use crate::config::RemoteShareConfig;
use crate::launch::pure::cmdline::arg_value;
use crate::launch::pure::storage::FLAG_GAME;
use crate::launch::types::LaunchFlags;

pub const FLAG_SHARE: &str = "-share";
pub const FLAG_HOST: &str = "-host";

/// Game, share label and which target library gets launched
#[derive(Debug, Clone, PartialEq)]
pub struct TargetSelection {
    pub game: String,
    pub share: String,
    /// Launch the game chooser instead of the game launcher
    pub chooser: bool,
}

impl TargetSelection {
    pub fn target_library<'a>(&self, cfg: &'a RemoteShareConfig) -> &'a str {
        if self.chooser {
            &cfg.chooser_target
        } else {
            &cfg.launcher_target
        }
    }
}

/// Reduce a possibly absolute game path to the game name.
pub fn sanitize_game_name(raw: &str, separator: char) -> String {
    match raw.rfind(separator) {
        Some(idx) => raw[idx + separator.len_utf8()..].to_string(),
        None => raw.to_string(),
    }
}

/// Pick the game and target from the command line and the relaunch flags.
///
/// No `-game` means the default game behind the chooser. Leaving a game
/// (without restarting it) returns to the chooser; an invite restart always
/// goes straight into the invite game.
pub fn select_target(cmdline: &str, flags: LaunchFlags, cfg: &RemoteShareConfig) -> TargetSelection {
    let (mut game, mut chooser) = match arg_value(cmdline, FLAG_GAME) {
        Some(raw) => (sanitize_game_name(raw, cfg.separator), false),
        None => (cfg.default_game.clone(), true),
    };

    let share = arg_value(cmdline, FLAG_SHARE)
        .map(str::to_string)
        .unwrap_or_else(|| cfg.default_share.clone());

    if flags.contains(LaunchFlags::EXIT_FROM_GAME) && !flags.contains(LaunchFlags::GAME_RESTART) {
        chooser = true;
    }

    if flags.contains(LaunchFlags::INVITE_RESTART) {
        game = cfg.invite_game.clone();
        chooser = false;
    }

    TargetSelection {
        game,
        share,
        chooser,
    }
}

/// Host PC name from a console name of the form `<HostPC><suffix>`.
pub fn host_from_console_name(console_name: &str, suffix: &str) -> Option<String> {
    console_name
        .find(suffix)
        .map(|idx| console_name[..idx].to_string())
}

/// Remote root for `host` and `share`.
pub fn remote_root(template: &str, host: &str, share: &str) -> String {
    template.replace("{host}", host).replace("{share}", share)
}
