use crate::config::BootstrapConfig;
use crate::error::BootError;
use crate::loader::{DynamicLoader, EntrySymbol, LauncherMainCmdLine, join_path, resolve_entry, target_file_name};
use crate::platform::Platform;
use crate::platform::native::{c_string, module_instance};
use crate::resolve::{Placement, extend_env_search_path, resolve_executable_base};

use log::debug;
use std::ffi::c_char;
use std::path::MAIN_SEPARATOR;
use std::ptr;

#[cfg(windows)]
const PATH_LIST_SEPARATOR: char = ';';
#[cfg(not(windows))]
const PATH_LIST_SEPARATOR: char = ':';

/// `SW_SHOWDEFAULT`
const SHOW_DEFAULT: i32 = 10;

/// Launcher for Windows desktops: `LauncherMain(instance, 0, cmdline, show)` from `bin\`.
pub struct DesktopPlatform {
    cfg: BootstrapConfig,
}

impl DesktopPlatform {
    pub fn new(cfg: BootstrapConfig) -> Self {
        DesktopPlatform { cfg }
    }
}

/// Quote `arg` so the target's command-line parser reads it back as one argument.
///
/// Backslashes are only special in front of a quote, so those runs are doubled.
fn quote_argument(arg: &str) -> String {
    if !arg.is_empty() && !arg.contains(|c: char| c.is_whitespace() || c == '"') {
        return arg.to_string();
    }

    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('"');
    let mut backslashes = 0;
    for c in arg.chars() {
        match c {
            '\\' => backslashes += 1,
            '"' => {
                quoted.extend(std::iter::repeat_n('\\', backslashes * 2 + 1));
                quoted.push('"');
                backslashes = 0;
            }
            _ => {
                quoted.extend(std::iter::repeat_n('\\', backslashes));
                quoted.push(c);
                backslashes = 0;
            }
        }
    }
    quoted.extend(std::iter::repeat_n('\\', backslashes * 2));
    quoted.push('"');
    quoted
}

/// Arguments after the program name, re-joined as one command line.
fn argument_tail(argv: &[String]) -> String {
    argv.iter()
        .skip(1)
        .map(|arg| quote_argument(arg))
        .collect::<Vec<_>>()
        .join(" ")
}

impl Platform for DesktopPlatform {
    fn name(&self) -> &str {
        "desktop"
    }

    fn launch(&mut self, argv: &[String]) -> Result<i32, BootError> {
        let desktop = &self.cfg.desktop;
        let base = resolve_executable_base()?;

        let mut bin = join_path(&base, &[&self.cfg.library_dir], MAIN_SEPARATOR);
        bin.push(MAIN_SEPARATOR);
        let value = extend_env_search_path(
            &desktop.search_path_var,
            &bin,
            PATH_LIST_SEPARATOR,
            Placement::Prepend,
        );
        debug!("{}={}", desktop.search_path_var, value);

        let candidates: Vec<String> = desktop
            .target_candidates
            .iter()
            .map(|stem| {
                let file = target_file_name(stem, &self.cfg.naming);
                join_path(&base, &[&self.cfg.library_dir, &file], MAIN_SEPARATOR)
            })
            .collect();

        let mut loader = unsafe { DynamicLoader::<LauncherMainCmdLine>::new() };
        let symbol = EntrySymbol::Name(self.cfg.entry_symbol.clone());
        let handle = resolve_entry(&mut loader, &candidates, &symbol)?;

        let cmdline = c_string(&argument_tail(argv));
        Ok(unsafe {
            (handle.entry)(
                module_instance(),
                ptr::null_mut(),
                cmdline.as_ptr() as *mut c_char,
                SHOW_DEFAULT,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_is_the_argument_tail() {
        let argv = vec![
            "C:\\games\\hl2.exe".to_string(),
            "-game".to_string(),
            "episodic".to_string(),
        ];
        assert_eq!(argument_tail(&argv), "-game episodic");
        assert_eq!(argument_tail(&argv[..1]), "");
    }

    #[test]
    fn arguments_with_spaces_stay_single_tokens() {
        let argv = vec![
            "hl2.exe".to_string(),
            "-game".to_string(),
            "C:\\My Mods\\ep".to_string(),
            "+map".to_string(),
            "d1 a".to_string(),
        ];
        assert_eq!(
            argument_tail(&argv),
            "-game \"C:\\My Mods\\ep\" +map \"d1 a\""
        );
    }

    #[test]
    fn quotes_and_trailing_backslashes_are_escaped() {
        assert_eq!(quote_argument("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(quote_argument("C:\\My Mods\\"), "\"C:\\My Mods\\\\\"");
        assert_eq!(quote_argument(""), "\"\"");
        assert_eq!(quote_argument("C:\\games"), "C:\\games");
    }
}
