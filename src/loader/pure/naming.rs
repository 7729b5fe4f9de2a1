//! Library file naming and path construction (pure, no I/O)

use crate::config::LibraryNaming;
use std::path::Path;

fn has_extension(name: &str) -> bool {
    Path::new(name).extension().is_some()
}

/// File name of a dependency: `tier0` becomes `libtier0.so` on Linux.
///
/// Names that already carry an extension are used verbatim.
pub fn dependency_file_name(name: &str, naming: &LibraryNaming) -> String {
    if has_extension(name) {
        return name.to_string();
    }
    format!("{}{}{}", naming.prefix, name, naming.suffix)
}

/// File name of a target candidate; candidates name their prefix explicitly.
pub fn target_file_name(stem: &str, naming: &LibraryNaming) -> String {
    if has_extension(stem) {
        return stem.to_string();
    }
    format!("{}{}", stem, naming.suffix)
}

/// Join path components with `separator`, without doubling separators at the seams.
pub fn join_path(root: &str, parts: &[&str], separator: char) -> String {
    let mut path = root.trim_end_matches(separator).to_string();
    for part in parts {
        let part = part.trim_matches(separator);
        if part.is_empty() {
            continue;
        }
        if !path.is_empty() || root.starts_with(separator) {
            path.push(separator);
        }
        path.push_str(part);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linux() -> LibraryNaming {
        LibraryNaming {
            prefix: "lib".to_string(),
            suffix: ".so".to_string(),
        }
    }

    fn windows() -> LibraryNaming {
        LibraryNaming {
            prefix: "".to_string(),
            suffix: ".dll".to_string(),
        }
    }

    #[test]
    fn dependency_gets_prefix_and_suffix() {
        assert_eq!(dependency_file_name("tier0", &linux()), "libtier0.so");
        assert_eq!(dependency_file_name("tier0", &windows()), "tier0.dll");
    }

    #[test]
    fn decorated_names_are_kept() {
        assert_eq!(dependency_file_name("tier0_360.dll", &linux()), "tier0_360.dll");
        assert_eq!(target_file_name("launcher_360.dll", &linux()), "launcher_360.dll");
    }

    #[test]
    fn target_only_gets_suffix() {
        assert_eq!(target_file_name("liblauncher", &linux()), "liblauncher.so");
        assert_eq!(target_file_name("launcher", &linux()), "launcher.so");
    }

    #[test]
    fn join_console_style() {
        assert_eq!(
            join_path("d:", &["bin", "tier0_360.dll"], '\\'),
            "d:\\bin\\tier0_360.dll"
        );
        assert_eq!(
            join_path("net:\\smb\\dev\\game\\", &["bin", "x.dll"], '\\'),
            "net:\\smb\\dev\\game\\bin\\x.dll"
        );
    }

    #[test]
    fn join_keeps_absolute_root() {
        assert_eq!(join_path("/opt/app", &["bin", "libx.so"], '/'), "/opt/app/bin/libx.so");
        assert_eq!(join_path("/", &["bin"], '/'), "/bin");
    }

    #[test]
    fn join_with_empty_root_is_relative() {
        assert_eq!(join_path("", &["bin", "libx.so"], '/'), "bin/libx.so");
    }
}
