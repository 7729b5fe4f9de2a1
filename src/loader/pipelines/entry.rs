//! Target library and entry point resolution

use crate::error::{BootError, LoadAttempt};
use crate::loader::types::{EntryPointHandle, EntrySymbol, LoadedLibrary, ModuleLoader};

use log::{debug, info};
use std::path::PathBuf;

/// Load the first loadable target candidate and resolve `symbol` in it.
///
/// A candidate that fails to load is only logged; the error lists every
/// candidate only when none of them loads. A missing symbol is reported
/// separately so a broken package can be told apart from a missing one.
pub fn resolve_entry<L: ModuleLoader>(
    loader: &mut L,
    candidates: &[String],
    symbol: &EntrySymbol,
) -> Result<EntryPointHandle<L::Module, L::Entry>, BootError> {
    let mut attempts = Vec::new();

    for candidate in candidates {
        match loader.open(&PathBuf::from(candidate)) {
            Ok(module) => {
                info!("Loaded target {}", candidate);
                let loaded = LoadedLibrary {
                    name: candidate.clone(),
                    path: PathBuf::from(candidate),
                    module,
                };
                return entry_from_loaded(loader, loaded, symbol);
            }
            Err(reason) => {
                debug!("Target candidate {} failed: {}", candidate, reason);
                attempts.push(LoadAttempt {
                    path: candidate.clone(),
                    reason,
                });
            }
        }
    }

    Err(BootError::TargetLoad { attempts })
}

/// Resolve `symbol` in a library that is already loaded.
pub fn entry_from_loaded<L: ModuleLoader>(
    loader: &L,
    loaded: LoadedLibrary<L::Module>,
    symbol: &EntrySymbol,
) -> Result<EntryPointHandle<L::Module, L::Entry>, BootError> {
    match loader.entry(&loaded.module, symbol) {
        Ok(entry) => Ok(EntryPointHandle {
            library: loaded.path,
            module: loaded.module,
            entry,
        }),
        Err(reason) => Err(BootError::EntrySymbolMissing {
            symbol: symbol.to_string(),
            library: loaded.path.display().to_string(),
            reason,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::testing::FakeLoader;

    fn candidates() -> Vec<String> {
        vec!["bin/liblauncher.so".to_string(), "bin/launcher.so".to_string()]
    }

    fn launcher_main() -> EntrySymbol {
        EntrySymbol::Name("LauncherMain".to_string())
    }

    #[test]
    fn first_candidate_wins() {
        let mut loader = FakeLoader::with_libraries(&["bin/liblauncher.so", "bin/launcher.so"])
            .exporting("LauncherMain");

        let handle = resolve_entry(&mut loader, &candidates(), &launcher_main()).unwrap();

        assert_eq!(handle.library, PathBuf::from("bin/liblauncher.so"));
        assert_eq!(loader.attempts(), vec!["bin/liblauncher.so"]);
    }

    #[test]
    fn second_candidate_used_when_first_is_absent() {
        let mut loader = FakeLoader::with_libraries(&["bin/launcher.so"]).exporting("LauncherMain");

        let handle = resolve_entry(&mut loader, &candidates(), &launcher_main()).unwrap();

        assert_eq!(handle.library, PathBuf::from("bin/launcher.so"));
        assert_eq!(handle.entry, "bin/launcher.so!LauncherMain");
        assert_eq!(
            loader.attempts(),
            vec!["bin/liblauncher.so", "bin/launcher.so"]
        );
    }

    #[test]
    fn no_candidate_lists_all_attempts() {
        let mut loader = FakeLoader::with_libraries(&[]);

        match resolve_entry(&mut loader, &candidates(), &launcher_main()) {
            Err(BootError::TargetLoad { attempts }) => {
                let paths: Vec<&str> = attempts.iter().map(|a| a.path.as_str()).collect();
                assert_eq!(paths, vec!["bin/liblauncher.so", "bin/launcher.so"]);
            }
            other => panic!("unexpected result: {:?}", other.map(|h| h.library)),
        }
    }

    #[test]
    fn missing_symbol_is_reported_separately() {
        let mut loader = FakeLoader::with_libraries(&["bin/liblauncher.so"]);

        match resolve_entry(&mut loader, &candidates(), &launcher_main()) {
            Err(BootError::EntrySymbolMissing { symbol, library, .. }) => {
                assert_eq!(symbol, "LauncherMain");
                assert_eq!(library, "bin/liblauncher.so");
            }
            other => panic!("unexpected result: {:?}", other.map(|h| h.library)),
        }
        // a library that loads is not retried under the next name
        assert_eq!(loader.attempts(), vec!["bin/liblauncher.so"]);
    }

    #[test]
    fn ordinal_lookup_on_loaded_library() {
        let mut loader = FakeLoader::with_libraries(&["d:/bin/launcher_360.dll"]).exporting("#1");
        let module = loader.open(&PathBuf::from("d:/bin/launcher_360.dll")).unwrap();
        let loaded = LoadedLibrary {
            name: "launcher_360.dll".to_string(),
            path: PathBuf::from("d:/bin/launcher_360.dll"),
            module,
        };

        let handle = entry_from_loaded(&loader, loaded, &EntrySymbol::Ordinal(1)).unwrap();
        assert_eq!(handle.entry, "d:/bin/launcher_360.dll!#1");
    }
}
