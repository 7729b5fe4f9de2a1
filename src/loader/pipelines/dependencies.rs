//! Ordered dependency loading

use crate::config::LibraryNaming;
use crate::error::BootError;
use crate::loader::pure::naming::{dependency_file_name, join_path};
use crate::loader::types::{LibrarySpec, LoadedLibrary, ModuleLoader};

use log::{debug, info, warn};
use std::path::PathBuf;

/// Where dependency libraries are looked for
pub struct DependencyLayout<'a> {
    /// Roots in search order; the first root holding a library wins
    pub roots: &'a [String],
    pub library_dir: &'a str,
    pub separator: char,
    pub naming: &'a LibraryNaming,
}

impl DependencyLayout<'_> {
    /// Candidate paths for one library, one per root, in search order.
    pub fn candidates(&self, spec: &LibrarySpec) -> Vec<String> {
        let file = dependency_file_name(&spec.name, self.naming);
        self.roots
            .iter()
            .map(|root| join_path(root, &[self.library_dir, &file], self.separator))
            .collect()
    }
}

/// Load every library of `specs` strictly in list order.
///
/// Each library is tried under every root before its required/optional policy
/// applies. A required library that cannot be loaded stops the sequence at once;
/// an optional one is logged and skipped. Only successfully loaded libraries are
/// returned.
pub fn load_dependencies<L: ModuleLoader>(
    loader: &mut L,
    specs: &[LibrarySpec],
    layout: &DependencyLayout,
) -> Result<Vec<LoadedLibrary<L::Module>>, BootError> {
    let mut loaded = Vec::with_capacity(specs.len());

    for spec in specs {
        let mut last_failure: Option<(String, String)> = None;
        let mut module = None;

        for candidate in layout.candidates(spec) {
            match loader.open(&PathBuf::from(&candidate)) {
                Ok(m) => {
                    module = Some((candidate, m));
                    break;
                }
                Err(reason) => {
                    debug!("{} not loadable from {}: {}", spec.name, candidate, reason);
                    last_failure = Some((candidate, reason));
                }
            }
        }

        match module {
            Some((path, module)) => {
                info!("Loaded {} from {}", spec.name, path);
                loaded.push(LoadedLibrary {
                    name: spec.name.clone(),
                    path: PathBuf::from(path),
                    module,
                });
            }
            None => {
                let (path, reason) = last_failure
                    .unwrap_or_else(|| (String::new(), "no search path available".to_string()));
                if spec.required {
                    return Err(BootError::RequiredDependency {
                        name: spec.name.clone(),
                        path,
                        reason,
                    });
                }
                warn!("Optional library {} not loaded ({}): {}", spec.name, path, reason);
            }
        }
    }

    Ok(loaded)
}
