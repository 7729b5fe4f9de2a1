//! Loader module - dependency loading and entry point resolution
//!
//! ## Module Structure
//! - `types.rs`: Library specs, entry signatures and the `ModuleLoader` seam
//! - `pure/`: File naming and path joining
//! - `operations/`: The `libloading` backed loader
//! - `pipelines/`: Ordered dependency loading, target and entry resolution

mod operations;
mod pipelines;
pub mod pure;
mod types;

// Re-export public API
pub use operations::DynamicLoader;
pub use pipelines::{DependencyLayout, entry_from_loaded, load_dependencies, resolve_entry};
pub use pure::naming::{join_path, target_file_name};
pub use types::{
    EntryPointHandle, EntrySymbol, LauncherMainArgv, LauncherMainCmdLine, LibrarySpec,
    LoadedLibrary, ModuleLoader,
};

#[cfg(test)]
pub mod testing {
    use super::{EntrySymbol, ModuleLoader};
    use std::collections::HashSet;
    use std::path::Path;

    /// In-memory loader: knows a fixed set of library paths and exported symbols,
    /// and records every path it was asked to open.
    pub struct FakeLoader {
        libraries: HashSet<String>,
        exports: HashSet<String>,
        attempts: Vec<String>,
    }

    impl FakeLoader {
        pub fn with_libraries(paths: &[&str]) -> Self {
            FakeLoader {
                libraries: paths.iter().map(|p| p.to_string()).collect(),
                exports: HashSet::new(),
                attempts: Vec::new(),
            }
        }

        pub fn exporting(mut self, symbol: &str) -> Self {
            self.exports.insert(symbol.to_string());
            self
        }

        pub fn attempts(&self) -> Vec<String> {
            self.attempts.clone()
        }
    }

    impl ModuleLoader for FakeLoader {
        type Module = String;
        type Entry = String;

        fn open(&mut self, path: &Path) -> Result<String, String> {
            let path = path.to_string_lossy().to_string();
            self.attempts.push(path.clone());
            if self.libraries.contains(&path) {
                Ok(path)
            } else {
                Err(format!("{}: cannot open shared object file", path))
            }
        }

        fn entry(&self, module: &String, symbol: &EntrySymbol) -> Result<String, String> {
            let symbol = symbol.to_string();
            if self.exports.contains(&symbol) {
                Ok(format!("{}!{}", module, symbol))
            } else {
                Err(format!("{}: undefined symbol: {}", module, symbol))
            }
        }
    }
}
