//! Native library loading over `libloading`
//!
//! Libraries are opened with global symbol visibility so that a library loaded
//! later resolves its imports against the ones loaded before it, then leaked:
//! nothing loaded by the bootstrap is ever unloaded.

use crate::loader::types::{EntrySymbol, ModuleLoader};

use std::marker::PhantomData;
use std::path::Path;

#[cfg(unix)]
pub type NativeLibrary = libloading::os::unix::Library;

#[cfg(windows)]
pub type NativeLibrary = libloading::os::windows::Library;

#[cfg(unix)]
fn open_global(path: &Path) -> Result<NativeLibrary, libloading::Error> {
    use libloading::os::unix::{RTLD_GLOBAL, RTLD_NOW};
    unsafe { NativeLibrary::open(Some(path), RTLD_NOW | RTLD_GLOBAL) }
}

#[cfg(windows)]
fn open_global(path: &Path) -> Result<NativeLibrary, libloading::Error> {
    use libloading::os::windows::LOAD_WITH_ALTERED_SEARCH_PATH;
    unsafe { NativeLibrary::load_with_flags(path, LOAD_WITH_ALTERED_SEARCH_PATH) }
}

#[cfg(unix)]
fn lookup_ordinal<F: Copy>(_library: &NativeLibrary, ordinal: u16) -> Result<F, String> {
    Err(format!(
        "export ordinal {} requested, but ordinals are not supported on this platform",
        ordinal
    ))
}

#[cfg(windows)]
fn lookup_ordinal<F: Copy>(library: &NativeLibrary, ordinal: u16) -> Result<F, String> {
    unsafe { library.get_ordinal::<F>(ordinal) }
        .map(|symbol| *symbol)
        .map_err(|e| e.to_string())
}

/// Loads libraries from disk and resolves entry points of type `F`.
pub struct DynamicLoader<F> {
    _entry: PhantomData<F>,
}

impl<F: Copy> DynamicLoader<F> {
    /// # Safety
    ///
    /// `F` must be a function pointer type whose signature matches every entry
    /// symbol resolved through this loader.
    pub unsafe fn new() -> Self {
        DynamicLoader {
            _entry: PhantomData,
        }
    }
}

impl<F: Copy> ModuleLoader for DynamicLoader<F> {
    type Module = &'static NativeLibrary;
    type Entry = F;

    fn open(&mut self, path: &Path) -> Result<Self::Module, String> {
        let library = open_global(path).map_err(|e| e.to_string())?;
        Ok(Box::leak(Box::new(library)))
    }

    fn entry(&self, module: &Self::Module, symbol: &EntrySymbol) -> Result<F, String> {
        match symbol {
            EntrySymbol::Name(name) => unsafe { module.get::<F>(name.as_bytes()) }
                .map(|symbol| *symbol)
                .map_err(|e| e.to_string()),
            EntrySymbol::Ordinal(ordinal) => lookup_ordinal::<F>(module, *ordinal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::types::LauncherMainArgv;

    #[test]
    fn missing_library_reports_loader_diagnostic() {
        let mut loader = unsafe { DynamicLoader::<LauncherMainArgv>::new() };
        let err = loader
            .open(Path::new("/nonexistent/bin/liblauncher.so"))
            .unwrap_err();
        assert!(!err.is_empty());
    }
}
