//! Loader type definitions

use serde::{Deserialize, Serialize};
use std::ffi::{c_char, c_int, c_void};
use std::fmt;
use std::path::{Path, PathBuf};

/// One entry of an ordered dependency list
///
/// List order is load order: an entry may use symbols of any entry before it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LibrarySpec {
    pub name: String,
    #[serde(default = "default_required")]
    pub required: bool,
}

fn default_required() -> bool {
    true
}

impl LibrarySpec {
    pub fn required(name: &str) -> Self {
        LibrarySpec {
            name: name.to_string(),
            required: true,
        }
    }

    pub fn optional(name: &str) -> Self {
        LibrarySpec {
            name: name.to_string(),
            required: false,
        }
    }
}

/// How the entry point is looked up in the target library
#[derive(Clone, Debug, PartialEq)]
pub enum EntrySymbol {
    Name(String),
    Ordinal(u16),
}

impl fmt::Display for EntrySymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntrySymbol::Name(name) => write!(f, "{}", name),
            EntrySymbol::Ordinal(ordinal) => write!(f, "#{}", ordinal),
        }
    }
}

/// Entry taking the process argument vector
pub type LauncherMainArgv = unsafe extern "C" fn(c_int, *mut *mut c_char) -> c_int;

/// Entry taking an instance handle, a previous-instance handle, the command line and a show flag
pub type LauncherMainCmdLine =
    unsafe extern "system" fn(*mut c_void, *mut c_void, *mut c_char, c_int) -> c_int;

/// Opens libraries and looks up entry points in them.
///
/// Modules handed out by `open` stay loaded for the rest of the process.
pub trait ModuleLoader {
    type Module;
    type Entry;

    fn open(&mut self, path: &Path) -> Result<Self::Module, String>;

    fn entry(&self, module: &Self::Module, symbol: &EntrySymbol) -> Result<Self::Entry, String>;
}

/// A library that was loaded successfully
#[derive(Debug)]
pub struct LoadedLibrary<M> {
    pub name: String,
    pub path: PathBuf,
    pub module: M,
}

/// The target library plus its resolved entry function
///
/// Owned by the bootstrap until the process ends; never released.
#[derive(Debug)]
pub struct EntryPointHandle<M, F> {
    pub library: PathBuf,
    pub module: M,
    pub entry: F,
}
