//! Native argument and handle plumbing for entry point calls

use std::ffi::{CString, c_char, c_int, c_void};
use std::ptr;

/// NUL-terminated copy of `s`; interior NULs are dropped.
pub fn c_string(s: &str) -> CString {
    CString::new(s.replace('\0', "")).unwrap_or_default()
}

/// A C `argv`: owned strings plus a NULL-terminated pointer array into them.
pub struct NativeArgv {
    _storage: Vec<CString>,
    pointers: Vec<*mut c_char>,
}

impl NativeArgv {
    pub fn new(args: &[String]) -> Self {
        let storage: Vec<CString> = args.iter().map(|arg| c_string(arg)).collect();
        let mut pointers: Vec<*mut c_char> = storage
            .iter()
            .map(|arg| arg.as_ptr() as *mut c_char)
            .collect();
        pointers.push(ptr::null_mut());
        NativeArgv {
            _storage: storage,
            pointers,
        }
    }

    pub fn argc(&self) -> c_int {
        (self.pointers.len() - 1) as c_int
    }

    pub fn as_mut_ptr(&mut self) -> *mut *mut c_char {
        self.pointers.as_mut_ptr()
    }
}

/// Module handle of the running executable, passed as the instance handle.
#[cfg(windows)]
pub fn module_instance() -> *mut c_void {
    match libloading::os::windows::Library::this() {
        Ok(library) => library.into_raw() as *mut c_void,
        Err(e) => {
            log::warn!("Could not obtain the executable module handle: {}", e);
            ptr::null_mut()
        }
    }
}

#[cfg(not(windows))]
pub fn module_instance() -> *mut c_void {
    ptr::null_mut()
}
