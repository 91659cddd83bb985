//! Dynamic symbol resolution.
//!
//! A single uniform call: given a previously obtained module handle and a
//! symbol name, return the callable address, or `None` if the module does
//! not export the symbol. Loading and unloading modules is the caller's
//! responsibility; only lookup lives here. A miss is an ordinary outcome,
//! never fatal.
#![allow(unsafe_code)]

use std::ffi::{CStr, c_void};
use std::ptr::NonNull;

/// A module handle as produced by the platform loader
/// (`dlopen` on unix, `LoadLibrary` on Windows).
#[cfg(unix)]
pub type RawModuleHandle = *mut c_void;

/// A module handle as produced by the platform loader
/// (`dlopen` on unix, `LoadLibrary` on Windows).
#[cfg(windows)]
pub type RawModuleHandle = windows_sys::Win32::Foundation::HMODULE;

/// Address of a resolved symbol.
pub type SymbolAddr = NonNull<c_void>;

/// Look up `name` in the module behind `handle`.
///
/// Returns `None` when the symbol is absent. The returned address stays
/// valid only while the module remains loaded.
///
/// # Safety
///
/// `handle` must be a live module handle obtained from the platform loader.
#[cfg(unix)]
pub unsafe fn resolve(handle: RawModuleHandle, name: &CStr) -> Option<SymbolAddr> {
    // SAFETY: forwarded from the caller's contract; dlsym only reads the
    // module's symbol table.
    NonNull::new(unsafe { libc::dlsym(handle, name.as_ptr()) })
}

/// Look up `name` in the module behind `handle`.
///
/// Returns `None` when the symbol is absent. The returned address stays
/// valid only while the module remains loaded.
///
/// # Safety
///
/// `handle` must be a live module handle obtained from the platform loader.
#[cfg(windows)]
pub unsafe fn resolve(handle: RawModuleHandle, name: &CStr) -> Option<SymbolAddr> {
    use windows_sys::Win32::System::LibraryLoader::GetProcAddress;
    // SAFETY: forwarded from the caller's contract; GetProcAddress only
    // reads the module's export table.
    let proc = unsafe { GetProcAddress(handle, name.as_ptr().cast()) }?;
    NonNull::new(proc as usize as *mut c_void)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::ptr;

    struct OwnedModule(RawModuleHandle);

    impl OwnedModule {
        /// Handle covering the running program and its dependencies.
        fn for_self() -> Self {
            // SAFETY: a null path asks the loader for the main program.
            let handle = unsafe { libc::dlopen(ptr::null(), libc::RTLD_NOW) };
            assert!(!handle.is_null());
            Self(handle)
        }
    }

    impl Drop for OwnedModule {
        fn drop(&mut self) {
            // SAFETY: handle came from dlopen and is closed exactly once.
            unsafe { libc::dlclose(self.0) };
        }
    }

    #[test]
    fn resolves_a_libc_export() {
        let module = OwnedModule::for_self();
        // SAFETY: the handle is live for the duration of the call.
        let addr = unsafe { resolve(module.0, c"strlen") };
        assert!(addr.is_some());
    }

    #[test]
    fn missing_symbol_is_none_not_fatal() {
        let module = OwnedModule::for_self();
        // SAFETY: the handle is live for the duration of the call.
        let addr = unsafe { resolve(module.0, c"sysplane_no_such_symbol") };
        assert!(addr.is_none());
    }
}
