//! Loaded native library handle

use crate::error::{NativeLoadError, Result};
use libloading::Library;
use std::ffi::CStr;
use std::os::raw::c_char;
use std::path::{Path, PathBuf};

/// Signature of the exported version symbol
///
/// Returns a NUL-terminated string with static lifetime owned by the
/// library. The caller never frees it.
pub type VersionFn = unsafe extern "C" fn() -> *const c_char;

/// A mapped library with its version symbol resolved
pub struct NativeLibrary {
    // Points into `_library`.
    version_fn: VersionFn,
    symbol: String,
    path: PathBuf,
    _library: Library,
}

impl NativeLibrary {
    /// Map the library at `path` and resolve `symbol`
    pub fn open(path: &Path, symbol: &str) -> Result<Self> {
        // SAFETY: loading runs the library's initialisers. The artifact is the
        // configured native core, which has no initialisers of its own.
        let library = unsafe { Library::new(path) }.map_err(|e| {
            NativeLoadError::LibraryNotFound {
                library: path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;

        // SAFETY: `VersionFn` matches the signature exported by the native core.
        let version_fn = unsafe { library.get::<VersionFn>(symbol.as_bytes()) }
            .map(|sym| *sym)
            .map_err(|e| NativeLoadError::SymbolNotFound {
                symbol: symbol.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            version_fn,
            symbol: symbol.to_string(),
            path: path.to_path_buf(),
            _library: library,
        })
    }

    /// Path the library was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Call the version symbol
    pub fn core_version(&self) -> Result<String> {
        // SAFETY: the library stays mapped for as long as `self` lives.
        unsafe { read_version(self.version_fn, &self.symbol) }
    }
}

impl std::fmt::Debug for NativeLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeLibrary")
            .field("path", &self.path)
            .field("symbol", &self.symbol)
            .finish_non_exhaustive()
    }
}

/// Invoke a version function and copy its result out
///
/// # Safety
///
/// `version_fn` must be callable and return either null or a pointer to a
/// NUL-terminated string that stays valid for the duration of this call.
pub unsafe fn read_version(version_fn: VersionFn, symbol: &str) -> Result<String> {
    let ptr = version_fn();
    if ptr.is_null() {
        return Err(NativeLoadError::NullVersion {
            symbol: symbol.to_string(),
        });
    }
    Ok(CStr::from_ptr(ptr).to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    unsafe extern "C" fn null_version() -> *const c_char {
        std::ptr::null()
    }

    unsafe extern "C" fn latin1_version() -> *const c_char {
        b"v1.0\xff\0".as_ptr() as *const c_char
    }

    unsafe extern "C" fn fixed_version() -> *const c_char {
        b"1.0.3\0".as_ptr() as *const c_char
    }

    #[test]
    fn test_read_version() {
        let version = unsafe { read_version(fixed_version, "fixed") }.unwrap();
        assert_eq!(version, "1.0.3");
    }

    #[test]
    fn test_read_version_null() {
        let err = unsafe { read_version(null_version, "null_version") }.unwrap_err();
        assert_eq!(
            err,
            NativeLoadError::NullVersion {
                symbol: "null_version".to_string()
            }
        );
    }

    #[test]
    fn test_read_version_is_lossy() {
        let version = unsafe { read_version(latin1_version, "latin1") }.unwrap();
        assert_eq!(version, "v1.0\u{fffd}");
    }

    #[test]
    fn test_read_version_from_native_core() {
        let version = unsafe { read_version(b_one_jni::b_one_core_version, "b_one_core_version") }
            .unwrap();
        assert_eq!(version, b_one_jni::core_version());
    }

    #[test]
    fn test_open_missing_library() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("libmissing_core.so");

        let err = NativeLibrary::open(&path, "b_one_core_version").unwrap_err();
        match err {
            NativeLoadError::LibraryNotFound { library, .. } => assert_eq!(library, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_open_rejects_garbage_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(crate::library::library_file_name("b_one_jni"));
        std::fs::write(&path, b"definitely not an object file").unwrap();

        let err = NativeLibrary::open(&path, "b_one_core_version").unwrap_err();
        assert!(matches!(err, NativeLoadError::LibraryNotFound { .. }));
    }

    #[test]
    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    fn test_open_library_without_symbol() {
        let err = NativeLibrary::open(Path::new("libm.so.6"), "b_one_core_version").unwrap_err();
        match err {
            NativeLoadError::SymbolNotFound { symbol, .. } => {
                assert_eq!(symbol, "b_one_core_version")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
