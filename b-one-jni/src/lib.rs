//! B.ONE native core
//!
//! The shared library behind `com.b_one.android.engine.BOneEngine`. It is
//! loaded by the JVM via `System.loadLibrary("b_one_jni")` and by native
//! hosts through the plain C export.
//!
//! ## Exports
//!
//! - `Java_com_b_one_android_engine_BOneEngine_getCoreVersion`: JNI entry
//!   point backing `external fun getCoreVersion(): String`
//! - `b_one_core_version`: C entry point returning a static NUL-terminated
//!   string owned by this library

use jni::objects::JClass;
use jni::sys::jstring;
use jni::JNIEnv;
use std::os::raw::c_char;

/// Core version text, NUL-terminated for the C export.
const CORE_VERSION_NUL: &str = concat!(
    "B.ONE Native Core v",
    env!("CARGO_PKG_VERSION"),
    " - Ready\0"
);

/// Version string reported by the native core.
pub fn core_version() -> &'static str {
    &CORE_VERSION_NUL[..CORE_VERSION_NUL.len() - 1]
}

/// C export of [`core_version`].
///
/// The returned pointer refers to static data inside this library and must
/// not be freed. It stays valid while the library is mapped.
#[no_mangle]
pub extern "C" fn b_one_core_version() -> *const c_char {
    CORE_VERSION_NUL.as_ptr() as *const c_char
}

/// JNI export backing `BOneEngine.getCoreVersion()`.
///
/// Returns `null` if the JVM could not allocate the string; the JVM leaves an
/// `OutOfMemoryError` pending in that case, which surfaces on the Kotlin side.
#[no_mangle]
#[allow(non_snake_case)]
pub extern "system" fn Java_com_b_one_android_engine_BOneEngine_getCoreVersion<'local>(
    env: JNIEnv<'local>,
    _class: JClass<'local>,
) -> jstring {
    match env.new_string(core_version()) {
        Ok(version) => version.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}
