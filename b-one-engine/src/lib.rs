//! B.ONE engine bridge
//!
//! Loads the `b_one_jni` native core once per process and exposes its
//! version query, plus the status screen model that renders it.

#![warn(missing_docs)]

pub mod bridge;
pub mod config;
pub mod error;
pub mod library;
pub mod native;
pub mod screen;

pub use bridge::{engine, install, CoreVersionSource, NativeBridge};
pub use config::EngineConfig;
pub use error::{ConfigError, NativeLoadError, Result};
pub use library::{library_file_name, LibraryLocation};
pub use native::NativeLibrary;
pub use screen::{Status, StatusScreen, FALLBACK_STATUS, STATUS_PREFIX};
