//! Native library artifact resolution
//!
//! Maps a logical library name to the platform file name and decides which
//! path is handed to the OS loader, the way `System.loadLibrary` does.

use crate::config::EngineConfig;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Platform file name for a logical library name
///
/// `b_one_jni` becomes `libb_one_jni.so`, `libb_one_jni.dylib` or
/// `b_one_jni.dll`.
pub fn library_file_name(name: &str) -> String {
    format!(
        "{}{}{}",
        std::env::consts::DLL_PREFIX,
        name,
        std::env::consts::DLL_SUFFIX
    )
}

/// Where the loader should look for the library
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryLocation {
    /// Configured artifact path, used as-is
    Explicit(PathBuf),
    /// Artifact found in one of the search directories
    Found(PathBuf),
    /// Bare file name; the OS loader searches its own paths
    System(PathBuf),
}

impl LibraryLocation {
    /// Path handed to the loader
    pub fn path(&self) -> &Path {
        match self {
            Self::Explicit(path) | Self::Found(path) | Self::System(path) => path,
        }
    }
}

/// Resolve the library location for a config
///
/// Order: explicit path, then each search directory, then the OS loader.
pub fn locate(config: &EngineConfig) -> LibraryLocation {
    if let Some(path) = &config.library_path {
        return LibraryLocation::Explicit(path.clone());
    }

    let file_name = library_file_name(&config.library_name);
    for dir in &config.search_paths {
        let candidate = dir.join(&file_name);
        if candidate.is_file() {
            debug!("Found {} in {}", file_name, dir.display());
            return LibraryLocation::Found(candidate);
        }
        debug!("{} not in {}", file_name, dir.display());
    }

    LibraryLocation::System(PathBuf::from(file_name))
}
