//! Engine configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Logical name of the native core library
pub const DEFAULT_LIBRARY_NAME: &str = "b_one_jni";

/// C symbol returning the core version string
pub const DEFAULT_VERSION_SYMBOL: &str = "b_one_core_version";

/// Extra library search directories, in platform path-list syntax
pub const LIBRARY_PATH_ENV: &str = "B_ONE_LIBRARY_PATH";

/// Explicit library artifact path
pub const NATIVE_LIB_ENV: &str = "B_ONE_NATIVE_LIB";

/// Where and what the bridge loads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Logical library name, mapped to a platform file name before loading
    pub library_name: String,
    /// Explicit artifact path (skips the search)
    pub library_path: Option<PathBuf>,
    /// Directories probed, in order, before the OS loader's own search
    pub search_paths: Vec<PathBuf>,
    /// Exported version symbol
    pub version_symbol: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            library_name: DEFAULT_LIBRARY_NAME.to_string(),
            library_path: None,
            search_paths: Vec::new(),
            version_symbol: DEFAULT_VERSION_SYMBOL.to_string(),
        }
    }
}

impl EngineConfig {
    /// Defaults with environment overrides applied
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Load from a JSON file; missing fields take their defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Parse from a JSON string
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Apply `B_ONE_NATIVE_LIB` and `B_ONE_LIBRARY_PATH`
    ///
    /// An explicit path from the environment replaces the configured one.
    /// Directories from the environment are appended after the configured
    /// search paths.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(path) = env::var_os(NATIVE_LIB_ENV).filter(|v| !v.is_empty()) {
            self.library_path = Some(PathBuf::from(path));
        }
        if let Some(paths) = env::var_os(LIBRARY_PATH_ENV) {
            self.search_paths.extend(
                env::split_paths(&paths).filter(|p| !p.as_os_str().is_empty()),
            );
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.library_name, "b_one_jni");
        assert_eq!(config.version_symbol, "b_one_core_version");
        assert!(config.library_path.is_none());
        assert!(config.search_paths.is_empty());
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let config = EngineConfig::from_json(r#"{"search_paths": ["/opt/b_one/lib"]}"#).unwrap();
        assert_eq!(config.library_name, DEFAULT_LIBRARY_NAME);
        assert_eq!(config.search_paths, vec![PathBuf::from("/opt/b_one/lib")]);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"library_name": "core_test", "library_path": "/tmp/libcore_test.so"}}"#
        )
        .unwrap();

        let config = EngineConfig::load(file.path()).unwrap();
        assert_eq!(config.library_name, "core_test");
        assert_eq!(config.library_path, Some(PathBuf::from("/tmp/libcore_test.so")));
        assert_eq!(config.version_symbol, DEFAULT_VERSION_SYMBOL);
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "library_name = 'not json'").unwrap();

        let err = EngineConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = EngineConfig::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
