//! Error types

use std::path::PathBuf;

/// Native bridge errors
///
/// Every failure on the path from "find the library" to "get a string back"
/// is a load error. The bridge caches the first one and hands clones to every
/// later caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NativeLoadError {
    /// Library artifact missing or rejected by the OS loader
    #[error("Failed to load native library {}: {reason}", library.display())]
    LibraryNotFound {
        /// Path or file name handed to the loader
        library: PathBuf,
        /// Loader message
        reason: String,
    },

    /// Library loaded but the symbol did not resolve
    #[error("Symbol '{symbol}' not found: {reason}")]
    SymbolNotFound {
        /// Exported symbol name
        symbol: String,
        /// Loader message
        reason: String,
    },

    /// Symbol resolved but returned a null string
    #[error("Symbol '{symbol}' returned null")]
    NullVersion {
        /// Exported symbol name
        symbol: String,
    },
}

/// Result type
pub type Result<T> = std::result::Result<T, NativeLoadError>;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed config file
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
