//! Status screen model
//!
//! One label: the native core version, or a fixed fallback when the library
//! is unavailable.

use crate::bridge::CoreVersionSource;
use crate::error::Result;
use std::fmt;
use tracing::debug;

/// Prefix shown before the version string
pub const STATUS_PREFIX: &str = "Status: ";

/// Label shown when the native library is unavailable
pub const FALLBACK_STATUS: &str = "Native lib not loaded";

/// What the screen shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Native core answered
    Ready(String),
    /// Library could not be loaded or linked
    Unavailable,
}

impl Status {
    /// Map a bridge result to a screen status
    pub fn from_result(result: Result<String>) -> Self {
        match result {
            Ok(version) => Self::Ready(version),
            Err(_) => Self::Unavailable,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready(version) => write!(f, "{}{}", STATUS_PREFIX, version),
            Self::Unavailable => f.write_str(FALLBACK_STATUS),
        }
    }
}

/// Screen bound to a version source
pub struct StatusScreen<'a, S: CoreVersionSource + ?Sized> {
    source: &'a S,
}

impl<'a, S: CoreVersionSource + ?Sized> StatusScreen<'a, S> {
    /// Create a screen reading from `source`
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Query the source once
    pub fn status(&self) -> Status {
        let result = self.source.core_version();
        if let Err(err) = &result {
            debug!("Rendering fallback status: {}", err);
        }
        Status::from_result(result)
    }

    /// Render the label text
    pub fn render(&self) -> String {
        self.status().to_string()
    }
}
