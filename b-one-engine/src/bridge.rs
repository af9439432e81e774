//! Native bridge with one-shot load state
//!
//! A bridge moves `Unloaded -> Loaded | LoadFailed` exactly once. The first
//! caller of [`NativeBridge::load`] or [`NativeBridge::core_version`] performs
//! the load under a once-cell guard; every later caller, on any thread, sees
//! the same outcome. There is no reload and no unload.

use crate::config::EngineConfig;
use crate::error::{NativeLoadError, Result};
use crate::library;
use crate::native::NativeLibrary;
use once_cell::sync::OnceCell;
use std::path::Path;
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::{debug, info, warn};

/// Anything that can report the native core version
pub trait CoreVersionSource {
    /// Query the version string
    fn core_version(&self) -> Result<String>;
}

/// Terminal load outcome
#[derive(Debug)]
enum LoadState {
    Loaded(NativeLibrary),
    Failed(NativeLoadError),
}

/// Owned handle to the native core
#[derive(Debug)]
pub struct NativeBridge {
    config: EngineConfig,
    state: OnceCell<LoadState>,
    attempts: AtomicU32,
}

impl NativeBridge {
    /// Create an unloaded bridge
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            state: OnceCell::new(),
            attempts: AtomicU32::new(0),
        }
    }

    /// Configuration this bridge loads from
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Load the library if no attempt has been made yet
    ///
    /// Returns the cached outcome on every later call.
    pub fn load(&self) -> Result<()> {
        match self.state() {
            LoadState::Loaded(_) => Ok(()),
            LoadState::Failed(err) => Err(err.clone()),
        }
    }

    /// Query the version string from the native core
    pub fn core_version(&self) -> Result<String> {
        match self.state() {
            LoadState::Loaded(native) => native.core_version(),
            LoadState::Failed(err) => Err(err.clone()),
        }
    }

    /// Whether the library is loaded (never triggers a load)
    pub fn is_loaded(&self) -> bool {
        matches!(self.state.get(), Some(LoadState::Loaded(_)))
    }

    /// Recorded load failure, if the attempt failed
    pub fn load_error(&self) -> Option<&NativeLoadError> {
        match self.state.get() {
            Some(LoadState::Failed(err)) => Some(err),
            _ => None,
        }
    }

    /// Path the library was loaded from
    pub fn library_file(&self) -> Option<&Path> {
        match self.state.get() {
            Some(LoadState::Loaded(native)) => Some(native.path()),
            _ => None,
        }
    }

    /// Number of load attempts made (0 or 1)
    pub fn load_attempts(&self) -> u32 {
        self.attempts.load(Ordering::Acquire)
    }

    fn state(&self) -> &LoadState {
        self.state.get_or_init(|| {
            self.attempts.fetch_add(1, Ordering::AcqRel);
            self.try_load()
        })
    }

    fn try_load(&self) -> LoadState {
        let location = library::locate(&self.config);
        debug!(
            "Loading native library '{}' from {:?}",
            self.config.library_name, location
        );

        match NativeLibrary::open(location.path(), &self.config.version_symbol) {
            Ok(native) => {
                info!("Native library loaded from {}", native.path().display());
                LoadState::Loaded(native)
            }
            Err(err) => {
                warn!("Native library unavailable: {}", err);
                LoadState::Failed(err)
            }
        }
    }
}

/// Bridge over [`EngineConfig::default`]; the environment is not consulted.
impl Default for NativeBridge {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl CoreVersionSource for NativeBridge {
    fn core_version(&self) -> Result<String> {
        NativeBridge::core_version(self)
    }
}

static ENGINE: OnceCell<NativeBridge> = OnceCell::new();

/// Process-wide bridge
///
/// Configured from the environment unless [`install`] ran first.
pub fn engine() -> &'static NativeBridge {
    ENGINE.get_or_init(|| NativeBridge::new(EngineConfig::from_env()))
}

/// Configure the process-wide bridge
///
/// Returns `false` if the bridge already exists; the config is ignored then.
pub fn install(config: EngineConfig) -> bool {
    let installed = ENGINE.set(NativeBridge::new(config)).is_ok();
    if !installed {
        warn!("Native bridge already initialised; ignoring new config");
    }
    installed
}
