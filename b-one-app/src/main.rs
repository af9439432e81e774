//! Terminal host for the B.ONE status screen
//!
//! Loads the native core through the process-wide bridge and prints the
//! status label, the same way the Android activity renders it.

use anyhow::Context;
use b_one_engine::{engine, install, EngineConfig, StatusScreen};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "b-one-app")]
#[command(about = "Show the B.ONE native core status", long_about = None)]
struct Cli {
    /// JSON engine config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Load this library file instead of searching
    #[arg(short = 'l', long)]
    library_path: Option<PathBuf>,

    /// Directory to search for the library (repeatable)
    #[arg(short = 's', long = "search-path")]
    search_paths: Vec<PathBuf>,

    /// Logical library name
    #[arg(long)]
    library_name: Option<String>,

    /// Exported version symbol
    #[arg(long)]
    symbol: Option<String>,
}

impl Cli {
    fn engine_config(self) -> anyhow::Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::load(path)
                .with_context(|| format!("reading config {}", path.display()))?,
            None => EngineConfig::default(),
        };
        config = config.with_env_overrides();

        if let Some(path) = self.library_path {
            config.library_path = Some(path);
        }
        // Command-line directories are probed before configured ones.
        if !self.search_paths.is_empty() {
            let configured = std::mem::take(&mut config.search_paths);
            config.search_paths = self.search_paths;
            config.search_paths.extend(configured);
        }
        if let Some(name) = self.library_name {
            config.library_name = name;
        }
        if let Some(symbol) = self.symbol {
            config.version_symbol = symbol;
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Cli::parse().engine_config()?;
    debug!("Engine config: {:?}", config);
    install(config);

    let label = StatusScreen::new(engine()).render();
    if let Some(path) = engine().library_file() {
        info!("Native core: {}", path.display());
    }
    println!("{label}");

    Ok(())
}
