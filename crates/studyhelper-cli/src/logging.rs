//! Log sink for the CLI.
//!
//! One file per day under `<data-dir>/logs/`, written through a single
//! mutex-guarded handle. Falls back to stderr when file logging is off.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use chrono::Local;
use studyhelper_core::storage::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` overrides the configured level.
pub fn init(config: &LoggingConfig, data_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if config.to_file {
        let dir = data_dir.join("logs");
        fs::create_dir_all(&dir)?;
        let path = dir.join(format!("{}.log", Local::now().format("%Y-%m-%d")));
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init()
            .map_err(|e| e.to_string())?;
    } else {
        builder
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| e.to_string())?;
    }
    Ok(())
}
