mod config;
mod shared;

pub use config::{Config, LoggingConfig, StorageConfig, TimerConfig};
pub use shared::Shared;

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Result of loading a store from disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was read and the store now holds this many records.
    Loaded(usize),
    /// No file at the path; the store was left as it was.
    NotFound,
}

/// Replace `path` with `contents` without ever exposing a half-written file.
///
/// The data goes to a `.tmp` sibling first and is renamed over `path` only
/// after it has been flushed to disk.
///
/// # Errors
/// Returns the underlying I/O error. The previous file at `path`, if any,
/// is untouched on failure.
pub fn atomic_write(path: &Path, contents: &str) -> io::Result<()> {
    let tmp = tmp_path(path);
    let result = (|| {
        let mut f = File::create(&tmp)?;
        f.write_all(contents.as_bytes())?;
        f.flush()?;
        f.sync_all()?;
        fs::rename(&tmp, path)
    })();
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

/// Read `path`, mapping "file does not exist" to `Ok(None)`.
pub(crate) fn read_if_exists(path: &Path) -> io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
