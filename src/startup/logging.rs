//! Log file setup.
//!
//! The terminal UI owns stdout, so all `tracing` output goes to a file.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "jobbot.log";
const DEFAULT_FILTER: &str = "info";

/// `<data-local-dir>/jobbot/jobbot.log`, falling back to the current
/// directory when the platform has no data directory.
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("jobbot"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(LOG_FILE_NAME)
}

/// Open `path` for appending, creating parent directories.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Filter from `RUST_LOG`, or `info` when unset or invalid.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber writing to `path`.
///
/// Returns the path actually used.
pub fn init_logging(path: Option<&Path>) -> io::Result<PathBuf> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_log_path);
    let file = open_log_file(&path)?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init();

    if installed.is_err() {
        // Another subscriber is active (tests); keep it
        tracing::debug!("Global tracing subscriber already set");
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), log_file = %path.display(), "Logging initialized");
    Ok(path)
}
