//! Opt-in debug logging
//!
//! The terminal is owned by the TUI, so diagnostics go to a file instead of
//! stderr.

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const DEBUG_ENV: &str = "TASKLIST_DEBUG";
const LOG_FILE: &str = "debug.log";
const FALLBACK_LOG_FILE: &str = "tasklist-debug.log";

/// Where debug logs are written: the user cache dir, or the working
/// directory when no cache dir is available.
pub fn log_path() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("tasklist").join(LOG_FILE))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_LOG_FILE))
}

/// Installs a file subscriber when `TASKLIST_DEBUG` is set. Returns the log
/// path when logging was enabled.
pub fn init() -> anyhow::Result<Option<PathBuf>> {
    if std::env::var_os(DEBUG_ENV).is_none() {
        return Ok(None);
    }

    let path = log_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(&path)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tasklist=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(Some(path))
}
