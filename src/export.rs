//! Plain-text task list snapshots

use chrono::NaiveDateTime;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};
use tracing::{info, warn};

use crate::store::Result;

pub const HEADER: &str = "=== TASK LIST ===";

pub fn snapshot_filename(timestamp: NaiveDateTime) -> String {
    format!("tasks_{}.txt", timestamp.format("%Y%m%d_%H%M%S"))
}

pub fn render_snapshot(tasks: &[String], timestamp: NaiveDateTime) -> String {
    let body: String = tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| format!("{}. {}\n", idx + 1, task))
        .collect();
    format!(
        "{}\nExported: {}\n\n{}",
        HEADER,
        timestamp.format("%Y-%m-%d %H:%M:%S"),
        body
    )
}

/// Temp file in `dir` whose mode follows the umask like a plainly created
/// file, instead of tempfile's owner-only default.
fn snapshot_temp_file(dir: &Path) -> io::Result<NamedTempFile> {
    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}

/// Write a snapshot into `dir` and return the path of the new file.
///
/// The content goes to a temporary file in the same directory first and is
/// renamed into place, so a failed write never leaves a truncated snapshot
/// under the final name.
pub fn write_snapshot(dir: &Path, tasks: &[String], timestamp: NaiveDateTime) -> Result<PathBuf> {
    let path = dir.join(snapshot_filename(timestamp));
    let content = render_snapshot(tasks, timestamp);

    let mut file = snapshot_temp_file(dir).inspect_err(|e| {
        warn!("Failed to create temp file in {}: {}", dir.display(), e);
    })?;
    file.write_all(content.as_bytes())?;
    file.as_file().sync_all()?;
    file.persist(&path).map_err(|e| e.error)?;

    info!(count = tasks.len(), "exported tasks to {}", path.display());
    Ok(path)
}
