//! Timestamped directory backups.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::StripError;

/// Timestamp format for backup directory names (one-second resolution).
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Sibling path `<root>.backup.<YYYYMMDD_HHMMSS>` for a backup taken at `at`.
pub fn backup_path(root: &Path, at: DateTime<Local>) -> PathBuf {
    let mut name = root
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "backup".into());
    name.push(format!(".backup.{}", at.format(BACKUP_TIMESTAMP_FORMAT)));
    root.with_file_name(name)
}

/// Copy `root` recursively to a timestamped sibling directory.
///
/// Returns the backup location. A backup taken in the same second as an
/// existing one is merged into it.
pub fn create_backup(root: &Path) -> Result<PathBuf, StripError> {
    let target = backup_path(root, Local::now());
    copy_dir_recursive(root, &target).map_err(|source| StripError::Backup {
        path: root.to_path_buf(),
        source,
    })?;
    tracing::debug!(from = %root.display(), to = %target.display(), "backup created");
    Ok(target)
}

fn copy_dir_recursive(from: &Path, to: &Path) -> io::Result<()> {
    fs::create_dir_all(to)?;
    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let dest = to.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_recursive(&entry.path(), &dest)?;
        } else {
            fs::copy(entry.path(), &dest)?;
        }
    }
    Ok(())
}
