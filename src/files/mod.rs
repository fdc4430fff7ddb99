//! Filesystem collaborators: discovery, backup, and in-place rewrite.

pub mod backup;
pub mod discover;

use std::fs;
use std::path::Path;

use crate::error::StripError;

pub use backup::{backup_path, create_backup};
pub use discover::Discovery;

/// Read a stylesheet as UTF-8.
pub fn read_stylesheet(path: &Path) -> Result<String, StripError> {
    fs::read_to_string(path).map_err(|source| StripError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Overwrite a stylesheet in place.
pub fn write_stylesheet(path: &Path, content: &str) -> Result<(), StripError> {
    fs::write(path, content).map_err(|source| StripError::Write {
        path: path.to_path_buf(),
        source,
    })
}
