//! Stylesheet discovery under a root directory.
//!
//! Only two levels are looked at: the direct children of the root, and the
//! direct children of each named subdirectory. Nothing deeper is visited.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StripError;

/// Which files to pick up under a root directory.
#[derive(Debug, Clone)]
pub struct Discovery {
    /// Subdirectories of the root whose direct children are also matched.
    pub subdirs: Vec<String>,
    /// Extension to match, without the dot. Compared case-sensitively.
    pub extension: String,
}

impl Discovery {
    pub fn new(subdirs: Vec<String>, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        Self {
            subdirs,
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    /// Find matching files, sorted by path.
    ///
    /// The root must exist. Subdirectories that do not exist are skipped.
    pub fn find(&self, root: &Path) -> Result<Vec<PathBuf>, StripError> {
        if !root.is_dir() {
            return Err(StripError::RootNotFound {
                path: root.to_path_buf(),
            });
        }

        let mut found = self.direct_children(root)?;

        for subdir in &self.subdirs {
            let dir = root.join(subdir);
            if dir.is_dir() {
                found.extend(self.direct_children(&dir)?);
            } else {
                tracing::debug!(dir = %dir.display(), "subdirectory missing, skipped");
            }
        }

        found.sort();
        found.dedup();
        Ok(found)
    }

    fn direct_children(&self, dir: &Path) -> Result<Vec<PathBuf>, StripError> {
        let to_error = |source| StripError::Discovery {
            path: dir.to_path_buf(),
            source,
        };

        let mut files = Vec::new();
        for entry in fs::read_dir(dir).map_err(to_error)? {
            let path = entry.map_err(to_error)?.path();
            if path.is_file() && self.matches(&path) {
                files.push(path);
            }
        }
        Ok(files)
    }

    fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext == self.extension)
            .unwrap_or(false)
    }
}
