//! Errors for file-level operations.

use std::path::PathBuf;

/// Errors that can occur while reading, rewriting or backing up stylesheets.
#[derive(Debug, thiserror::Error)]
pub enum StripError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Stylesheet directory not found: {path}")]
    RootNotFound { path: PathBuf },

    #[error("Failed to list {path}: {source}")]
    Discovery {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Backup of {path} failed: {source}")]
    Backup {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Could not determine config directory")]
    NoConfigDir,
}
