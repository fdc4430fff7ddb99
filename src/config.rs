//! Configuration file handling.
//!
//! Everything the tool would otherwise hardcode (stylesheet root, which
//! subdirectories to scan, target line numbers) lives here. Values come from
//! a TOML file and are overridden by command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::StripError;
use crate::stylesheet::DEFAULT_MAX_BLANK_LINES;

const CONFIG_DIR_NAME: &str = "mediastrip";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub blanket: BlanketConfig,
    pub targeted: TargetedConfig,
}

/// Settings for removing every media block under a directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlanketConfig {
    /// Directory holding the stylesheets.
    pub root: PathBuf,
    /// Subdirectories of `root` whose direct children are also processed.
    pub subdirs: Vec<String>,
    /// File extension to match, without the dot.
    pub extension: String,
    /// Copy `root` to a timestamped sibling before touching anything.
    pub backup: bool,
    /// Longest run of blank lines kept after removal.
    pub max_blank_lines: usize,
}

impl Default for BlanketConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("public/css"),
            subdirs: vec!["modules".to_string(), "tokens".to_string()],
            extension: "css".to_string(),
            backup: true,
            max_blank_lines: DEFAULT_MAX_BLANK_LINES,
        }
    }
}

/// Settings for removing media blocks at known line numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetedConfig {
    /// Stylesheet to edit when none is given on the command line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// 1-based lines where the blocks to remove start.
    pub lines: Vec<usize>,
}

impl Config {
    /// Default config file location (`<config dir>/mediastrip/config.toml`).
    pub fn config_path() -> Result<PathBuf, StripError> {
        let dir = dirs::config_dir().ok_or(StripError::NoConfigDir)?;
        Ok(dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load from `path` if given, otherwise from the default location.
    ///
    /// A missing file yields the defaults. A file that exists but does not
    /// parse is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, StripError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::config_path() {
                Ok(path) => path,
                Err(_) => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| StripError::Read {
            path: path.clone(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| StripError::ConfigParse { path, source })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml(&self) -> Result<String, StripError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), StripError> {
        let content = self.to_toml()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| StripError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, content).map_err(|source| StripError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
