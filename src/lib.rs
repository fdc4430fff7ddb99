//! mediastrip - remove CSS `@media` blocks by brace-balance scanning.
//!
//! The library is organised as:
//!
//! - [`stylesheet`] - line-based block location, removal and blank-run compaction
//! - [`files`] - stylesheet discovery, backups and in-place rewrite
//! - [`batch`] - blanket removal over many files with per-file error isolation
//! - [`config`] - TOML configuration
//! - [`report`] / [`theme`] - progress output
//! - [`cli`] - command-line definitions

pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod files;
pub mod report;
pub mod stylesheet;
pub mod theme;

pub use config::Config;
pub use error::StripError;
pub use stylesheet::{
    compact_blank_lines, remove_all_media, remove_blocks_at, BlanketOutcome, Stylesheet,
    TargetedOutcome,
};
