//! Command-line interface definitions.
//!
//! Lives in the library so the man page generator can reach it.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Version string: crate version plus git SHA and build date on dev builds.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("MEDIASTRIP_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(
    name = "mediastrip",
    version,
    long_version = LONG_VERSION,
    about = "Remove CSS @media blocks from stylesheets by brace-balance scanning"
)]
pub struct Cli {
    /// Config file (default: <config dir>/mediastrip/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Remove the media blocks starting at the given line numbers
    #[command(long_about = "Remove the media blocks starting at the given 1-based line numbers.\n\n\
        All blocks are located against the file as it is now, then removed together. \
        No backup is taken.")]
    Targeted {
        /// Stylesheet to edit (default: [targeted].file from config)
        file: Option<PathBuf>,

        /// 1-based line where a block starts (repeatable; default: [targeted].lines)
        #[arg(short, long = "line", value_name = "N", value_delimiter = ',')]
        lines: Vec<usize>,

        /// Report what would be removed without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Remove every media block from all stylesheets under a directory
    Blanket {
        /// Stylesheet directory (default: [blanket].root from config)
        root: Option<PathBuf>,

        /// Subdirectory whose stylesheets are also processed (repeatable)
        #[arg(long = "subdir", value_name = "NAME")]
        subdirs: Vec<String>,

        /// File extension to match
        #[arg(long, value_name = "EXT")]
        ext: Option<String>,

        /// Skip the timestamped backup of the directory
        #[arg(long)]
        no_backup: bool,

        /// Longest run of blank lines kept after removal
        #[arg(long, value_name = "N")]
        max_blank_lines: Option<usize>,

        /// Report what would be removed without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Collapse long runs of blank lines
    Compact {
        /// Stylesheets to compact
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Longest run of blank lines kept
        #[arg(long, value_name = "N")]
        max_blank_lines: Option<usize>,

        /// Report what would change without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// List the media blocks in a stylesheet without changing it
    Locate {
        /// Stylesheet to scan
        file: PathBuf,

        /// Output JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or initialize the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Print a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
