//! Blanket removal handler

use std::path::PathBuf;

use anyhow::{Context, Result};

use mediastrip::batch::{run_batch, BatchOptions};
use mediastrip::files::{create_backup, Discovery};
use mediastrip::report::Reporter;
use mediastrip::Config;

pub struct Args {
    pub root: Option<PathBuf>,
    pub subdirs: Vec<String>,
    pub ext: Option<String>,
    pub no_backup: bool,
    pub max_blank_lines: Option<usize>,
    pub dry_run: bool,
}

/// Remove every media block from the stylesheets under a directory.
///
/// Per-file failures are reported and skipped; the command still succeeds.
pub fn handle(args: Args, config: &Config, reporter: &mut Reporter) -> Result<()> {
    let blanket = &config.blanket;
    let root = args.root.unwrap_or_else(|| blanket.root.clone());
    let subdirs = if args.subdirs.is_empty() {
        blanket.subdirs.clone()
    } else {
        args.subdirs
    };
    let extension = args.ext.unwrap_or_else(|| blanket.extension.clone());
    let options = BatchOptions {
        max_blank_lines: args.max_blank_lines.unwrap_or(blanket.max_blank_lines),
        dry_run: args.dry_run,
    };

    reporter.info(&format!("Removing all media queries under {}", root.display()));
    reporter.blank();

    let files = Discovery::new(subdirs, extension)
        .find(&root)
        .with_context(|| format!("Cannot scan {}", root.display()))?;

    if blanket.backup && !args.no_backup && !args.dry_run {
        match create_backup(&root) {
            Ok(path) => reporter.detail(&format!("Backup created in {}", path.display())),
            Err(e) => reporter.warning(&format!("   ! {}; continuing without backup", e)),
        }
    }

    reporter.info(&format!("{} stylesheets found", files.len()));
    reporter.blank();

    let summary = run_batch(&files, &root, options, reporter);

    reporter.blank();
    if args.dry_run {
        reporter.success("Dry run complete, no files written");
    } else {
        reporter.success("Cleanup complete");
    }
    reporter.detail(&format!("Media queries removed: {}", summary.blocks_removed));
    reporter.detail(&format!("Lines removed: {}", summary.lines_removed));
    reporter.detail(&format!(
        "Files changed: {} of {}",
        summary.cleaned, summary.files
    ));
    if !summary.failed.is_empty() {
        reporter.warning(&format!("   ! {} file(s) failed", summary.failed.len()));
    }

    Ok(())
}
