//! Targeted removal handler

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use mediastrip::files::{read_stylesheet, write_stylesheet};
use mediastrip::report::Reporter;
use mediastrip::{remove_blocks_at, Config};

/// Command-line arguments; missing values fall back to the config.
pub struct Args {
    pub file: Option<PathBuf>,
    pub lines: Vec<usize>,
    pub dry_run: bool,
}

/// Remove the blocks starting at the requested lines of one stylesheet.
///
/// Read and write failures abort the command; no backup is taken.
pub fn handle(args: Args, config: &Config, reporter: &mut Reporter) -> Result<()> {
    let file = args
        .file
        .or_else(|| config.targeted.file.clone())
        .context("No stylesheet given: pass FILE or set [targeted].file in the config")?;

    let lines = if args.lines.is_empty() {
        config.targeted.lines.clone()
    } else {
        args.lines
    };
    if lines.is_empty() {
        bail!("No line numbers given: pass --line or set [targeted].lines in the config");
    }

    let content = read_stylesheet(&file)?;
    let outcome = remove_blocks_at(&content, &lines);

    reporter.info(&format!(
        "{}: {} lines",
        file.display(),
        outcome.lines_before
    ));

    for line_number in &outcome.skipped {
        reporter.warning(&format!(
            "   ! Line {} is out of range (1-{}), skipped",
            line_number, outcome.lines_before
        ));
    }

    for line_number in &outcome.unmatched {
        reporter.warning(&format!(
            "   ! No @media at or after line {}, skipped",
            line_number
        ));
    }

    for block in &outcome.located {
        reporter.detail(&format!("Removing @media block at lines {}", block.span));
        if !block.on_media_line {
            reporter.warning(&format!(
                "   ! Line {} does not contain @media; the line number may be stale",
                block.line_number
            ));
        }
    }

    reporter.info(&format!("Total lines to remove: {}", outcome.removed_lines()));

    if outcome.located.is_empty() {
        reporter.info("Nothing to remove, file left untouched");
        return Ok(());
    }

    if args.dry_run {
        reporter.info("Dry run: file not written");
    } else {
        write_stylesheet(&file, &outcome.content)?;
        reporter.success("File cleaned");
    }

    reporter.detail(&format!("Lines before: {}", outcome.lines_before));
    reporter.detail(&format!("Lines after: {}", outcome.lines_after));
    reporter.detail(&format!("Reduction: {} lines", outcome.removed_lines()));

    Ok(())
}
