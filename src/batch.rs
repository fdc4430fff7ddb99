//! Blanket removal across a set of stylesheets.
//!
//! Files are processed one at a time. A failure in one file is reported and
//! the batch moves on to the next; nothing is rolled back.

use std::path::{Path, PathBuf};

use humansize::{format_size, DECIMAL};

use crate::error::StripError;
use crate::files::{read_stylesheet, write_stylesheet};
use crate::report::Reporter;
use crate::stylesheet::remove_all_media;

/// Options shared by every file in a batch.
#[derive(Debug, Clone, Copy)]
pub struct BatchOptions {
    pub max_blank_lines: usize,
    /// Report what would change without writing.
    pub dry_run: bool,
}

/// What happened to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Media blocks were removed (or would be, in a dry run).
    Cleaned {
        blocks: usize,
        lines_before: usize,
        lines_after: usize,
        bytes_before: usize,
        bytes_after: usize,
    },
    /// No `@media` in the file; left untouched.
    NothingToDo,
}

/// Remove every media block from one file and rewrite it in place.
pub fn process_file(path: &Path, options: BatchOptions) -> Result<FileOutcome, StripError> {
    let content = read_stylesheet(path)?;
    let outcome = remove_all_media(&content, options.max_blank_lines);

    if outcome.removed.is_empty() {
        return Ok(FileOutcome::NothingToDo);
    }

    if !options.dry_run {
        write_stylesheet(path, &outcome.content)?;
    }

    Ok(FileOutcome::Cleaned {
        blocks: outcome.removed.len(),
        lines_before: outcome.lines_before,
        lines_after: outcome.lines_after,
        bytes_before: content.len(),
        bytes_after: outcome.content.len(),
    })
}

/// Totals over a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub files: usize,
    pub cleaned: usize,
    pub failed: Vec<PathBuf>,
    pub blocks_removed: usize,
    pub lines_removed: usize,
}

/// Process `files` in order, reporting each under a path relative to `root`.
pub fn run_batch(
    files: &[PathBuf],
    root: &Path,
    options: BatchOptions,
    reporter: &mut Reporter,
) -> BatchSummary {
    let mut summary = BatchSummary {
        files: files.len(),
        ..BatchSummary::default()
    };

    for path in files {
        let display = path.strip_prefix(root).unwrap_or(path).display().to_string();
        reporter.info(&display);

        match process_file(path, options) {
            Ok(FileOutcome::NothingToDo) => {
                reporter.detail("✓ No media queries");
            }
            Ok(FileOutcome::Cleaned {
                blocks,
                lines_before,
                lines_after,
                bytes_before,
                bytes_after,
            }) => {
                summary.cleaned += 1;
                summary.blocks_removed += blocks;
                summary.lines_removed += lines_before - lines_after;

                let verb = if options.dry_run {
                    "would be removed"
                } else {
                    "removed"
                };
                reporter.detail(&format!("✓ {} media queries {}", blocks, verb));
                reporter.detail(&format!(
                    "{} → {} lines ({} removed), {} → {}",
                    lines_before,
                    lines_after,
                    lines_before - lines_after,
                    format_size(bytes_before, DECIMAL),
                    format_size(bytes_after, DECIMAL),
                ));
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "file skipped");
                reporter.error(&format!("   ✗ Error: {}", e));
                summary.failed.push(path.clone());
            }
        }
    }

    summary
}
