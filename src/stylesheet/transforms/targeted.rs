//! Removal of media blocks at known line numbers.

use crate::stylesheet::braces::is_media_line;
use crate::stylesheet::locate::{find_block_end, BlockEnd};
use crate::stylesheet::span::{BlockSpan, DeletionSet};
use crate::stylesheet::Transform;

/// A block located from a caller-supplied line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedBlock {
    /// The 1-based line number the caller asked for.
    pub line_number: usize,
    /// Lines marked for deletion, from the requested line to the closing brace.
    pub span: BlockSpan,
    /// Whether the requested line itself contains `@media`.
    ///
    /// When false the line number is probably stale: the locator scanned
    /// forward to the next media block and everything in between goes too.
    pub on_media_line: bool,
}

/// Removes the media blocks starting at the given 1-based line numbers.
///
/// Every block is located against the original numbering before anything is
/// removed, then all marked lines are dropped in one pass.
#[derive(Debug, Clone, Default)]
pub struct StripBlocksAt {
    line_numbers: Vec<usize>,
    located: Vec<LocatedBlock>,
    skipped: Vec<usize>,
    unmatched: Vec<usize>,
    removed_lines: usize,
}

impl StripBlocksAt {
    pub fn new(line_numbers: impl IntoIterator<Item = usize>) -> Self {
        Self {
            line_numbers: line_numbers.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Blocks located during the last transform, in request order.
    pub fn located(&self) -> &[LocatedBlock] {
        &self.located
    }

    /// Requested line numbers that were zero or past the end of the sheet.
    pub fn skipped(&self) -> &[usize] {
        &self.skipped
    }

    /// Requested line numbers with no `@media` line at or after them.
    pub fn unmatched(&self) -> &[usize] {
        &self.unmatched
    }

    /// Number of distinct lines removed by the last transform.
    pub fn removed_lines(&self) -> usize {
        self.removed_lines
    }
}

impl Transform for StripBlocksAt {
    fn transform(&mut self, lines: &mut Vec<String>) {
        self.located.clear();
        self.skipped.clear();
        self.unmatched.clear();

        let mut deletions = DeletionSet::new();

        for &line_number in &self.line_numbers {
            let Some(start) = line_number.checked_sub(1) else {
                self.skipped.push(line_number);
                continue;
            };
            let end = match find_block_end(lines.as_slice(), start) {
                None => {
                    tracing::warn!(line_number, total = lines.len(), "line number out of range");
                    self.skipped.push(line_number);
                    continue;
                }
                Some(BlockEnd::NotStarted) => {
                    tracing::warn!(line_number, "no media block at or after line");
                    self.unmatched.push(line_number);
                    continue;
                }
                Some(BlockEnd::Closed(end)) | Some(BlockEnd::Unterminated(end)) => end,
            };

            let span = BlockSpan::new(start, end);
            deletions.mark(span);
            self.located.push(LocatedBlock {
                line_number,
                span,
                on_media_line: is_media_line(&lines[start]),
            });
        }

        self.removed_lines = deletions.len();
        deletions.apply(lines);
    }
}
