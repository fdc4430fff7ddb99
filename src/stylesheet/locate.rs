//! Media block location by brace balance.
//!
//! Two scanners live here:
//!
//! - [`find_block_end`] starts from a caller-supplied line and assumes the
//!   block sits at the top level (baseline zero).
//! - [`media_blocks`] walks the whole sheet and measures each block against
//!   the ambient nesting depth at the point it was entered, so a media block
//!   nested inside another rule is still delimited correctly.
//!
//! Neither scanner fails. Unbalanced input yields a best-effort span that may
//! run to the last line.

use serde::Serialize;

use super::braces::{is_media_line, BraceTally};
use super::span::BlockSpan;

/// Where a scan started by [`find_block_end`] stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockEnd {
    /// The counter came back to zero on this line.
    Closed(usize),
    /// The input ran out with the block still open. Holds the last line index.
    Unterminated(usize),
    /// No line from the start onward contains `@media`.
    NotStarted,
}

impl BlockEnd {
    /// Index of the last line of the block, if a block was entered.
    pub fn index(self) -> Option<usize> {
        match self {
            BlockEnd::Closed(index) | BlockEnd::Unterminated(index) => Some(index),
            BlockEnd::NotStarted => None,
        }
    }
}

/// Find the line that closes the media block starting at (or shortly after) `start`.
///
/// Counting only begins once a line containing `@media` is seen, so `start`
/// may point a few lines early. The block ends at the first line where the
/// counter is back at zero and the line itself closes a brace. When the input
/// runs out first, the last line index is returned as [`BlockEnd::Unterminated`].
///
/// Returns `None` only when `start` is past the end of `lines`.
pub fn find_block_end<S: AsRef<str>>(lines: &[S], start: usize) -> Option<BlockEnd> {
    if start >= lines.len() {
        return None;
    }

    let mut brace_count: i64 = 0;
    let mut started = false;

    for (index, line) in lines.iter().enumerate().skip(start) {
        let line = line.as_ref();
        if is_media_line(line) {
            started = true;
        }
        if started {
            let tally = BraceTally::of(line);
            brace_count += tally.delta();
            if brace_count == 0 && tally.has_close() {
                return Some(BlockEnd::Closed(index));
            }
        }
    }

    if !started {
        return Some(BlockEnd::NotStarted);
    }

    tracing::debug!(start, "media block never closed, running to end of input");
    Some(BlockEnd::Unterminated(lines.len() - 1))
}

/// A media block discovered by [`media_blocks`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaBlock {
    /// Lines covered, including the `@media` line and the closing brace line.
    pub span: BlockSpan,
    /// The trimmed text of the `@media` line.
    pub query: String,
    /// Brace depth surrounding the block when it was entered.
    pub depth: i64,
    /// False when the input ended before the block closed.
    pub closed: bool,
}

/// Scan state for a block that has been entered but not yet closed.
struct OpenBlock {
    start: usize,
    baseline: i64,
    opened: bool,
    query: String,
}

impl OpenBlock {
    fn is_done(&self, depth: i64) -> bool {
        depth < self.baseline || (self.opened && depth <= self.baseline)
    }

    fn finish(self, end: usize, closed: bool) -> MediaBlock {
        MediaBlock {
            span: BlockSpan::new(self.start, end),
            query: self.query,
            depth: self.baseline,
            closed,
        }
    }
}

/// Find every media block in `lines`, top to bottom.
///
/// The ambient brace depth is tracked across the whole sheet. A line that
/// mentions `@media` while outside any media block starts a new block whose
/// baseline is the depth at that point. The block ends once it has opened a
/// brace and the depth is back at or below the baseline. An `@media` line
/// inside a block is just part of that block.
pub fn media_blocks<S: AsRef<str>>(lines: &[S]) -> Vec<MediaBlock> {
    let mut blocks = Vec::new();
    let mut depth: i64 = 0;
    let mut open: Option<OpenBlock> = None;

    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        let tally = BraceTally::of(line);

        let mut block = match open.take() {
            Some(block) => block,
            None if is_media_line(line) => OpenBlock {
                start: index,
                baseline: depth,
                opened: false,
                query: line.trim().to_string(),
            },
            None => {
                depth += tally.delta();
                continue;
            }
        };

        depth += tally.delta();
        block.opened |= tally.has_open();

        if block.is_done(depth) {
            tracing::debug!(start = block.start, end = index, "media block closed");
            blocks.push(block.finish(index, true));
        } else {
            open = Some(block);
        }
    }

    if let Some(block) = open {
        tracing::debug!(start = block.start, "media block never closed");
        blocks.push(block.finish(lines.len().saturating_sub(1), false));
    }

    blocks
}
