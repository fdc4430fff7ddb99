//! Media block removal for stylesheets.
//!
//! A stylesheet is handled as a plain sequence of lines. Media blocks are
//! found by counting curly braces, never by parsing CSS, and removed by
//! marking their line spans and filtering them out in one pass.
//!
//! # Module Structure
//!
//! - [`braces`] - Per-line brace tallies and `@media` detection
//! - [`span`] - Line spans and the deletion set
//! - [`locate`] - Block-end locator and whole-sheet block discovery
//! - [`transforms`] - Targeted removal, blanket removal, blank-run compaction

pub mod braces;
pub mod locate;
pub mod span;
pub mod transforms;

pub use braces::MEDIA_TOKEN;
pub use locate::{find_block_end, media_blocks, BlockEnd, MediaBlock};
pub use span::{BlockSpan, DeletionSet};
pub use transforms::{
    CompactBlankRuns, LocatedBlock, StripBlocksAt, StripMediaBlocks, DEFAULT_MAX_BLANK_LINES,
};

/// A transform that rewrites the lines of a stylesheet in place.
pub trait Transform {
    fn transform(&mut self, lines: &mut Vec<String>);
}

/// Stylesheet content split into lines.
///
/// Splitting is on `\n` only and joining puts the same separator back, so a
/// sheet that goes through no transform comes back byte for byte. A trailing
/// newline shows up as a final empty line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylesheet {
    lines: Vec<String>,
}

impl Stylesheet {
    pub fn parse(content: &str) -> Self {
        Self {
            lines: content.split('\n').map(String::from).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of `@media` tokens anywhere in the sheet.
    pub fn media_occurrences(&self) -> usize {
        self.lines
            .iter()
            .map(|line| line.matches(MEDIA_TOKEN).count())
            .sum()
    }

    pub fn apply(&mut self, transform: &mut dyn Transform) {
        transform.transform(&mut self.lines);
    }

    pub fn to_content(&self) -> String {
        self.lines.join("\n")
    }
}

/// Result of removing blocks at given line numbers.
#[derive(Debug, Clone)]
pub struct TargetedOutcome {
    pub content: String,
    pub located: Vec<LocatedBlock>,
    pub skipped: Vec<usize>,
    pub unmatched: Vec<usize>,
    pub lines_before: usize,
    pub lines_after: usize,
}

impl TargetedOutcome {
    pub fn removed_lines(&self) -> usize {
        self.lines_before - self.lines_after
    }
}

/// Remove the media blocks starting at the given 1-based line numbers.
pub fn remove_blocks_at(content: &str, line_numbers: &[usize]) -> TargetedOutcome {
    let mut sheet = Stylesheet::parse(content);
    let lines_before = sheet.line_count();

    let mut strip = StripBlocksAt::new(line_numbers.iter().copied());
    sheet.apply(&mut strip);

    TargetedOutcome {
        content: sheet.to_content(),
        located: strip.located().to_vec(),
        skipped: strip.skipped().to_vec(),
        unmatched: strip.unmatched().to_vec(),
        lines_before,
        lines_after: sheet.line_count(),
    }
}

/// Result of removing every media block from a sheet.
#[derive(Debug, Clone)]
pub struct BlanketOutcome {
    pub content: String,
    pub removed: Vec<MediaBlock>,
    pub collapsed_blank_lines: usize,
    pub lines_before: usize,
    pub lines_after: usize,
}

impl BlanketOutcome {
    pub fn removed_lines(&self) -> usize {
        self.lines_before - self.lines_after
    }
}

/// Remove every media block, then bound the blank runs left behind.
pub fn remove_all_media(content: &str, max_blank_lines: usize) -> BlanketOutcome {
    let mut sheet = Stylesheet::parse(content);
    let lines_before = sheet.line_count();

    let mut strip = StripMediaBlocks::new();
    let mut compact = CompactBlankRuns::new(max_blank_lines);
    sheet.apply(&mut strip);
    sheet.apply(&mut compact);

    BlanketOutcome {
        content: sheet.to_content(),
        removed: strip.removed().to_vec(),
        collapsed_blank_lines: compact.collapsed(),
        lines_before,
        lines_after: sheet.line_count(),
    }
}

/// Bound runs of blank lines to `max_blank_lines`.
pub fn compact_blank_lines(content: &str, max_blank_lines: usize) -> String {
    let mut sheet = Stylesheet::parse(content);
    sheet.apply(&mut CompactBlankRuns::new(max_blank_lines));
    sheet.to_content()
}
