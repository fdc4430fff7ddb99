//! Brace tallying for single lines.
//!
//! Everything above this module treats a stylesheet as lines and only ever
//! asks two questions of a line: does it mention `@media`, and how many curly
//! braces does it open and close. Braces inside strings or comments are
//! counted like any other.

/// The at-rule token that marks the start of a media block.
pub const MEDIA_TOKEN: &str = "@media";

/// Whether the line mentions the `@media` token anywhere.
pub fn is_media_line(line: &str) -> bool {
    line.contains(MEDIA_TOKEN)
}

/// Opening and closing brace counts of a single line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BraceTally {
    pub opens: usize,
    pub closes: usize,
}

impl BraceTally {
    /// Count the braces in `line`.
    pub fn of(line: &str) -> Self {
        line.chars().fold(Self::default(), |mut tally, c| {
            match c {
                '{' => tally.opens += 1,
                '}' => tally.closes += 1,
                _ => {}
            }
            tally
        })
    }

    /// Net change this line applies to a running brace counter.
    pub fn delta(&self) -> i64 {
        self.opens as i64 - self.closes as i64
    }

    pub fn has_open(&self) -> bool {
        self.opens > 0
    }

    pub fn has_close(&self) -> bool {
        self.closes > 0
    }
}
