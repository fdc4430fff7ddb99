//! Blank-run compaction.
//!
//! Removing blocks tends to leave stacks of empty lines behind where the
//! blocks used to be. This transform bounds those stacks.

use crate::stylesheet::Transform;

/// Default number of consecutive blank lines kept.
pub const DEFAULT_MAX_BLANK_LINES: usize = 2;

/// Collapses runs of blank lines longer than `max_blank_lines`.
///
/// A line is blank when it is empty or whitespace-only. The first
/// `max_blank_lines` lines of a run are kept verbatim and the rest dropped.
/// Non-blank lines always pass through and end the run.
#[derive(Debug, Clone)]
pub struct CompactBlankRuns {
    max_blank_lines: usize,
    collapsed: usize,
}

impl CompactBlankRuns {
    /// Create a compactor. A maximum below 1 is raised to 1.
    pub fn new(max_blank_lines: usize) -> Self {
        Self {
            max_blank_lines: max_blank_lines.max(1),
            collapsed: 0,
        }
    }

    /// Number of blank lines dropped by the last transform.
    pub fn collapsed(&self) -> usize {
        self.collapsed
    }
}

impl Default for CompactBlankRuns {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_BLANK_LINES)
    }
}

impl Transform for CompactBlankRuns {
    fn transform(&mut self, lines: &mut Vec<String>) {
        let before = lines.len();
        let mut run = 0;

        lines.retain(|line| {
            if line.trim().is_empty() {
                run += 1;
                run <= self.max_blank_lines
            } else {
                run = 0;
                true
            }
        });

        self.collapsed = before - lines.len();
    }
}
