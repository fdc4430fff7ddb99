//! Line spans and the deletion set built from them.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

/// Closed range `[start, end]` of 0-based line indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockSpan {
    pub start: usize,
    pub end: usize,
}

impl BlockSpan {
    /// Create a span. `end` is clamped up to `start` so the span is never inverted.
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    /// Number of lines covered. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// 1-based first line.
    pub fn first_line(&self) -> usize {
        self.start + 1
    }

    /// 1-based last line.
    pub fn last_line(&self) -> usize {
        self.end + 1
    }
}

/// Renders as the 1-based `start-end` range shown in reports.
impl fmt::Display for BlockSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first_line(), self.last_line())
    }
}

/// Line indices marked for removal.
///
/// Spans are accumulated first and applied in a single filtering pass, so
/// overlapping spans never remove a line twice.
#[derive(Debug, Clone, Default)]
pub struct DeletionSet {
    indices: BTreeSet<usize>,
}

impl DeletionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark every index in `span`.
    pub fn mark(&mut self, span: BlockSpan) {
        self.indices.extend(span.start..=span.end);
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Drop the marked lines, keeping the relative order of the rest.
    pub fn apply<T>(&self, lines: &mut Vec<T>) {
        let mut index = 0;
        lines.retain(|_| {
            let keep = !self.contains(index);
            index += 1;
            keep
        });
    }
}

impl FromIterator<BlockSpan> for DeletionSet {
    fn from_iter<I: IntoIterator<Item = BlockSpan>>(iter: I) -> Self {
        let mut set = Self::new();
        for span in iter {
            set.mark(span);
        }
        set
    }
}
