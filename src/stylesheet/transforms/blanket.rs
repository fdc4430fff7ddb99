//! Removal of every media block in a sheet.

use crate::stylesheet::locate::{media_blocks, MediaBlock};
use crate::stylesheet::span::DeletionSet;
use crate::stylesheet::Transform;

/// Removes every `@media` block, wherever it sits.
///
/// Blocks are delimited relative to the brace depth at which they start, so a
/// media block nested inside `@supports` or another rule goes without taking
/// the enclosing rule's closing brace with it.
#[derive(Debug, Clone, Default)]
pub struct StripMediaBlocks {
    removed: Vec<MediaBlock>,
}

impl StripMediaBlocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blocks removed by the last transform, top to bottom.
    pub fn removed(&self) -> &[MediaBlock] {
        &self.removed
    }
}

impl Transform for StripMediaBlocks {
    fn transform(&mut self, lines: &mut Vec<String>) {
        self.removed = media_blocks(lines.as_slice());
        if self.removed.is_empty() {
            return;
        }

        let deletions: DeletionSet = self.removed.iter().map(|block| block.span).collect();
        deletions.apply(lines);
    }
}
