//! Line transforms applied to a stylesheet.

mod blanket;
mod compact;
mod targeted;

pub use blanket::StripMediaBlocks;
pub use compact::{CompactBlankRuns, DEFAULT_MAX_BLANK_LINES};
pub use targeted::{LocatedBlock, StripBlocksAt};
