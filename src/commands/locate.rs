//! Media block listing handler

use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use mediastrip::files::read_stylesheet;
use mediastrip::report::Reporter;
use mediastrip::stylesheet::{media_blocks, MediaBlock, Stylesheet};

/// One block as shown to the user, with 1-based line numbers.
#[derive(Serialize)]
struct BlockView<'a> {
    start_line: usize,
    end_line: usize,
    lines: usize,
    query: &'a str,
    depth: i64,
    closed: bool,
}

impl<'a> From<&'a MediaBlock> for BlockView<'a> {
    fn from(block: &'a MediaBlock) -> Self {
        Self {
            start_line: block.span.first_line(),
            end_line: block.span.last_line(),
            lines: block.span.len(),
            query: &block.query,
            depth: block.depth,
            closed: block.closed,
        }
    }
}

/// List every media block in a stylesheet. The file is not modified.
pub fn handle(file: &Path, json: bool, reporter: &mut Reporter) -> Result<()> {
    let content = read_stylesheet(file)?;
    let sheet = Stylesheet::parse(&content);
    let blocks = media_blocks(sheet.lines());

    if json {
        let views: Vec<BlockView> = blocks.iter().map(BlockView::from).collect();
        reporter.raw(&serde_json::to_string_pretty(&views)?);
        return Ok(());
    }

    reporter.info(&format!(
        "{}: {} media blocks in {} lines",
        file.display(),
        blocks.len(),
        sheet.line_count()
    ));
    for block in &blocks {
        let line = format!("{:>11}  {}", block.span.to_string(), block.query);
        if block.closed {
            reporter.detail(&line);
        } else {
            reporter.warning(&format!("   {}  (never closed)", line));
        }
    }

    Ok(())
}
