//! Blank-run compaction handler

use std::path::PathBuf;

use anyhow::Result;

use mediastrip::files::{read_stylesheet, write_stylesheet};
use mediastrip::report::Reporter;
use mediastrip::stylesheet::{CompactBlankRuns, Stylesheet};

/// Compact each file in turn. A file that cannot be read or written is
/// reported and skipped.
pub fn handle(
    files: &[PathBuf],
    max_blank_lines: usize,
    dry_run: bool,
    reporter: &mut Reporter,
) -> Result<()> {
    for path in files {
        reporter.info(&path.display().to_string());

        let content = match read_stylesheet(path) {
            Ok(content) => content,
            Err(e) => {
                reporter.error(&format!("   ✗ Error: {}", e));
                continue;
            }
        };

        let mut sheet = Stylesheet::parse(&content);
        let mut compact = CompactBlankRuns::new(max_blank_lines);
        sheet.apply(&mut compact);

        if compact.collapsed() == 0 {
            reporter.detail("✓ Already compact");
            continue;
        }

        if !dry_run {
            if let Err(e) = write_stylesheet(path, &sheet.to_content()) {
                reporter.error(&format!("   ✗ Error: {}", e));
                continue;
            }
        }
        let verb = if dry_run { "would be removed" } else { "removed" };
        reporter.detail(&format!("✓ {} blank lines {}", compact.collapsed(), verb));
    }

    Ok(())
}
