use serde::{Deserialize, Serialize};

use crate::parsing::Block;

/// A cursor position expressed relative to the block containing it.
///
/// Ephemeral: recomputed on every cursor event and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncPosition {
    /// Id of the containing block.
    pub block_id: String,
    /// Byte offset of the cursor within the block's newline-joined content.
    pub offset: usize,
    /// `offset / content.len()`, clamped to `[0, 1]`. Drives the
    /// proportional landing point inside the rendered element.
    pub percentage: f64,
}

/// Maps a cursor at zero-based `(line, column)` to a position inside the
/// containing block.
///
/// Returns `None` when no block contains the line - a cursor on a blank
/// separator, or a block list stale relative to the live document. That is
/// an expected outcome, not an error: the caller skips the sync.
pub fn locate_position(blocks: &[Block], line: u32, column: u32) -> Option<SyncPosition> {
    let target = line + 1;
    let block = blocks.iter().find(|b| b.contains_line(target))?;

    let line_in_block = (target - block.start_line) as usize;
    let block_lines: Vec<&str> = block.content.lines().collect();
    if line_in_block >= block_lines.len() {
        // Stale ranges: the block claims the line but its content is shorter.
        return None;
    }

    let offset = block_lines[..line_in_block]
        .iter()
        .map(|l| l.len() + 1)
        .sum::<usize>()
        + column as usize;

    // Block lines are never empty (blank lines close blocks), so the
    // denominator is always positive.
    let percentage = (offset as f64 / block.content.len() as f64).min(1.0);

    Some(SyncPosition {
        block_id: block.id.clone(),
        offset,
        percentage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_document;

    #[test]
    fn cursor_inside_heading() {
        let blocks = parse_document("# Title\n\nSome text.");
        let pos = locate_position(&blocks, 0, 2).expect("cursor is inside the heading");
        assert_eq!(pos.block_id, blocks[0].id);
        assert_eq!(pos.offset, 2);
        assert_eq!(pos.percentage, 2.0 / 7.0);
    }

    #[test]
    fn cursor_on_blank_separator_misses() {
        let blocks = parse_document("# Title\n\nSome text.");
        assert_eq!(locate_position(&blocks, 1, 0), None);
    }

    #[test]
    fn cursor_past_document_misses() {
        let blocks = parse_document("# Title");
        assert_eq!(locate_position(&blocks, 5, 0), None);
    }

    #[test]
    fn offset_counts_preceding_lines_and_newlines() {
        let blocks = parse_document("- one\n- two");
        // Line 1 (0-based), column 3: "- one\n" is 6 chars, plus 3.
        let pos = locate_position(&blocks, 1, 3).unwrap();
        assert_eq!(pos.offset, 9);
    }

    #[test]
    fn percentage_is_clamped() {
        let blocks = parse_document("ab");
        // Column far past the line end still yields at most 1.0.
        let pos = locate_position(&blocks, 0, 40).unwrap();
        assert_eq!(pos.percentage, 1.0);
    }

    #[test]
    fn percentage_stays_in_bounds_for_every_in_range_cursor() {
        let content = "# Title\n\nSome text.\n\n- item1\n- item2";
        let blocks = parse_document(content);
        for (i, line) in content.lines().enumerate() {
            for col in 0..=line.len() as u32 {
                if let Some(pos) = locate_position(&blocks, i as u32, col) {
                    assert!((0.0..=1.0).contains(&pos.percentage));
                }
            }
        }
    }
}
