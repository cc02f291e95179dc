//! Heading outline derived from the block list.

use serde::{Deserialize, Serialize};

use crate::parsing::{Block, BlockKind};
use crate::parsing::kinds::Heading;

/// One heading in the document outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TocEntry {
    /// Heading depth, 1-6.
    pub level: u8,
    /// Heading text with marker runs stripped.
    pub text: String,
    /// Id of the backing block, for jump-to-block navigation.
    pub block_id: String,
    /// 1-based source line of the heading.
    pub start_line: u32,
}

/// Flattens the heading blocks into an ordered outline.
///
/// Multi-line heading blocks (same-level headings on consecutive lines)
/// contribute one entry per line.
pub fn outline(blocks: &[Block]) -> Vec<TocEntry> {
    let mut entries = Vec::new();
    for block in blocks {
        let BlockKind::Heading { level } = block.kind else {
            continue;
        };
        for (i, line) in block.content.lines().enumerate() {
            entries.push(TocEntry {
                level,
                text: Heading::strip_markers(line).to_string(),
                block_id: block.id.clone(),
                start_line: block.start_line + i as u32,
            });
        }
    }
    entries
}
