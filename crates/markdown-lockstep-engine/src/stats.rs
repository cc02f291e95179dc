//! Document statistics for status displays.

use serde::{Deserialize, Serialize};

use crate::parsing::{Block, BlockKind};

/// Counts a status bar cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocumentStats {
    pub lines: usize,
    pub words: usize,
    pub blocks: usize,
    pub headings: usize,
    pub code_blocks: usize,
    pub list_blocks: usize,
}

/// Computes statistics over the raw text and its parsed block list.
pub fn document_stats(content: &str, blocks: &[Block]) -> DocumentStats {
    let mut stats = DocumentStats {
        lines: content.lines().count(),
        words: content.split_whitespace().count(),
        blocks: blocks.len(),
        ..DocumentStats::default()
    };
    for block in blocks {
        match block.kind {
            BlockKind::Heading { .. } => stats.headings += 1,
            BlockKind::Code => stats.code_blocks += 1,
            BlockKind::List => stats.list_blocks += 1,
            _ => {}
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_document;

    #[test]
    fn counts_lines_words_and_blocks() {
        let content = "# Title\n\nSome text here.\n\n- item1\n- item2";
        let stats = document_stats(content, &parse_document(content));
        assert_eq!(stats.lines, 6);
        assert_eq!(stats.words, 9);
        assert_eq!(stats.blocks, 3);
        assert_eq!(stats.headings, 1);
        assert_eq!(stats.list_blocks, 1);
        assert_eq!(stats.code_blocks, 0);
    }

    #[test]
    fn empty_document() {
        assert_eq!(document_stats("", &[]), DocumentStats::default());
    }
}
