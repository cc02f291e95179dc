use super::block::{Block, BlockKind, content_hash};
use super::classify::LineKind;

/// The in-progress accumulator block.
#[derive(Debug)]
struct OpenBlock {
    kind: BlockKind,
    start_line: u32,
    end_line: u32,
    lines: Vec<String>,
}

/// Builds the block list from classified lines in a single top-to-bottom
/// scan.
///
/// A new block starts whenever the detected kind differs from the
/// accumulator's kind; since heading kinds carry their depth, two headings at
/// different levels also split while same-level heading lines merge. A blank
/// line always closes the accumulator, and [`finish`](Self::finish) closes
/// whatever is still open at end of input.
#[derive(Debug)]
pub struct BlockBuilder {
    current: Option<OpenBlock>,
    counter: usize,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            current: None,
            counter: 0,
            out: vec![],
        }
    }

    /// Feeds one classified line. `line` is 1-based.
    pub fn push(&mut self, line: u32, kind: LineKind, text: &str) {
        let Some(kind) = block_kind(kind) else {
            // Blank separator: close and reset.
            self.flush();
            return;
        };

        match &mut self.current {
            Some(open) if open.kind == kind => {
                open.end_line = line;
                open.lines.push(text.to_string());
            }
            _ => {
                self.flush();
                self.current = Some(OpenBlock {
                    kind,
                    start_line: line,
                    end_line: line,
                    lines: vec![text.to_string()],
                });
            }
        }
    }

    /// Closes any open block and returns the finished list.
    pub fn finish(mut self) -> Vec<Block> {
        self.flush();
        self.out
    }

    fn flush(&mut self) {
        let Some(open) = self.current.take() else {
            return;
        };
        let content = open.lines.join("\n");
        self.out.push(Block {
            id: format!("block-{}-{}", self.counter, open.kind.id_suffix()),
            kind: open.kind,
            hash: content_hash(&content),
            content,
            start_line: open.start_line,
            end_line: open.end_line,
        });
        self.counter += 1;
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a non-blank line kind to the block kind it accumulates into.
fn block_kind(kind: LineKind) -> Option<BlockKind> {
    match kind {
        LineKind::Blank => None,
        LineKind::Heading { level } => Some(BlockKind::Heading { level }),
        LineKind::Fence => Some(BlockKind::Code),
        LineKind::ListItem => Some(BlockKind::List),
        LineKind::BlockQuote => Some(BlockKind::Blockquote),
        LineKind::TableRow => Some(BlockKind::Table),
        LineKind::ThematicBreak => Some(BlockKind::HorizontalRule),
        LineKind::Image => Some(BlockKind::Image),
        LineKind::Paragraph => Some(BlockKind::Paragraph),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line_closes_block() {
        let mut b = BlockBuilder::new();
        b.push(1, LineKind::Paragraph, "one");
        b.push(2, LineKind::Blank, "");
        b.push(3, LineKind::Paragraph, "two");
        let blocks = b.finish();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].content, "one");
        assert_eq!(blocks[1].content, "two");
    }

    #[test]
    fn kind_change_closes_block() {
        let mut b = BlockBuilder::new();
        b.push(1, LineKind::Paragraph, "text");
        b.push(2, LineKind::ListItem, "- item");
        let blocks = b.finish();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].kind, BlockKind::Paragraph);
        assert_eq!(blocks[1].kind, BlockKind::List);
    }

    #[test]
    fn same_kind_lines_merge() {
        let mut b = BlockBuilder::new();
        b.push(1, LineKind::ListItem, "- one");
        b.push(2, LineKind::ListItem, "- two");
        let blocks = b.finish();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content, "- one\n- two");
        assert_eq!((blocks[0].start_line, blocks[0].end_line), (1, 2));
    }

    #[test]
    fn headings_at_different_levels_split() {
        let mut b = BlockBuilder::new();
        b.push(1, LineKind::Heading { level: 1 }, "# A");
        b.push(2, LineKind::Heading { level: 2 }, "## B");
        let blocks = b.finish();
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn headings_at_same_level_merge() {
        let mut b = BlockBuilder::new();
        b.push(1, LineKind::Heading { level: 1 }, "# A");
        b.push(2, LineKind::Heading { level: 1 }, "# B");
        let blocks = b.finish();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content, "# A\n# B");
    }

    #[test]
    fn ids_count_in_parse_order() {
        let mut b = BlockBuilder::new();
        b.push(1, LineKind::Heading { level: 2 }, "## A");
        b.push(2, LineKind::Blank, "");
        b.push(3, LineKind::Paragraph, "text");
        let blocks = b.finish();
        assert_eq!(blocks[0].id, "block-0-heading2");
        assert_eq!(blocks[1].id, "block-1-paragraph");
    }

    #[test]
    fn eof_closes_open_block() {
        let mut b = BlockBuilder::new();
        b.push(1, LineKind::Paragraph, "tail");
        let blocks = b.finish();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].end_line, 1);
    }

    #[test]
    fn empty_input_yields_no_blocks() {
        assert!(BlockBuilder::new().finish().is_empty());
    }
}
