//! Block parsing: classify document lines, then accumulate them into typed,
//! range-stamped blocks.
//!
//! Parsing is a full re-parse every time - there is no incremental patching
//! against a previous block list. The scan is strictly bounded by document
//! length and never fails; unclassifiable lines fall back to paragraphs.

pub mod block;
pub mod builder;
pub mod classify;
pub mod invariants;
pub mod kinds;

pub use block::{Block, BlockKind, content_hash};
pub use builder::BlockBuilder;
pub use classify::{LineKind, classify_line};

use kinds::TableRow;

/// Parses a full document into its ordered block list.
///
/// Blank lines separate blocks and belong to none; the resulting ranges
/// exactly cover the non-blank lines of the document (see
/// [`invariants::check`]). Empty input yields an empty list.
///
/// Fence state is deliberately not tracked across lines: only the delimiter
/// line itself classifies as code, and interior lines classify by their own
/// surface pattern. Callers must not assume code-fence awareness beyond the
/// opening line.
pub fn parse_document(content: &str) -> Vec<Block> {
    let lines: Vec<&str> = content.lines().collect();
    let table_candidates: Vec<bool> = lines.iter().map(|l| TableRow::is_candidate(l)).collect();

    let mut builder = BlockBuilder::new();
    for (i, line) in lines.iter().enumerate() {
        let adjacent_candidate = (i > 0 && table_candidates[i - 1])
            || (i + 1 < lines.len() && table_candidates[i + 1]);
        let kind = classify_line(line, adjacent_candidate);
        builder.push((i + 1) as u32, kind, line);
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_input_yields_empty_list() {
        assert!(parse_document("").is_empty());
    }

    #[test]
    fn whitespace_only_input_yields_empty_list() {
        assert!(parse_document("\n   \n\n").is_empty());
    }

    #[test]
    fn single_paragraph() {
        let blocks = parse_document("just some text");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::Paragraph);
        assert_eq!(blocks[0].content, "just some text");
        assert_eq!((blocks[0].start_line, blocks[0].end_line), (1, 1));
    }

    #[test]
    fn table_requires_adjacent_pipe_row() {
        let blocks = parse_document("| a | b |\n| - | - |\n| 1 | 2 |");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::Table);

        // A lone pipe-bearing line is just a paragraph.
        let blocks = parse_document("a | b");
        assert_eq!(blocks[0].kind, BlockKind::Paragraph);
    }

    #[test]
    fn fence_interior_is_not_fence_aware() {
        // Only the delimiter lines classify as code; the interior classifies
        // by its own surface pattern.
        let blocks = parse_document("```\n- looks like a list\n```");
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].kind, BlockKind::Code);
        assert_eq!(blocks[1].kind, BlockKind::List);
        assert_eq!(blocks[2].kind, BlockKind::Code);
    }

    #[test]
    fn multi_line_quote_merges() {
        let blocks = parse_document("> first\n> second");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::Blockquote);
        assert_eq!(blocks[0].content, "> first\n> second");
    }

    #[test]
    fn parse_is_idempotent() {
        let content = "# Title\n\nSome text.\n\n- item1\n- item2\n\n---\n\n![alt](a.png)";
        assert_eq!(parse_document(content), parse_document(content));
    }

    #[test]
    fn invariants_hold_across_shapes() {
        for content in [
            "",
            "# Title\n\nSome text.\n\n- item1\n- item2",
            "```\ncode\n```",
            "| a |\n| b |\n\ntext",
            "> quote\n\n---\n\n## Heading\ntext directly below a heading",
            "one\n\n\n\ntwo",
        ] {
            invariants::check(content, &parse_document(content));
        }
    }
}
