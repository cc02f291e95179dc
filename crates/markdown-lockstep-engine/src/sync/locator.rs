use crate::parsing::{Block, BlockKind};
use crate::parsing::kinds::{CodeFence, Heading};
use crate::surface::{ElementId, PreviewSurface};

/// How much of a block's text takes part in content-similarity matching.
pub const SIGNATURE_LEN: usize = 50;

/// Every tag the engine treats as block-level, for viewport scans.
pub const ALL_BLOCK_TAGS: &[&str] = &[
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "p",
    "pre",
    "code",
    "ul",
    "ol",
    "blockquote",
    "table",
    "hr",
    "img",
];

/// Tags that can host a block of the given kind in the rendered tree.
pub fn tags_for_kind(kind: BlockKind) -> &'static [&'static str] {
    match kind {
        BlockKind::Heading { level } => match level {
            1 => &["h1"],
            2 => &["h2"],
            3 => &["h3"],
            4 => &["h4"],
            5 => &["h5"],
            _ => &["h6"],
        },
        BlockKind::Code => &["pre", "code"],
        BlockKind::List => &["ul", "ol"],
        BlockKind::Blockquote => &["blockquote"],
        BlockKind::Table => &["table"],
        BlockKind::HorizontalRule => &["hr"],
        BlockKind::Image => &["img"],
        BlockKind::Paragraph => &["p"],
    }
}

/// The text a block is matched by: the first [`SIGNATURE_LEN`] characters of
/// its content with markup stripped - heading markers for headings, fence
/// delimiter lines for code blocks.
pub fn match_signature(block: &Block) -> String {
    let stripped = match block.kind {
        BlockKind::Heading { .. } => Heading::strip_markers(&block.content).to_string(),
        BlockKind::Code => {
            let all: Vec<&str> = block.content.lines().collect();
            let mut lines: &[&str] = &all;
            if let Some((first, rest)) = lines.split_first()
                && CodeFence::is_delimiter(first)
            {
                lines = rest;
            }
            if let Some((last, rest)) = lines.split_last()
                && CodeFence::is_delimiter(last)
            {
                lines = rest;
            }
            lines.join("\n")
        }
        _ => block.content.clone(),
    };
    stripped.trim().chars().take(SIGNATURE_LEN).collect()
}

/// Finds the rendered element corresponding to a block.
///
/// Queries elements of the block's tag kind and returns the first whose text
/// contains the block's match signature. Ties from duplicate text are not
/// disambiguated beyond first-found - an accepted imprecision. When no
/// candidate matches by content, the first element of the right kind is a
/// "same kind of thing" fallback; `None` only when zero such elements exist.
pub fn locate_element<S: PreviewSurface + ?Sized>(block: &Block, surface: &S) -> Option<ElementId> {
    let candidates = surface.elements_by_tag(tags_for_kind(block.kind));
    if candidates.is_empty() {
        tracing::debug!(block = %block.id, "no rendered element of the expected kind");
        return None;
    }

    let signature = match_signature(block);
    for &id in &candidates {
        if let Some(text) = surface.element_text(id)
            && text.trim().contains(&signature)
        {
            return Some(id);
        }
    }

    tracing::debug!(block = %block.id, "no content match, falling back to first of kind");
    candidates.first().copied()
}

/// Reverse direction: matches a rendered element's text back to a block
/// using the same similarity test.
///
/// Blocks whose signature strips to nothing (a bare fence delimiter, a rule)
/// are skipped - an empty signature would match any element.
pub fn block_for_text<'a>(blocks: &'a [Block], element_text: &str) -> Option<&'a Block> {
    let text = element_text.trim();
    blocks.iter().find(|b| {
        let signature = match_signature(b);
        !signature.is_empty() && text.contains(&signature)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_document;

    #[test]
    fn heading_tags_follow_level() {
        assert_eq!(tags_for_kind(BlockKind::Heading { level: 1 }), &["h1"]);
        assert_eq!(tags_for_kind(BlockKind::Heading { level: 6 }), &["h6"]);
        assert_eq!(tags_for_kind(BlockKind::List), &["ul", "ol"]);
    }

    #[test]
    fn signature_strips_heading_markers() {
        let blocks = parse_document("## Section name");
        assert_eq!(match_signature(&blocks[0]), "Section name");
    }

    #[test]
    fn signature_strips_fence_delimiters() {
        let blocks = parse_document("```rust");
        // A bare delimiter block strips to nothing.
        assert_eq!(match_signature(&blocks[0]), "");
    }

    #[test]
    fn signature_truncates_to_fifty_chars() {
        let long = "x".repeat(120);
        let blocks = parse_document(&long);
        assert_eq!(match_signature(&blocks[0]).chars().count(), SIGNATURE_LEN);
    }

    #[test]
    fn reverse_match_skips_empty_signatures() {
        let blocks = parse_document("```\n\nSome text.");
        let found = block_for_text(&blocks, "Some text.").expect("paragraph should match");
        assert_eq!(found.kind, BlockKind::Paragraph);
    }

    #[test]
    fn reverse_match_misses_unknown_text() {
        let blocks = parse_document("# Title");
        assert!(block_for_text(&blocks, "unrelated").is_none());
    }
}
