use serde::{Deserialize, Serialize};

/// The kind of a leaf block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockKind {
    /// An ATX heading with its depth (1-6).
    Heading {
        /// Number of `#` markers.
        level: u8,
    },
    /// A paragraph block (default when no other pattern matches).
    Paragraph,
    /// A fenced code delimiter line and anything merged onto it.
    Code,
    /// A run of bullet or ordered list items.
    List,
    /// A run of `>`-prefixed quote lines.
    Blockquote,
    /// Pipe-separated rows confirmed by the one-line lookahead.
    Table,
    /// A thematic break (`---`, `***`, `___`).
    HorizontalRule,
    /// A line that is only an image reference.
    Image,
}

impl BlockKind {
    /// Stable lowercase name used in block ids and stats.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Heading { .. } => "heading",
            Self::Paragraph => "paragraph",
            Self::Code => "code",
            Self::List => "list",
            Self::Blockquote => "blockquote",
            Self::Table => "table",
            Self::HorizontalRule => "horizontal-rule",
            Self::Image => "image",
        }
    }

    /// Id suffix: the kind name, with the depth appended for headings.
    pub(crate) fn id_suffix(&self) -> String {
        match self {
            Self::Heading { level } => format!("heading{level}"),
            other => other.name().to_string(),
        }
    }
}

/// A contiguous, typed span of source lines - the atomic unit of
/// synchronization between the editing surface and the preview.
///
/// Blocks are produced by [`parse_document`](crate::parsing::parse_document)
/// and replaced wholesale on every content update. The id is derived from the
/// parse-order counter, so it is stable within one parse and best-effort
/// stable across re-parses of structurally similar documents, never
/// guaranteed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// `"block-{counter}-{kind}"`, with the level folded in for headings
    /// (e.g. `"block-0-heading1"`).
    pub id: String,
    /// The kind of this block.
    pub kind: BlockKind,
    /// Newline-joined raw text of the span.
    pub content: String,
    /// First source line of the span, 1-based, inclusive.
    pub start_line: u32,
    /// Last source line of the span, 1-based, inclusive.
    pub end_line: u32,
    /// Base-36 encoded rolling hash of `content`. Informational: carried for
    /// identity debugging, not consulted by the change check.
    pub hash: String,
}

impl Block {
    /// Whether the given 1-based source line falls inside this block's span.
    pub fn contains_line(&self, line: u32) -> bool {
        line >= self.start_line && line <= self.end_line
    }

    /// Number of source lines in the span.
    pub fn line_count(&self) -> usize {
        (self.end_line - self.start_line) as usize + 1
    }

    /// Heading depth, for heading blocks only.
    pub fn level(&self) -> Option<u8> {
        match self.kind {
            BlockKind::Heading { level } => Some(level),
            _ => None,
        }
    }
}

/// Cheap 32-bit polynomial rolling hash of block content, base-36 encoded.
///
/// Collisions are tolerated: the hash identifies a block across re-renders in
/// debug output, it is never used to prove two blocks equal.
pub fn content_hash(content: &str) -> String {
    let mut h: u32 = 0;
    for ch in content.chars() {
        h = h.wrapping_mul(31).wrapping_add(ch as u32);
    }
    to_base36(h)
}

fn to_base36(mut n: u32) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize] as char);
        n /= 36;
    }
    out.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names() {
        assert_eq!(BlockKind::Heading { level: 2 }.name(), "heading");
        assert_eq!(BlockKind::HorizontalRule.name(), "horizontal-rule");
        assert_eq!(BlockKind::Paragraph.name(), "paragraph");
    }

    #[test]
    fn heading_id_suffix_includes_level() {
        assert_eq!(BlockKind::Heading { level: 3 }.id_suffix(), "heading3");
        assert_eq!(BlockKind::List.id_suffix(), "list");
    }

    #[test]
    fn hash_is_deterministic() {
        assert_eq!(content_hash("# Title"), content_hash("# Title"));
        assert_ne!(content_hash("# Title"), content_hash("# Titles"));
    }

    #[test]
    fn hash_of_empty_content() {
        assert_eq!(content_hash(""), "0");
    }

    #[test]
    fn base36_round_numbers() {
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
    }

    #[test]
    fn contains_line_bounds() {
        let block = Block {
            id: "block-0-paragraph".to_string(),
            kind: BlockKind::Paragraph,
            content: "a\nb".to_string(),
            start_line: 3,
            end_line: 4,
            hash: content_hash("a\nb"),
        };
        assert!(!block.contains_line(2));
        assert!(block.contains_line(3));
        assert!(block.contains_line(4));
        assert!(!block.contains_line(5));
        assert_eq!(block.line_count(), 2);
    }
}
