use super::kinds::{BlockQuote, CodeFence, Heading, Image, ListItem, TableRow, ThematicBreak};

/// Classification of a single line.
///
/// Each line is classified by ordered pattern checks against local facts
/// only; the sole piece of context is whether an adjacent line could also be
/// a table row, which the caller supplies (the one-line lookahead).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Whitespace-only separator line, belongs to no block.
    Blank,
    /// ATX heading with its depth.
    Heading { level: u8 },
    /// Fenced code delimiter (opening or closing; the classifier cannot tell
    /// them apart and does not try).
    Fence,
    /// Bullet or ordered list item.
    ListItem,
    /// `>`-prefixed quote line.
    BlockQuote,
    /// Pipe row confirmed by an adjacent pipe row.
    TableRow,
    /// Thematic break.
    ThematicBreak,
    /// A line that is only an image reference.
    Image,
    /// Anything else.
    Paragraph,
}

/// Classifies a line by ordered pattern checks, highest priority first.
///
/// The order is part of the contract: a `- - -` line is a thematic break only
/// because the list check rejects it first, and a pipe-bearing heading is a
/// heading because the table check never sees it.
pub fn classify_line(line: &str, adjacent_is_table_candidate: bool) -> LineKind {
    if line.trim().is_empty() {
        return LineKind::Blank;
    }
    if let Some(level) = Heading::level(line) {
        return LineKind::Heading { level };
    }
    if CodeFence::is_delimiter(line) {
        return LineKind::Fence;
    }
    if ListItem::is_item(line) {
        return LineKind::ListItem;
    }
    if BlockQuote::is_quote(line) {
        return LineKind::BlockQuote;
    }
    if TableRow::confirmed(line, adjacent_is_table_candidate) {
        return LineKind::TableRow;
    }
    if ThematicBreak::is_break(line) {
        return LineKind::ThematicBreak;
    }
    if Image::is_image_line(line) {
        return LineKind::Image;
    }
    LineKind::Paragraph
}
