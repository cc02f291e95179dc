/// Blockquote prefix detection.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Whether the line starts a quote (leading `>`, indentation allowed).
    pub fn is_quote(line: &str) -> bool {
        line.trim_start().starts_with(Self::PREFIX)
    }
}
