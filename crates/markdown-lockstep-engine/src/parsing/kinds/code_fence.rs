/// Fenced code delimiter detection.
///
/// Only the delimiter line itself is recognized; fence state is deliberately
/// not tracked across lines (see [`crate::parsing::parse_document`]).
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    /// Whether the line opens (or closes) a fence.
    pub fn is_delimiter(line: &str) -> bool {
        let t = line.trim_start();
        t.starts_with(Self::BACKTICKS) || t.starts_with(Self::TILDES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_backtick_fence() {
        assert!(CodeFence::is_delimiter("```rust"));
        assert!(CodeFence::is_delimiter("```"));
    }

    #[test]
    fn detect_tilde_fence() {
        assert!(CodeFence::is_delimiter("~~~"));
    }

    #[test]
    fn detect_indented_fence() {
        assert!(CodeFence::is_delimiter("  ```"));
    }

    #[test]
    fn no_fence() {
        assert!(!CodeFence::is_delimiter("hello"));
        assert!(!CodeFence::is_delimiter("`inline`"));
    }
}
