use regex::Regex;
use std::sync::LazyLock;

/// Matches ordered list markers like `1. `, `42. ` after optional indent.
static ORDERED_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\.\s").expect("ordered list marker regex"));

/// List item detection, bullets and ordered markers alike.
pub struct ListItem;

impl ListItem {
    /// The recognized bullet characters.
    pub const BULLETS: [char; 3] = ['-', '*', '+'];

    /// Whether the line is a list item (`- `, `* `, `+ ` or `N. `), allowing
    /// leading indentation for nested items.
    pub fn is_item(line: &str) -> bool {
        let t = line.trim_start();
        for bullet in Self::BULLETS {
            if let Some(rest) = t.strip_prefix(bullet)
                && rest.starts_with(' ')
            {
                return true;
            }
        }
        ORDERED_MARKER.is_match(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_bullets() {
        assert!(ListItem::is_item("- item"));
        assert!(ListItem::is_item("* item"));
        assert!(ListItem::is_item("+ item"));
    }

    #[test]
    fn detect_ordered() {
        assert!(ListItem::is_item("1. first"));
        assert!(ListItem::is_item("42. later"));
    }

    #[test]
    fn detect_nested_indent() {
        assert!(ListItem::is_item("  - nested"));
        assert!(ListItem::is_item("    2. nested ordered"));
    }

    #[test]
    fn bullet_needs_following_space() {
        assert!(!ListItem::is_item("-item"));
        assert!(!ListItem::is_item("*emphasis*"));
    }

    #[test]
    fn bare_dashes_are_not_items() {
        assert!(!ListItem::is_item("---"));
    }

    #[test]
    fn ordered_needs_dot_and_space() {
        assert!(!ListItem::is_item("1) paren style"));
        assert!(!ListItem::is_item("1.no space"));
    }
}
