use regex::Regex;
use std::sync::LazyLock;

/// Matches a line that is nothing but one image reference.
static IMAGE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^!\[[^\]]*\]\([^)]*\)$").expect("image line regex"));

/// Image directive detection.
pub struct Image;

impl Image {
    /// Whether the trimmed line is *only* an image reference. An image inside
    /// running text stays part of its paragraph.
    pub fn is_image_line(line: &str) -> bool {
        IMAGE_LINE.is_match(line.trim())
    }
}
