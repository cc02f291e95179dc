//! In-memory preview surface backed by pulldown-cmark.
//!
//! Renders markdown into a flat list of tagged elements with synthetic
//! line-height geometry. This is a stand-in for a browser pane, not a layout
//! engine: element heights derive from text line counts, which is exactly
//! what the engine's proportional-offset math needs to be exercised
//! end-to-end. The CLI renders from it directly and the integration tests
//! drive the full sync path against it.

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag};

use crate::surface::{ElementId, PreviewSurface, Rect};

/// Synthetic height of one text line.
pub const LINE_HEIGHT: f64 = 20.0;

/// Synthetic vertical gap between block elements.
pub const BLOCK_GAP: f64 = 10.0;

const DEFAULT_VIEWPORT_HEIGHT: f64 = 600.0;

/// One rendered block-level element.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewElement {
    /// Lowercase tag name (`"h1"`, `"p"`, `"pre"`, ...).
    pub tag: &'static str,
    /// Text content, inner newlines preserved.
    pub text: String,
    /// Synthetic bounding box in scroll coordinates.
    pub rect: Rect,
}

/// A rendered markdown document, queryable by tag and scrollable.
#[derive(Debug, Clone)]
pub struct PreviewTree {
    elements: Vec<PreviewElement>,
    content_height: f64,
    viewport_height: f64,
    scroll_offset: f64,
}

impl PreviewTree {
    /// Renders markdown into a fresh tree.
    pub fn from_markdown(content: &str) -> Self {
        let mut walker = Walker::default();
        for event in Parser::new(content) {
            walker.push(event);
        }
        let mut elements = walker.finish();

        let mut y = 0.0;
        for el in &mut elements {
            let lines = el.text.lines().count().max(1);
            el.rect = Rect {
                top: y,
                height: lines as f64 * LINE_HEIGHT,
            };
            y += el.rect.height + BLOCK_GAP;
        }

        Self {
            elements,
            content_height: y,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            scroll_offset: 0.0,
        }
    }

    pub fn elements(&self) -> &[PreviewElement] {
        &self.elements
    }

    /// Total rendered height.
    pub fn content_height(&self) -> f64 {
        self.content_height
    }

    /// Last scroll target issued through [`PreviewSurface::scroll_to`].
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn set_viewport_height(&mut self, height: f64) {
        self.viewport_height = height;
    }

    /// Escaped HTML dump of the rendered elements, for inspection.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for el in &self.elements {
            match el.tag {
                "hr" => out.push_str("<hr />\n"),
                "img" => {
                    out.push_str("<img alt=\"");
                    out.push_str(&html_escape::encode_double_quoted_attribute(&el.text));
                    out.push_str("\" />\n");
                }
                tag => {
                    out.push('<');
                    out.push_str(tag);
                    out.push('>');
                    out.push_str(&html_escape::encode_text(&el.text));
                    out.push_str("</");
                    out.push_str(tag);
                    out.push_str(">\n");
                }
            }
        }
        out
    }
}

impl PreviewSurface for PreviewTree {
    fn elements_by_tag(&self, tags: &[&str]) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, el)| tags.contains(&el.tag))
            .map(|(i, _)| ElementId(i))
            .collect()
    }

    fn element_text(&self, id: ElementId) -> Option<String> {
        self.elements.get(id.0).map(|el| el.text.trim().to_string())
    }

    fn element_rect(&self, id: ElementId) -> Option<Rect> {
        self.elements.get(id.0).map(|el| el.rect)
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn scroll_to(&mut self, offset: f64) {
        self.scroll_offset = offset.clamp(0.0, self.content_height.max(0.0));
    }
}

/// What an open pulldown tag contributes to the element stream.
enum Frame {
    /// Opened a top-level element; its end finalizes that element.
    Opener,
    /// An image span; text inside it is alt text.
    Image,
    /// A list item; its end breaks the line.
    Item,
    /// A table cell; its end separates columns.
    Cell,
    /// Anything else (inline formatting, nested containers).
    Other,
}

#[derive(Debug)]
struct CurrentElement {
    tag: &'static str,
    text: String,
    in_image: usize,
    has_image: bool,
    /// Bytes of non-whitespace text outside image spans; an image-only
    /// paragraph retags as `img`.
    outside_len: usize,
}

#[derive(Default)]
struct Walker {
    elements: Vec<PreviewElement>,
    stack: Vec<Frame>,
    current: Option<CurrentElement>,
}

impl Walker {
    fn push(&mut self, event: Event) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(_) => self.end(),
            Event::Text(t) => self.text(&t),
            Event::Code(t) => self.text(&t),
            Event::Html(t) | Event::InlineHtml(t) => self.text(&t),
            Event::SoftBreak | Event::HardBreak => self.text("\n"),
            Event::Rule => {
                if self.stack.is_empty() {
                    self.elements.push(PreviewElement {
                        tag: "hr",
                        text: String::new(),
                        rect: Rect {
                            top: 0.0,
                            height: 0.0,
                        },
                    });
                }
            }
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag) {
        let top_level_tag = if self.stack.is_empty() {
            block_tag(&tag)
        } else {
            None
        };

        let frame = if let Some(opened) = top_level_tag {
            self.current = Some(CurrentElement {
                tag: opened,
                text: String::new(),
                in_image: 0,
                has_image: false,
                outside_len: 0,
            });
            Frame::Opener
        } else {
            match tag {
                Tag::Image { .. } => {
                    if let Some(cur) = &mut self.current {
                        cur.has_image = true;
                        cur.in_image += 1;
                    }
                    Frame::Image
                }
                Tag::Item => Frame::Item,
                Tag::TableCell => Frame::Cell,
                _ => Frame::Other,
            }
        };
        self.stack.push(frame);
    }

    fn end(&mut self) {
        match self.stack.pop() {
            Some(Frame::Opener) => self.finalize(),
            Some(Frame::Image) => {
                if let Some(cur) = &mut self.current {
                    cur.in_image = cur.in_image.saturating_sub(1);
                }
            }
            Some(Frame::Item) => self.text("\n"),
            Some(Frame::Cell) => self.text(" "),
            _ => {}
        }
    }

    fn text(&mut self, t: &str) {
        if let Some(cur) = &mut self.current {
            cur.text.push_str(t);
            if cur.in_image == 0 {
                cur.outside_len += t.trim().len();
            }
        }
    }

    fn finalize(&mut self) {
        let Some(cur) = self.current.take() else {
            return;
        };
        let tag = if cur.has_image && cur.outside_len == 0 {
            "img"
        } else {
            cur.tag
        };
        self.elements.push(PreviewElement {
            tag,
            text: cur.text.trim().to_string(),
            rect: Rect {
                top: 0.0,
                height: 0.0,
            },
        });
    }

    fn finish(self) -> Vec<PreviewElement> {
        self.elements
    }
}

fn block_tag(tag: &Tag) -> Option<&'static str> {
    match tag {
        Tag::Paragraph => Some("p"),
        Tag::Heading { level, .. } => Some(heading_tag(*level)),
        Tag::CodeBlock(_) => Some("pre"),
        Tag::List(Some(_)) => Some("ol"),
        Tag::List(None) => Some("ul"),
        Tag::BlockQuote(_) => Some("blockquote"),
        Tag::Table(_) => Some("table"),
        _ => None,
    }
}

fn heading_tag(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::H1 => "h1",
        HeadingLevel::H2 => "h2",
        HeadingLevel::H3 => "h3",
        HeadingLevel::H4 => "h4",
        HeadingLevel::H5 => "h5",
        HeadingLevel::H6 => "h6",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_heading_paragraph_and_list() {
        let tree = PreviewTree::from_markdown("# Title\n\nSome text.\n\n- item1\n- item2");
        let tags: Vec<&str> = tree.elements().iter().map(|el| el.tag).collect();
        assert_eq!(tags, vec!["h1", "p", "ul"]);
        assert_eq!(tree.elements()[0].text, "Title");
        assert_eq!(tree.elements()[1].text, "Some text.");
    }

    #[test]
    fn list_items_render_one_per_line() {
        let tree = PreviewTree::from_markdown("- item1\n- item2");
        assert_eq!(tree.elements()[0].text, "item1\nitem2");
    }

    #[test]
    fn geometry_is_cumulative_with_gaps() {
        let tree = PreviewTree::from_markdown("# Title\n\nSome text.");
        let first = tree.elements()[0].rect;
        let second = tree.elements()[1].rect;
        assert_eq!(first.top, 0.0);
        assert_eq!(first.height, LINE_HEIGHT);
        assert_eq!(second.top, first.height + BLOCK_GAP);
    }

    #[test]
    fn multi_line_elements_are_taller() {
        let tree = PreviewTree::from_markdown("- a\n- b\n- c");
        assert_eq!(tree.elements()[0].rect.height, 3.0 * LINE_HEIGHT);
    }

    #[test]
    fn image_only_paragraph_retags_as_img() {
        let tree = PreviewTree::from_markdown("![alt text](a.png)");
        assert_eq!(tree.elements()[0].tag, "img");
        assert_eq!(tree.elements()[0].text, "alt text");
    }

    #[test]
    fn image_in_running_text_stays_a_paragraph() {
        let tree = PreviewTree::from_markdown("see ![alt](a.png) here");
        assert_eq!(tree.elements()[0].tag, "p");
    }

    #[test]
    fn rule_renders_as_hr() {
        let tree = PreviewTree::from_markdown("a\n\n---\n\nb");
        let tags: Vec<&str> = tree.elements().iter().map(|el| el.tag).collect();
        assert_eq!(tags, vec!["p", "hr", "p"]);
    }

    #[test]
    fn scroll_is_clamped_to_content() {
        let mut tree = PreviewTree::from_markdown("# Title");
        tree.scroll_to(1e9);
        assert_eq!(tree.scroll_offset(), tree.content_height());
        tree.scroll_to(-5.0);
        assert_eq!(tree.scroll_offset(), 0.0);
    }

    #[test]
    fn to_html_escapes_text() {
        let tree = PreviewTree::from_markdown("a < b");
        assert!(tree.to_html().contains("a &lt; b"));
    }

    #[test]
    fn query_by_tag_preserves_document_order() {
        let tree = PreviewTree::from_markdown("one\n\ntwo\n\nthree");
        let ids = tree.elements_by_tag(&["p"]);
        assert_eq!(ids, vec![ElementId(0), ElementId(1), ElementId(2)]);
    }
}
