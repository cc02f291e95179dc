//! Capability traits the two scrollable surfaces implement.
//!
//! All rendering-specific operations (tag queries, bounding rects, scroll
//! primitives) live behind these traits so the matching logic can be tested
//! without a real rendering surface.

/// Opaque handle to one rendered element. Only the surface that issued it
/// can interpret it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub usize);

/// Vertical bounding box of a rendered element, in the preview's scroll
/// coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
}

impl Rect {
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    /// Whether a vertical offset falls inside this rect.
    pub fn contains_y(self, y: f64) -> bool {
        y >= self.top && y < self.bottom()
    }
}

/// The rendered preview pane, as much of it as the engine needs.
pub trait PreviewSurface {
    /// All elements matching any of the given tags, in document order.
    fn elements_by_tag(&self, tags: &[&str]) -> Vec<ElementId>;

    /// Trimmed text content of an element. `None` for a stale handle.
    fn element_text(&self, id: ElementId) -> Option<String>;

    /// Bounding rect of an element. `None` for a stale handle.
    fn element_rect(&self, id: ElementId) -> Option<Rect>;

    /// Height of the visible viewport.
    fn viewport_height(&self) -> f64;

    /// Scroll the preview container to a vertical offset. Fire-and-forget;
    /// a later call supersedes an in-flight one.
    fn scroll_to(&mut self, offset: f64);
}

/// The host text editor, reduced to the single primitive the
/// preview-to-editor path needs. Integrators supply this.
pub trait EditorSurface {
    /// Move the editor's scroll/cursor to a 1-based source line.
    fn scroll_to_line(&mut self, line: u32);
}

/// Editor surface that ignores every request, for integrations that only
/// sync editor-to-preview.
#[derive(Debug, Default)]
pub struct NullEditor;

impl EditorSurface for NullEditor {
    fn scroll_to_line(&mut self, _line: u32) {}
}
