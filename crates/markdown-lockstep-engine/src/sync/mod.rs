//! Scroll synchronization: cursor-to-preview and preview-to-cursor.
//!
//! The [`SyncEngine`] owns the current block list and both surface handles
//! and orchestrates the two directions. Every lookup miss degrades to a
//! silent no-op: the engine never raises for markup it cannot classify with
//! confidence.

pub mod guard;
pub mod locator;
pub mod position;

pub use guard::{DEFAULT_COOLDOWN, SyncGuard};
pub use position::{SyncPosition, locate_position};

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::parsing::{Block, parse_document};
use crate::surface::{EditorSurface, PreviewSurface};

/// Default allowance for fixed chrome (toolbar, padding) above the preview
/// content.
pub const DEFAULT_HEADER_OFFSET: f64 = 80.0;

/// How scroll positions are aligned between the panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SyncMode {
    /// Match corresponding content blocks (the default).
    Semantic,
    /// Proportional line scrolling only; semantic matching is disabled and
    /// the engine stays silent.
    LineBased,
    /// Semantic with line-based intent as fallback. Currently behaves as
    /// `Semantic`; only `LineBased` gates any decision point.
    Hybrid,
}

/// Requested matching accuracy.
///
/// Accepted and carried but consulted by no decision path. Do not rely on
/// it doing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SyncAccuracy {
    Fast,
    Balanced,
    Precise,
}

/// Construction-time configuration for a [`SyncEngine`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyncOptions {
    pub mode: SyncMode,
    pub accuracy: SyncAccuracy,
    /// Suppression window after a programmatic scroll.
    pub cooldown: Duration,
    /// Fixed offset subtracted from scroll targets for preview chrome.
    pub header_offset: f64,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            mode: SyncMode::Semantic,
            accuracy: SyncAccuracy::Balanced,
            cooldown: DEFAULT_COOLDOWN,
            header_offset: DEFAULT_HEADER_OFFSET,
        }
    }
}

/// Owns the block list and both surfaces, and coordinates the two sync
/// directions behind the re-entrancy guard.
///
/// Single-threaded by design: cursor events and preview scroll events are
/// expected to arrive on one thread and are serialized by the guard, whose
/// only job is keeping a programmatic scroll on one side from bouncing back
/// off the other. Callers should debounce rapid edits before
/// [`update_content`](Self::update_content) and must update content before
/// relying on fresh block ranges.
pub struct SyncEngine<P: PreviewSurface, E: EditorSurface> {
    options: SyncOptions,
    preview: P,
    editor: E,
    blocks: Vec<Block>,
    last_content: String,
    guard: SyncGuard,
    parse_count: u64,
}

impl<P: PreviewSurface, E: EditorSurface> SyncEngine<P, E> {
    pub fn new(options: SyncOptions, preview: P, editor: E) -> Self {
        Self {
            guard: SyncGuard::new(options.cooldown),
            options,
            preview,
            editor,
            blocks: Vec::new(),
            last_content: String::new(),
            parse_count: 0,
        }
    }

    /// Replaces the document text, rebuilding the block list wholesale.
    ///
    /// No-op when the content is unchanged (plain string equality; the
    /// per-block hash is not consulted here).
    pub fn update_content(&mut self, content: &str) {
        if content == self.last_content {
            tracing::debug!("content unchanged, keeping current block list");
            return;
        }
        self.blocks = parse_document(content);
        self.last_content = content.to_string();
        self.parse_count += 1;
        tracing::debug!(blocks = self.blocks.len(), "rebuilt block list");
    }

    /// Scrolls the preview to follow the editor cursor at zero-based
    /// `(line, column)`.
    pub fn sync_editor_to_preview(&mut self, line: u32, column: u32) {
        self.sync_editor_to_preview_at(line, column, Instant::now());
    }

    /// As [`sync_editor_to_preview`](Self::sync_editor_to_preview), with the
    /// clock injected.
    pub fn sync_editor_to_preview_at(&mut self, line: u32, column: u32, now: Instant) {
        if self.options.mode == SyncMode::LineBased {
            return;
        }
        if !self.guard.try_begin(now) {
            tracing::debug!("guard engaged, ignoring cursor event");
            return;
        }

        let Some(pos) = locate_position(&self.blocks, line, column) else {
            // Blank separator or stale ranges: skip this sync.
            self.guard.abort();
            return;
        };
        let Some(block) = self.blocks.iter().find(|b| b.id == pos.block_id) else {
            self.guard.abort();
            return;
        };
        let Some(element) = locator::locate_element(block, &self.preview) else {
            self.guard.abort();
            return;
        };
        let Some(rect) = self.preview.element_rect(element) else {
            self.guard.abort();
            return;
        };

        // Land proportionally inside the block, not at its top edge.
        let target =
            (rect.top - self.options.header_offset + rect.height * pos.percentage).max(0.0);
        self.preview.scroll_to(target);
        self.guard.finish(now);
    }

    /// Moves the editor to follow a user scroll of the preview pane.
    pub fn sync_preview_to_editor(&mut self, scroll_top: f64) {
        self.sync_preview_to_editor_at(scroll_top, Instant::now());
    }

    /// As [`sync_preview_to_editor`](Self::sync_preview_to_editor), with the
    /// clock injected.
    pub fn sync_preview_to_editor_at(&mut self, scroll_top: f64, now: Instant) {
        if !self.guard.try_begin(now) {
            tracing::debug!("guard engaged, ignoring preview scroll");
            return;
        }

        // First block-level element straddling the viewport's vertical
        // center wins.
        let center = scroll_top + self.preview.viewport_height() / 2.0;
        let element = self
            .preview
            .elements_by_tag(locator::ALL_BLOCK_TAGS)
            .into_iter()
            .find(|&id| {
                self.preview
                    .element_rect(id)
                    .is_some_and(|r| r.contains_y(center))
            });

        let Some(element) = element else {
            self.guard.abort();
            return;
        };
        let Some(text) = self.preview.element_text(element) else {
            self.guard.abort();
            return;
        };
        let Some(block) = locator::block_for_text(&self.blocks, &text) else {
            tracing::debug!("no block matches the centered element");
            self.guard.abort();
            return;
        };

        self.editor.scroll_to_line(block.start_line);
        self.guard.finish(now);
    }

    /// The current block list.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// How many times the parser has actually run.
    pub fn parse_count(&self) -> u64 {
        self.parse_count
    }

    pub fn options(&self) -> &SyncOptions {
        &self.options
    }

    pub fn preview(&self) -> &P {
        &self.preview
    }

    pub fn preview_mut(&mut self) -> &mut P {
        &mut self.preview
    }

    pub fn editor(&self) -> &E {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut E {
        &mut self.editor
    }
}
