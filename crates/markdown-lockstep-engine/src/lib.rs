//! Core engine for markdown-lockstep: keeps a text-editing surface and its
//! rendered preview visually aligned by anchoring scroll synchronization to
//! shared content blocks instead of proportional line offsets.
//!
//! # Modules
//!
//! - [`parsing`] - Line classification and block building over raw markdown
//! - [`sync`] - Cursor mapping, preview element location, and the scroll
//!   coordinator with its re-entrancy guard
//! - [`surface`] - Capability traits the host editor and preview implement
//! - [`preview`] - In-memory preview tree backed by pulldown-cmark
//! - [`toc`] - Heading outline derived from the block list
//! - [`stats`] - Document statistics for status displays

pub mod parsing;
pub mod preview;
pub mod stats;
pub mod surface;
pub mod sync;
pub mod toc;

// Re-export key types for easier usage
pub use parsing::{Block, BlockKind, parse_document};
pub use preview::{PreviewElement, PreviewTree};
pub use stats::{DocumentStats, document_stats};
pub use surface::{EditorSurface, ElementId, NullEditor, PreviewSurface, Rect};
pub use sync::{SyncAccuracy, SyncEngine, SyncMode, SyncOptions, SyncPosition};
pub use toc::{TocEntry, outline};
