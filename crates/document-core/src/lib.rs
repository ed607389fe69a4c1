#![warn(missing_docs)]
//! Document Core - Headless Plain-Text Document Engine
//!
//! # Overview
//!
//! `document-core` owns mutable text content and the invariant-heavy bookkeeping
//! around it: edit history for undo/redo, a line/column index for caret positioning,
//! and literal find/replace. It renders nothing and performs no I/O; menus, dialogs,
//! file access, and rendering are external collaborators that call in through the
//! [`Document`] handle and react to change notifications.
//!
//! # Core Features
//!
//! - **Validated Mutation**: every insert/delete/replace is bounds-checked and
//!   applied atomically; content, history, and line index are never observed
//!   half-updated
//! - **Undo/Redo**: explicit [`EditRecord`] pairs on two bounded stacks; a range
//!   replacement is one record, so one undo reverses it
//! - **Incremental Line Index**: per-edit cost bounded by the edit and the lines
//!   behind it, not total document size
//! - **Literal Find/Replace**: stateless, char-offset based, non-overlapping
//!   substitution that never re-matches its own replacement
//! - **Change Notifications**: synchronous callbacks with a monotonically
//!   increasing document version
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Document (load/serialize, caret)           │  ← External boundary
//! ├─────────────────────────────────────────────┤
//! │  TextBuffer (validate, apply, notify)       │  ← Mutation
//! ├─────────────────────────────────────────────┤
//! │  EditHistory       │  LineIndex             │  ← Bookkeeping
//! ├─────────────────────────────────────────────┤
//! │  search / counters (query-driven)           │  ← Derived queries
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use document_core::{Document, search, SearchOptions};
//!
//! let mut doc = Document::new("hello\nworld");
//! doc.insert(5, "!").unwrap();
//! assert_eq!(doc.buffer().text(), "hello!\nworld");
//!
//! let m = search::find_forward(&doc.buffer().text(), "world", SearchOptions::default(), 0)
//!     .unwrap()
//!     .unwrap();
//! assert_eq!((m.start, m.end), (7, 12));
//!
//! doc.undo();
//! assert_eq!(doc.buffer().text(), "hello\nworld");
//! ```
//!
//! # Module Description
//!
//! - [`buffer`] - content ownership, mutation, notifications
//! - [`history`] - reversible edit records and the undo/redo stacks
//! - [`line_index`] - char offset ↔ (line, column) translation
//! - [`search`] - literal find/replace over a content snapshot
//! - [`counters`] - word/letter statistics
//! - [`document`] - the external handle (load/serialize, caret)
//! - [`line_ending`] - LF/CRLF detection and conversion
//!
//! # Concurrency
//!
//! Single-threaded and synchronous. One document belongs to one logical owner;
//! embedders that add background work should key in-flight results on
//! [`TextBuffer::version`] and discard results from superseded generations.

pub mod buffer;
pub mod counters;
pub mod document;
pub mod history;
pub mod line_ending;
pub mod line_index;
pub mod search;

pub use buffer::{ChangeCallback, EditError, TextBuffer, TextChange};
pub use counters::{TextStats, letter_count, stats, word_count};
pub use document::Document;
pub use history::{DEFAULT_MAX_DEPTH, EditHistory, EditRecord};
pub use line_ending::LineEnding;
pub use line_index::{LineIndex, Position};
pub use search::{
    Replacement, SearchError, SearchMatch, SearchOptions, find_backward, find_forward,
    replace_all, replace_first,
};
