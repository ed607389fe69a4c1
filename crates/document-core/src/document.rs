//! Document handle: the boundary an embedding UI talks to.
//!
//! A [`Document`] wraps a [`TextBuffer`] with the two pieces of session state the
//! buffer itself does not own: the preferred line ending (detected on load, restored
//! on serialize) and the single logical caret. The caret stores only a char offset;
//! its (line, column) is derived through the line index on demand, never cached, so
//! it cannot drift from the content.
//!
//! File-system access, dialogs, and encoding detection belong to the embedding I/O
//! collaborator; this handle only converts between raw text and the LF-normalized
//! internal form.

use crate::buffer::{EditError, TextBuffer};
use crate::counters::{self, TextStats};
use crate::line_ending::LineEnding;
use crate::line_index::Position;

/// An editing session over one document.
///
/// # Example
///
/// ```rust
/// use document_core::{Document, LineEnding};
///
/// let mut doc = Document::load("hello\r\nworld");
/// assert_eq!(doc.buffer().text(), "hello\nworld");
/// assert_eq!(doc.line_ending(), LineEnding::Crlf);
/// assert_eq!(doc.serialize(), "hello\r\nworld");
/// ```
pub struct Document {
    buffer: TextBuffer,
    line_ending: LineEnding,
    caret: usize,
}

impl Document {
    /// Create a document from LF-normalized initial content.
    pub fn new(initial: &str) -> Self {
        Self {
            buffer: TextBuffer::new(initial),
            line_ending: LineEnding::Lf,
            caret: 0,
        }
    }

    /// Create an empty document.
    pub fn empty() -> Self {
        Self::new("")
    }

    /// Load a document from raw text: detects the dominant line ending and
    /// normalizes the content to LF.
    pub fn load(raw: &str) -> Self {
        let line_ending = LineEnding::detect_in_text(raw);
        Self {
            buffer: TextBuffer::new(&LineEnding::normalize(raw)),
            line_ending,
            caret: 0,
        }
    }

    /// Content with the preferred line ending applied, ready for the I/O layer.
    pub fn serialize(&self) -> String {
        self.line_ending.apply_to_text(&self.buffer.text())
    }

    /// Preferred line ending for serialization.
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Override the preferred line ending.
    pub fn set_line_ending(&mut self, line_ending: LineEnding) {
        self.line_ending = line_ending;
    }

    /// The underlying buffer.
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Mutable access to the underlying buffer.
    ///
    /// Mutations made directly on the buffer bypass caret clamping; prefer the
    /// mutation methods on the document when a caret is in play.
    pub fn buffer_mut(&mut self) -> &mut TextBuffer {
        &mut self.buffer
    }

    /// Insert text, then clamp the caret to the document bounds.
    pub fn insert(&mut self, offset: usize, text: &str) -> Result<(), EditError> {
        self.buffer.insert(offset, text)?;
        self.clamp_caret();
        Ok(())
    }

    /// Delete a char range, then clamp the caret to the document bounds.
    pub fn delete(&mut self, offset: usize, count: usize) -> Result<(), EditError> {
        self.buffer.delete(offset, count)?;
        self.clamp_caret();
        Ok(())
    }

    /// Replace a char range atomically, then clamp the caret.
    pub fn replace_range(
        &mut self,
        offset: usize,
        count: usize,
        text: &str,
    ) -> Result<(), EditError> {
        self.buffer.replace_range(offset, count, text)?;
        self.clamp_caret();
        Ok(())
    }

    /// Undo the most recent edit; `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let undone = self.buffer.undo();
        self.clamp_caret();
        undone
    }

    /// Re-apply the most recently undone edit; `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let redone = self.buffer.redo();
        self.clamp_caret();
        redone
    }

    /// Current caret char offset.
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Move the caret to a char offset in `[0, length]`.
    pub fn set_caret(&mut self, offset: usize) -> Result<(), EditError> {
        if offset > self.buffer.len_chars() {
            return Err(EditError::InvalidOffset(offset));
        }
        self.caret = offset;
        Ok(())
    }

    /// Caret (line, column), derived from the line index on demand.
    pub fn caret_position(&self) -> Position {
        // The caret is clamped after every mutation through this handle, so the
        // lookup cannot be out of range.
        self.buffer
            .line_and_column_at(self.caret.min(self.buffer.len_chars()))
            .unwrap_or(Position::new(1, 1))
    }

    /// Word/letter statistics over current content.
    pub fn stats(&self) -> TextStats {
        counters::stats(&self.buffer.text())
    }

    fn clamp_caret(&mut self) {
        self.caret = self.caret.min(self.buffer.len_chars());
    }
}
