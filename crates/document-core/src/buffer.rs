//! Text buffer: owner of document content.
//!
//! All mutation passes through [`TextBuffer`]. Every successful mutation completes
//! fully before returning: the content changes, an [`EditRecord`](crate::EditRecord)
//! is pushed to history, the line index is updated incrementally, and subscribers are
//! notified synchronously. No caller ever observes a partially-updated document.
//!
//! All offsets in this module are char offsets (Unicode scalar values), not bytes.

use crate::history::{EditHistory, EditRecord};
use crate::line_index::{LineIndex, Position};
use ropey::Rope;

/// Edit errors: caller contract violations, surfaced immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// Offset outside `[0, length]`.
    InvalidOffset(usize),
    /// (line, column) pair outside the document.
    InvalidPosition {
        /// 1-based line number.
        line: usize,
        /// 1-based column in chars.
        column: usize,
    },
    /// Char range exceeding the document bounds.
    InvalidRange {
        /// Inclusive start char offset.
        start: usize,
        /// Exclusive end char offset.
        end: usize,
    },
}

impl std::fmt::Display for EditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditError::InvalidOffset(offset) => {
                write!(f, "Invalid offset: {}", offset)
            }
            EditError::InvalidPosition { line, column } => {
                write!(f, "Invalid position: line {}, column {}", line, column)
            }
            EditError::InvalidRange { start, end } => {
                write!(f, "Invalid range: {}..{}", start, end)
            }
        }
    }
}

impl std::error::Error for EditError {}

/// Notification payload fired after every successful mutation, including undo/redo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextChange {
    /// Char offset the mutation applied at.
    pub offset: usize,
    /// Chars removed at `offset`.
    pub removed_len: usize,
    /// Chars inserted at `offset`.
    pub inserted_len: usize,
    /// Document generation after this mutation; strictly increasing.
    pub version: u64,
}

/// Change notification callback type.
pub type ChangeCallback = Box<dyn FnMut(&TextChange) + Send>;

/// Mutable document content with history, line index, and change notifications.
///
/// # Example
///
/// ```rust
/// use document_core::TextBuffer;
///
/// let mut buffer = TextBuffer::new("hello\nworld");
/// buffer.insert(5, "!").unwrap();
/// assert_eq!(buffer.text(), "hello!\nworld");
/// assert!(buffer.undo());
/// assert_eq!(buffer.text(), "hello\nworld");
/// ```
pub struct TextBuffer {
    content: Rope,
    line_index: LineIndex,
    history: EditHistory,
    version: u64,
    callbacks: Vec<ChangeCallback>,
}

impl TextBuffer {
    /// Create a buffer from initial content.
    pub fn new(text: &str) -> Self {
        Self {
            content: Rope::from_str(text),
            line_index: LineIndex::from_text(text),
            history: EditHistory::new(),
            version: 0,
            callbacks: Vec::new(),
        }
    }

    /// Create an empty buffer.
    pub fn empty() -> Self {
        Self::new("")
    }

    /// Create a buffer with a custom undo depth limit.
    pub fn with_max_undo(text: &str, max_undo: usize) -> Self {
        Self {
            history: EditHistory::with_max_depth(max_undo),
            ..Self::new(text)
        }
    }

    /// Full document content.
    pub fn text(&self) -> String {
        self.content.to_string()
    }

    /// Substring for a half-open char range.
    pub fn text_range(&self, start: usize, end: usize) -> Result<String, EditError> {
        if start > end || end > self.content.len_chars() {
            return Err(EditError::InvalidRange { start, end });
        }
        Ok(self.content.slice(start..end).to_string())
    }

    /// Text of a 1-based line, excluding its newline.
    pub fn line_text(&self, line: usize) -> Result<String, EditError> {
        let start = self.line_index.line_start(line)?;
        let end = if line < self.line_index.line_count() {
            self.line_index.line_start(line + 1)? - 1
        } else {
            self.content.len_chars()
        };
        Ok(self.content.slice(start..end).to_string())
    }

    /// Document length in chars.
    pub fn len_chars(&self) -> usize {
        self.content.len_chars()
    }

    /// Whether the document is empty.
    pub fn is_empty(&self) -> bool {
        self.content.len_chars() == 0
    }

    /// Total line count.
    pub fn line_count(&self) -> usize {
        self.line_index.line_count()
    }

    /// Document generation; incremented once per successful mutation.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// The line index over the current content.
    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    /// Translate a char offset into a 1-based (line, column) pair.
    pub fn line_and_column_at(&self, offset: usize) -> Result<Position, EditError> {
        self.line_index.line_and_column_at(offset)
    }

    /// Translate a 1-based (line, column) pair into a char offset.
    pub fn offset_at(&self, line: usize, column: usize) -> Result<usize, EditError> {
        self.line_index.offset_at(line, column)
    }

    /// Register a change-notification callback.
    ///
    /// Callbacks fire synchronously after every successful mutation, including
    /// undo/redo, in registration order.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&TextChange) + Send + 'static,
    {
        self.callbacks.push(Box::new(callback));
    }

    /// Insert `text` at a char offset.
    ///
    /// Inserting an empty string is a complete no-op: nothing is recorded and no
    /// notification fires.
    pub fn insert(&mut self, offset: usize, text: &str) -> Result<(), EditError> {
        if offset > self.content.len_chars() {
            return Err(EditError::InvalidOffset(offset));
        }
        if text.is_empty() {
            return Ok(());
        }
        let record = EditRecord::insertion(offset, text);
        self.history.record(record.clone());
        self.apply_record(&record);
        Ok(())
    }

    /// Remove `count` chars starting at a char offset.
    pub fn delete(&mut self, offset: usize, count: usize) -> Result<(), EditError> {
        let end = offset
            .checked_add(count)
            .ok_or(EditError::InvalidRange { start: offset, end: usize::MAX })?;
        if end > self.content.len_chars() {
            return Err(EditError::InvalidRange { start: offset, end });
        }
        if count == 0 {
            return Ok(());
        }
        let removed = self.content.slice(offset..end).to_string();
        let record = EditRecord::deletion(offset, removed);
        self.history.record(record.clone());
        self.apply_record(&record);
        Ok(())
    }

    /// Atomically replace `count` chars at `offset` with `text`.
    ///
    /// Recorded as a single [`EditRecord`], so one undo reverses the whole
    /// replacement.
    pub fn replace_range(&mut self, offset: usize, count: usize, text: &str) -> Result<(), EditError> {
        let end = offset
            .checked_add(count)
            .ok_or(EditError::InvalidRange { start: offset, end: usize::MAX })?;
        if end > self.content.len_chars() {
            return Err(EditError::InvalidRange { start: offset, end });
        }
        if count == 0 && text.is_empty() {
            return Ok(());
        }
        let record = EditRecord {
            offset,
            removed_text: self.content.slice(offset..end).to_string(),
            inserted_text: text.to_string(),
        };
        self.history.record(record.clone());
        self.apply_record(&record);
        Ok(())
    }

    /// Undo the most recent edit. Returns `false` when there is nothing to undo;
    /// an empty history is a normal state, not an error.
    pub fn undo(&mut self) -> bool {
        let Some(inverse) = self.history.undo() else {
            return false;
        };
        self.apply_record(&inverse);
        true
    }

    /// Re-apply the most recently undone edit. Returns `false` when there is
    /// nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(record) = self.history.redo() else {
            return false;
        };
        self.apply_record(&record);
        true
    }

    /// Whether an undo is available.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether a redo is available.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Undoable edit count.
    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    /// Redoable edit count.
    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    /// Apply a record to content and index, then notify. Does not touch history:
    /// the forward paths record first, the undo/redo paths must not re-record.
    fn apply_record(&mut self, record: &EditRecord) {
        let removed_len = record.removed_len();
        if removed_len > 0 {
            self.content.remove(record.offset..record.offset + removed_len);
        }
        if !record.inserted_text.is_empty() {
            self.content.insert(record.offset, &record.inserted_text);
        }
        self.line_index
            .apply_change(record.offset, removed_len, &record.inserted_text);

        self.version += 1;
        let change = TextChange {
            offset: record.offset,
            removed_len,
            inserted_len: record.inserted_len(),
            version: self.version,
        };
        for callback in &mut self.callbacks {
            callback(&change);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_out_of_range() {
        let mut buffer = TextBuffer::new("ab");
        assert_eq!(buffer.insert(3, "x"), Err(EditError::InvalidOffset(3)));
        assert_eq!(buffer.text(), "ab");
        assert!(!buffer.can_undo());
    }

    #[test]
    fn test_delete_out_of_range() {
        let mut buffer = TextBuffer::new("ab");
        assert_eq!(
            buffer.delete(1, 2),
            Err(EditError::InvalidRange { start: 1, end: 3 })
        );
        assert_eq!(buffer.text(), "ab");
    }

    #[test]
    fn test_replace_range_is_single_record() {
        let mut buffer = TextBuffer::new("hello world");
        buffer.replace_range(6, 5, "there").unwrap();
        assert_eq!(buffer.text(), "hello there");
        assert_eq!(buffer.undo_depth(), 1);

        assert!(buffer.undo());
        assert_eq!(buffer.text(), "hello world");
    }

    #[test]
    fn test_empty_insert_is_a_no_op() {
        let mut buffer = TextBuffer::new("ab");
        let version = buffer.version();
        buffer.insert(1, "").unwrap();
        assert_eq!(buffer.version(), version);
        assert_eq!(buffer.undo_depth(), 0);
    }

    #[test]
    fn test_line_index_stays_consistent() {
        let mut buffer = TextBuffer::new("hello\nworld");
        buffer.insert(5, "!").unwrap();
        assert_eq!(buffer.text(), "hello!\nworld");
        assert_eq!(buffer.line_and_column_at(6), Ok(Position::new(1, 7)));
        assert_eq!(buffer.line_and_column_at(7), Ok(Position::new(2, 1)));
        assert_eq!(buffer.line_count(), 2);
    }

    #[test]
    fn test_line_text() {
        let buffer = TextBuffer::new("one\ntwo\nthree");
        assert_eq!(buffer.line_text(1), Ok("one".to_string()));
        assert_eq!(buffer.line_text(2), Ok("two".to_string()));
        assert_eq!(buffer.line_text(3), Ok("three".to_string()));
        assert!(buffer.line_text(4).is_err());
    }

    #[test]
    fn test_text_range() {
        let buffer = TextBuffer::new("hello");
        assert_eq!(buffer.text_range(1, 4), Ok("ell".to_string()));
        assert_eq!(
            buffer.text_range(2, 6),
            Err(EditError::InvalidRange { start: 2, end: 6 })
        );
    }

    #[test]
    fn test_cjk_insert_uses_char_offsets() {
        let mut buffer = TextBuffer::new("你好");
        buffer.insert(1, "，").unwrap();
        assert_eq!(buffer.text(), "你，好");
        buffer.delete(1, 1).unwrap();
        assert_eq!(buffer.text(), "你好");
    }
}
