//! Edit history: reversible edit records and the undo/redo stacks.

/// One atomic mutation: `removed_text` was replaced by `inserted_text` at `offset`.
///
/// A record fully describes its own inverse (swap the two strings), so replaying a
/// record forward and replaying its inverse are the same operation on the buffer.
/// Records are immutable once created and owned by [`EditHistory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRecord {
    /// Char offset the mutation applies at.
    pub offset: usize,
    /// Exact text removed at `offset` (may be empty).
    pub removed_text: String,
    /// Exact text inserted at `offset` (may be empty).
    pub inserted_text: String,
}

impl EditRecord {
    /// A pure insertion record.
    pub fn insertion(offset: usize, text: &str) -> Self {
        Self {
            offset,
            removed_text: String::new(),
            inserted_text: text.to_string(),
        }
    }

    /// A pure deletion record.
    pub fn deletion(offset: usize, removed: String) -> Self {
        Self {
            offset,
            removed_text: removed,
            inserted_text: String::new(),
        }
    }

    /// The record that exactly reverses this one.
    pub fn inverted(&self) -> EditRecord {
        EditRecord {
            offset: self.offset,
            removed_text: self.inserted_text.clone(),
            inserted_text: self.removed_text.clone(),
        }
    }

    /// Length of `removed_text` in chars.
    pub fn removed_len(&self) -> usize {
        self.removed_text.chars().count()
    }

    /// Length of `inserted_text` in chars.
    pub fn inserted_len(&self) -> usize {
        self.inserted_text.chars().count()
    }
}

/// Default maximum undo depth, matching common editor defaults.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Two-stack undo/redo sequencing over [`EditRecord`]s.
///
/// An empty stack is a normal state, not a fault: [`EditHistory::undo`] and
/// [`EditHistory::redo`] return `None` rather than an error when there is nothing
/// to do.
#[derive(Debug)]
pub struct EditHistory {
    undo_stack: Vec<EditRecord>,
    redo_stack: Vec<EditRecord>,
    max_depth: usize,
}

impl EditHistory {
    /// Create a history with the default depth limit.
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    /// Create a history bounded to `max_depth` undoable edits.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_depth,
        }
    }

    /// Record a new forward edit.
    ///
    /// This is the only way new edits enter history; it clears the redo stack. When
    /// the depth limit is reached the oldest entry is discarded, never the newest.
    pub fn record(&mut self, edit: EditRecord) {
        self.redo_stack.clear();
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(edit);
    }

    /// Pop the most recent edit and return the record that reverses it.
    ///
    /// The forward record moves to the redo stack. Returns `None` when there is
    /// nothing to undo.
    pub fn undo(&mut self) -> Option<EditRecord> {
        let record = self.undo_stack.pop()?;
        let inverse = record.inverted();
        self.redo_stack.push(record);
        Some(inverse)
    }

    /// Pop the most recently undone edit and return it for forward replay.
    ///
    /// The record moves back to the undo stack. Returns `None` when there is
    /// nothing to redo.
    pub fn redo(&mut self) -> Option<EditRecord> {
        let record = self.redo_stack.pop()?;
        self.undo_stack.push(record.clone());
        Some(record)
    }

    /// Whether an undo is available.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Whether a redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Undoable edit count.
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Redoable edit count.
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Drop all history.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_history_is_a_no_op() {
        let mut history = EditHistory::new();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.undo(), None);
        assert_eq!(history.redo(), None);
    }

    #[test]
    fn test_record_clears_redo() {
        let mut history = EditHistory::new();
        history.record(EditRecord::insertion(0, "a"));
        history.undo();
        assert_eq!(history.redo_depth(), 1);

        history.record(EditRecord::insertion(0, "b"));
        assert_eq!(history.redo_depth(), 0);
        assert_eq!(history.undo_depth(), 1);
    }

    #[test]
    fn test_undo_returns_inverse_and_redo_replays_forward() {
        let mut history = EditHistory::new();
        let forward = EditRecord {
            offset: 3,
            removed_text: "old".to_string(),
            inserted_text: "new".to_string(),
        };
        history.record(forward.clone());

        let inverse = history.undo().unwrap();
        assert_eq!(inverse.offset, 3);
        assert_eq!(inverse.removed_text, "new");
        assert_eq!(inverse.inserted_text, "old");
        assert!(history.can_redo());

        let replayed = history.redo().unwrap();
        assert_eq!(replayed, forward);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_depth_limit_discards_oldest() {
        let mut history = EditHistory::with_max_depth(2);
        history.record(EditRecord::insertion(0, "a"));
        history.record(EditRecord::insertion(1, "b"));
        history.record(EditRecord::insertion(2, "c"));
        assert_eq!(history.undo_depth(), 2);

        // The newest edit is still on top.
        let inverse = history.undo().unwrap();
        assert_eq!(inverse.removed_text, "c");
        let inverse = history.undo().unwrap();
        assert_eq!(inverse.removed_text, "b");
        assert_eq!(history.undo(), None);
    }

    #[test]
    fn test_double_inversion_is_identity() {
        let record = EditRecord {
            offset: 7,
            removed_text: "x".to_string(),
            inserted_text: "yz".to_string(),
        };
        assert_eq!(record.inverted().inverted(), record);
    }
}
