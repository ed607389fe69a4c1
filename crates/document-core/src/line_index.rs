//! Line index: char offset ↔ (line, column) translation.
//!
//! The index is a table of line-start offsets (the offset immediately following each
//! newline, plus the implicit `0` for the first line). It is maintained incrementally:
//! [`LineIndex::apply_change`] drops entries whose newlines were removed, shifts the
//! entries behind the edit by the length delta, and scans only the inserted text for
//! new newlines. The table is never observed stale by a caller.
//!
//! Lines and columns are 1-based, matching what an editor status bar shows.

use crate::buffer::EditError;

/// A 1-based (line, column) pair derived from a char offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// 1-based line number.
    pub line: usize,
    /// 1-based column within the line, in chars.
    pub column: usize,
}

impl Position {
    /// Create a position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Incrementally maintained table of line-start char offsets.
///
/// Invariants: the table is strictly increasing and its first entry is always `0`;
/// entry `i` is the offset immediately following the i-th newline.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
    len_chars: usize,
}

impl LineIndex {
    /// Create an index for an empty document (one line).
    pub fn new() -> Self {
        Self {
            line_starts: vec![0],
            len_chars: 0,
        }
    }

    /// Build the index from full text.
    pub fn from_text(text: &str) -> Self {
        let mut line_starts = vec![0];
        let mut len_chars = 0usize;
        for ch in text.chars() {
            len_chars += 1;
            if ch == '\n' {
                line_starts.push(len_chars);
            }
        }
        Self {
            line_starts,
            len_chars,
        }
    }

    /// Total line count (N newlines => N + 1 lines).
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Total char count of the indexed document.
    pub fn len_chars(&self) -> usize {
        self.len_chars
    }

    /// Update the index for one edit: `removed_len` chars removed at `offset`, then
    /// `inserted` inserted at `offset`. Offsets are in chars against the pre-edit document.
    ///
    /// Cost is bounded by the size of the edit plus the number of lines behind it,
    /// never by total document size.
    pub fn apply_change(&mut self, offset: usize, removed_len: usize, inserted: &str) {
        let removed_end = offset + removed_len;

        // Line starts inside the removed span lost their newlines.
        let keep = self.line_starts.partition_point(|&start| start <= offset);
        let stale = self.line_starts.partition_point(|&start| start <= removed_end);
        self.line_starts.drain(keep..stale);

        // Everything behind the edit shifts by the length delta.
        let inserted_len = inserted.chars().count();
        if inserted_len >= removed_len {
            let delta = inserted_len - removed_len;
            if delta > 0 {
                for start in &mut self.line_starts[keep..] {
                    *start += delta;
                }
            }
        } else {
            let delta = removed_len - inserted_len;
            for start in &mut self.line_starts[keep..] {
                *start -= delta;
            }
        }

        // Only the inserted text can introduce new line starts.
        let mut new_starts = Vec::new();
        let mut pos = offset;
        for ch in inserted.chars() {
            pos += 1;
            if ch == '\n' {
                new_starts.push(pos);
            }
        }
        self.line_starts.splice(keep..keep, new_starts);

        self.len_chars = self.len_chars + inserted_len - removed_len;
    }

    /// Translate a char offset into a 1-based (line, column) pair.
    ///
    /// Valid offsets are `[0, len]`; the end-of-document offset maps to one past the
    /// last char of the last line.
    pub fn line_and_column_at(&self, offset: usize) -> Result<Position, EditError> {
        if offset > self.len_chars {
            return Err(EditError::InvalidOffset(offset));
        }
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let column = offset - self.line_starts[line - 1] + 1;
        Ok(Position { line, column })
    }

    /// Translate a 1-based (line, column) pair back into a char offset.
    ///
    /// `column` may address one past the last char of the line (the end-of-line caret
    /// slot); anything beyond that is out of range.
    pub fn offset_at(&self, line: usize, column: usize) -> Result<usize, EditError> {
        if line == 0 || line > self.line_count() || column == 0 {
            return Err(EditError::InvalidPosition { line, column });
        }
        let start = self.line_starts[line - 1];
        if column - 1 > self.line_len(line) {
            return Err(EditError::InvalidPosition { line, column });
        }
        Ok(start + column - 1)
    }

    /// Char offset of the start of a 1-based line.
    pub fn line_start(&self, line: usize) -> Result<usize, EditError> {
        if line == 0 || line > self.line_count() {
            return Err(EditError::InvalidPosition { line, column: 1 });
        }
        Ok(self.line_starts[line - 1])
    }

    /// Char length of a 1-based line, excluding its newline.
    fn line_len(&self, line: usize) -> usize {
        let start = self.line_starts[line - 1];
        if line < self.line_count() {
            self.line_starts[line] - start - 1
        } else {
            self.len_chars - start
        }
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::new()
    }
}
