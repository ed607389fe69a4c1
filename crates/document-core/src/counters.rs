//! Word and letter statistics, recomputed on demand.
//!
//! These counts are derived state for status displays; they are recomputed from the
//! full content on each call rather than maintained incrementally (documents handled
//! by this engine are small, and correctness wins).

/// Word and letter counts over one content snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStats {
    /// Whitespace-separated word count.
    pub words: usize,
    /// Char count excluding ASCII spaces.
    pub letters: usize,
}

/// Count words: maximal runs of non-whitespace, where whitespace is space, tab,
/// newline, or carriage return. Leading, trailing, and consecutive separators
/// produce no empty words. Empty content counts zero.
pub fn word_count(text: &str) -> usize {
    text.split(|ch: char| matches!(ch, ' ' | '\t' | '\n' | '\r'))
        .filter(|word| !word.is_empty())
        .count()
}

/// Count letters: every char except the ASCII space `' '`.
///
/// Only the literal space is excluded; tabs and newlines are counted. This odd rule
/// is an observable contract of the engine, kept deliberately.
pub fn letter_count(text: &str) -> usize {
    text.chars().filter(|&ch| ch != ' ').count()
}

/// Compute both counts in one pass over the content.
pub fn stats(text: &str) -> TextStats {
    TextStats {
        words: word_count(text),
        letters: letter_count(text),
    }
}
