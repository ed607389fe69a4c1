//! Literal find/replace over a content snapshot.
//!
//! These APIs are stateless: each call takes a `&str` snapshot and returns plain
//! values, using **char offsets** (not bytes) for all public inputs/outputs. The
//! query is always matched literally; it is escaped and compiled into a regex so
//! that case-insensitive matching stays Unicode-correct.
//!
//! Searches never wrap around the document boundary. The caller decides whether a
//! miss should be retried from the opposite end.

use regex::{Regex, RegexBuilder};

/// Options that control how a query is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// If `true`, performs a case-sensitive search.
    pub case_sensitive: bool,
    /// If `true`, matches only whole words (ASCII-alphanumeric and `_`).
    pub whole_word: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            whole_word: false,
        }
    }
}

/// A match expressed as a half-open char range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchMatch {
    /// Inclusive start char offset.
    pub start: usize,
    /// Exclusive end char offset.
    pub end: usize,
}

impl SearchMatch {
    /// Length of the match in chars.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if the match is empty.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Result of a replace operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// Content after substitution.
    pub text: String,
    /// Number of occurrences replaced.
    pub count: usize,
}

/// Search errors.
#[derive(Debug)]
pub enum SearchError {
    /// The query failed to compile. Queries are escaped before compilation, so this
    /// is not reachable through normal use; the `Result` shape is kept for the seam.
    InvalidQuery(regex::Error),
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidQuery(err) => write!(f, "Invalid search query: {}", err),
        }
    }
}

impl std::error::Error for SearchError {}

#[derive(Debug)]
struct CharIndex {
    char_to_byte: Vec<usize>,
    text_len: usize,
}

impl CharIndex {
    fn new(text: &str) -> Self {
        let mut char_to_byte: Vec<usize> = text.char_indices().map(|(b, _)| b).collect();
        char_to_byte.push(text.len());
        Self {
            char_to_byte,
            text_len: text.len(),
        }
    }

    fn char_count(&self) -> usize {
        self.char_to_byte.len().saturating_sub(1)
    }

    fn char_to_byte(&self, char_offset: usize) -> usize {
        let clamped = char_offset.min(self.char_count());
        self.char_to_byte
            .get(clamped)
            .cloned()
            .unwrap_or(self.text_len)
    }

    fn byte_to_char(&self, byte_offset: usize) -> usize {
        let clamped = byte_offset.min(self.text_len);
        match self.char_to_byte.binary_search(&clamped) {
            Ok(idx) => idx,
            Err(idx) => idx,
        }
    }

    fn char_at(&self, text: &str, char_offset: usize) -> Option<char> {
        if char_offset >= self.char_count() {
            return None;
        }
        let start = self.char_to_byte[char_offset];
        let end = self.char_to_byte[char_offset + 1];
        text.get(start..end)?.chars().next()
    }
}

fn compile_query(query: &str, options: SearchOptions) -> Result<Regex, SearchError> {
    RegexBuilder::new(&regex::escape(query))
        .case_insensitive(!options.case_sensitive)
        .build()
        .map_err(SearchError::InvalidQuery)
}

fn is_word_char(ch: char) -> bool {
    ch == '_' || ch.is_alphanumeric()
}

fn is_whole_word(text: &str, index: &CharIndex, m: SearchMatch) -> bool {
    if m.is_empty() {
        return false;
    }

    let before = if m.start == 0 {
        None
    } else {
        index.char_at(text, m.start - 1)
    };
    let after = index.char_at(text, m.end);

    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

/// Find the leftmost occurrence of `query` starting at or after `from_char`.
///
/// Returns `Ok(None)` on a miss or an empty query; a miss is an expected result,
/// not a failure.
pub fn find_forward(
    text: &str,
    query: &str,
    options: SearchOptions,
    from_char: usize,
) -> Result<Option<SearchMatch>, SearchError> {
    if query.is_empty() {
        return Ok(None);
    }

    let re = compile_query(query, options)?;
    let index = CharIndex::new(text);

    let mut start_char = from_char.min(index.char_count());
    loop {
        let start_byte = index.char_to_byte(start_char);
        let Some(m) = re.find_at(text, start_byte) else {
            return Ok(None);
        };

        let candidate = SearchMatch {
            start: index.byte_to_char(m.start()),
            end: index.byte_to_char(m.end()),
        };

        if options.whole_word && !is_whole_word(text, &index, candidate) {
            if candidate.end >= index.char_count() {
                return Ok(None);
            }
            start_char = candidate.end;
            continue;
        }

        return Ok(Some(candidate));
    }
}

/// Find the rightmost occurrence of `query` starting at or before `from_char`.
///
/// The match may extend past `from_char`; only its start is bounded. Returns
/// `Ok(None)` on a miss or an empty query.
pub fn find_backward(
    text: &str,
    query: &str,
    options: SearchOptions,
    from_char: usize,
) -> Result<Option<SearchMatch>, SearchError> {
    if query.is_empty() {
        return Ok(None);
    }

    let re = compile_query(query, options)?;
    let index = CharIndex::new(text);

    let mut last: Option<SearchMatch> = None;
    for m in re.find_iter(text) {
        let candidate = SearchMatch {
            start: index.byte_to_char(m.start()),
            end: index.byte_to_char(m.end()),
        };

        if candidate.start > from_char {
            break;
        }
        if options.whole_word && !is_whole_word(text, &index, candidate) {
            continue;
        }

        last = Some(candidate);
    }

    Ok(last)
}

/// Replace every occurrence of `query` in `text`, left to right, non-overlapping.
///
/// Matches are located in the original content only; a replacement that contains
/// the query is never re-matched, so substitution terminates in one pass. An empty
/// query replaces nothing.
pub fn replace_all(
    text: &str,
    query: &str,
    replacement: &str,
    options: SearchOptions,
) -> Result<Replacement, SearchError> {
    replace_up_to(text, query, replacement, options, usize::MAX)
}

/// Replace only the first occurrence of `query` in `text`.
pub fn replace_first(
    text: &str,
    query: &str,
    replacement: &str,
    options: SearchOptions,
) -> Result<Replacement, SearchError> {
    replace_up_to(text, query, replacement, options, 1)
}

fn replace_up_to(
    text: &str,
    query: &str,
    replacement: &str,
    options: SearchOptions,
    limit: usize,
) -> Result<Replacement, SearchError> {
    if query.is_empty() || limit == 0 {
        return Ok(Replacement {
            text: text.to_string(),
            count: 0,
        });
    }

    let re = compile_query(query, options)?;
    let index = CharIndex::new(text);

    let mut out = String::with_capacity(text.len());
    let mut count = 0usize;
    let mut last_byte = 0usize;

    for m in re.find_iter(text) {
        if count >= limit {
            break;
        }
        if options.whole_word {
            let candidate = SearchMatch {
                start: index.byte_to_char(m.start()),
                end: index.byte_to_char(m.end()),
            };
            if !is_whole_word(text, &index, candidate) {
                continue;
            }
        }

        out.push_str(&text[last_byte..m.start()]);
        out.push_str(replacement);
        last_byte = m.end();
        count += 1;
    }

    out.push_str(&text[last_byte..]);
    Ok(Replacement { text: out, count })
}
