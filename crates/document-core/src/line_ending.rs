//! Line ending helpers.
//!
//! The engine stores text internally using LF (`'\n'`) newlines. Raw text that uses
//! CRLF (`"\r\n"`) is normalized when a document is loaded, and the preferred line
//! ending is tracked so serialization can restore it.

/// The preferred newline sequence used when serializing a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// Unix-style LF (`'\n'`).
    Lf,
    /// Windows-style CRLF (`"\r\n"`).
    Crlf,
}

impl LineEnding {
    /// Detect the dominant line ending of a source text.
    ///
    /// Policy: any CRLF (`"\r\n"`) in the input selects [`LineEnding::Crlf`],
    /// otherwise [`LineEnding::Lf`].
    pub fn detect_in_text(text: &str) -> Self {
        if text.contains("\r\n") {
            Self::Crlf
        } else {
            Self::Lf
        }
    }

    /// Normalize raw text to internal LF form.
    pub fn normalize(text: &str) -> String {
        text.replace("\r\n", "\n")
    }

    /// Convert LF-normalized text to this line ending for serialization.
    pub fn apply_to_text(self, text: &str) -> String {
        match self {
            Self::Lf => text.to_string(),
            Self::Crlf => text.replace('\n', "\r\n"),
        }
    }

    /// The newline sequence itself.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::Crlf => "\r\n",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect() {
        assert_eq!(LineEnding::detect_in_text("a\nb"), LineEnding::Lf);
        assert_eq!(LineEnding::detect_in_text("a\r\nb"), LineEnding::Crlf);
        assert_eq!(LineEnding::detect_in_text("plain"), LineEnding::Lf);
    }

    #[test]
    fn test_normalize_and_apply_round_trip() {
        let raw = "a\r\nb\r\nc";
        let normalized = LineEnding::normalize(raw);
        assert_eq!(normalized, "a\nb\nc");
        assert_eq!(LineEnding::Crlf.apply_to_text(&normalized), raw);
        assert_eq!(LineEnding::Lf.apply_to_text(&normalized), normalized);
    }
}
