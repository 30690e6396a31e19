//! Read configuration

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A line-ending marker of one or two characters
///
/// Two-character markers only match when both characters appear consecutively;
/// the first character alone never ends a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineEnding {
    first: char,
    second: Option<char>,
}

impl LineEnding {
    /// Unix convention (`\n`)
    pub const LF: LineEnding = LineEnding {
        first: '\n',
        second: None,
    };

    /// Windows convention (`\r\n`)
    pub const CRLF: LineEnding = LineEnding {
        first: '\r',
        second: Some('\n'),
    };

    /// Classic Mac convention (`\r`)
    pub const CR: LineEnding = LineEnding {
        first: '\r',
        second: None,
    };

    /// Create a marker from an arbitrary one- or two-character string
    pub fn new(marker: &str) -> Result<Self> {
        let mut chars = marker.chars();
        let first = chars.next().ok_or(Error::InvalidLineEnding)?;
        let second = chars.next();
        if chars.next().is_some() {
            return Err(Error::InvalidLineEnding);
        }
        Ok(LineEnding { first, second })
    }

    /// The convention of the compilation target
    pub fn platform_default() -> Self {
        if cfg!(windows) {
            LineEnding::CRLF
        } else {
            LineEnding::LF
        }
    }

    /// First (or only) character of the marker
    pub fn first(&self) -> char {
        self.first
    }

    /// Second character, for two-character markers
    pub fn second(&self) -> Option<char> {
        self.second
    }

    /// Whether this marker needs a two-character lookahead
    pub fn is_two_char(&self) -> bool {
        self.second.is_some()
    }
}

/// Configuration for reading a tabular-text document
///
/// Built with chained methods and passed to [`read_str`](crate::read_str),
/// [`read_path`](crate::read_path) or [`RowCursor::open`](crate::RowCursor::open).
/// Never mutated once a parse begins.
///
/// # Examples
///
/// ```
/// use tabstream::ReadOptions;
///
/// let options = ReadOptions::new()
///     .with_delimiters(",;")
///     .with_header(true)
///     .with_start_row(2);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReadOptions {
    /// Set of characters, any one of which ends a cell (empty set disables)
    pub delimiters: String,
    /// Set of characters, any one of which opens a quoted cell (empty set disables)
    pub quotes: String,
    /// Line-ending marker; `None` auto-detects from the input
    pub line_ending: Option<LineEnding>,
    /// Whether the first retained row is a header
    pub has_header: bool,
    /// 0-based physical line index at which row recording begins
    pub start_row: usize,
    /// WHATWG encoding label for decoding file input
    pub encoding: String,
}

impl Default for ReadOptions {
    fn default() -> Self {
        ReadOptions {
            delimiters: ",".to_string(),
            quotes: "\"".to_string(),
            line_ending: None,
            has_header: false,
            start_row: 0,
            encoding: "utf-8".to_string(),
        }
    }
}

impl ReadOptions {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the delimiter set (builder pattern)
    pub fn with_delimiters(mut self, delimiters: &str) -> Self {
        self.delimiters = delimiters.to_string();
        self
    }

    /// Set the quote-character set (builder pattern)
    pub fn with_quotes(mut self, quotes: &str) -> Self {
        self.quotes = quotes.to_string();
        self
    }

    /// Fix the line-ending marker instead of auto-detecting (builder pattern)
    pub fn with_line_ending(mut self, ending: LineEnding) -> Self {
        self.line_ending = Some(ending);
        self
    }

    /// Indicate that the first retained row contains headers (builder pattern)
    pub fn with_header(mut self, has: bool) -> Self {
        self.has_header = has;
        self
    }

    /// Discard all physical lines before this 0-based index (builder pattern)
    pub fn with_start_row(mut self, start_row: usize) -> Self {
        self.start_row = start_row;
        self
    }

    /// Set the text encoding by WHATWG label, e.g. `"utf-8"`, `"utf-16le"`,
    /// `"windows-1252"` (builder pattern)
    pub fn with_encoding(mut self, label: &str) -> Self {
        self.encoding = label.to_string();
        self
    }

    /// Tab-separated configuration
    pub fn tsv() -> Self {
        Self::new().with_delimiters("\t")
    }

    /// Pipe-separated configuration
    pub fn pipe() -> Self {
        Self::new().with_delimiters("|")
    }

    /// Resolve the configured encoding label
    pub(crate) fn resolve_encoding(&self) -> Result<&'static encoding_rs::Encoding> {
        encoding_rs::Encoding::for_label(self.encoding.as_bytes())
            .ok_or_else(|| Error::UnknownEncoding(self.encoding.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_ending_validation() {
        assert_eq!(LineEnding::new("\n").unwrap(), LineEnding::LF);
        assert_eq!(LineEnding::new("\r\n").unwrap(), LineEnding::CRLF);
        assert!(LineEnding::new("").is_err());
        assert!(LineEnding::new("\r\n\n").is_err());
    }

    #[test]
    fn test_builder() {
        let options = ReadOptions::new()
            .with_delimiters(";|")
            .with_quotes("'\"")
            .with_header(true)
            .with_start_row(3)
            .with_line_ending(LineEnding::CRLF);
        assert_eq!(options.delimiters, ";|");
        assert_eq!(options.quotes, "'\"");
        assert!(options.has_header);
        assert_eq!(options.start_row, 3);
        assert_eq!(options.line_ending, Some(LineEnding::CRLF));
    }

    #[test]
    fn test_presets() {
        assert_eq!(ReadOptions::tsv().delimiters, "\t");
        assert_eq!(ReadOptions::pipe().delimiters, "|");
    }

    #[test]
    fn test_encoding_labels() {
        assert!(ReadOptions::new().resolve_encoding().is_ok());
        assert!(ReadOptions::new()
            .with_encoding("not-a-real-encoding")
            .resolve_encoding()
            .is_err());
    }
}
