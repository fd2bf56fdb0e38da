use thiserror::Error;

/// A scan failure, positioned at the byte where the scanner gave up.
///
/// `line` counts the newlines consumed before the failure (starting at 0) and
/// `column` is the byte distance from the first byte after the last newline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at line {line}, column {column} (offset {offset})")]
pub struct ScanError {
    pub(crate) kind: ErrorKind,
    pub(crate) line: usize,
    pub(crate) column: usize,
    pub(crate) offset: usize,
}

/// What went wrong.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A byte that the grammar does not allow at this position.
    #[error("malformed token: expected {expected}")]
    MalformedToken {
        /// Human-readable description of what would have been legal here.
        expected: &'static str,
    },
    /// The source ended while the current token still needed more bytes.
    #[error("unexpected end of input: {required} more byte(s) required, {available} available")]
    EndOfInput {
        /// Bytes the token being read still needed.
        required: usize,
        /// Bytes that were left in the source.
        available: usize,
    },
}

impl ScanError {
    /// The failure category.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Zero-based line of the failure.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Zero-based byte column of the failure.
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }

    /// Absolute byte offset of the failure.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns `true` if the scan failed because the input was truncated.
    #[must_use]
    pub fn is_end_of_input(&self) -> bool {
        matches!(self.kind, ErrorKind::EndOfInput { .. })
    }
}
