//! Per-scan state: the cursor, line tracking, the context stack and error
//! construction.

use super::{class, context::ContextStack};
use crate::{ErrorKind, ScanError, ScanOptions, Source};

/// Everything one scan mutates. Created at the start of a scan and dropped
/// at its end, whatever the outcome.
pub(super) struct Lexer<'s, S: Source + ?Sized> {
    pub(super) source: &'s S,
    pub(super) options: ScanOptions,
    pub(super) stack: ContextStack,
    /// Next unconsumed byte.
    pub(super) pos: usize,
    line: usize,
    /// Offset of the first byte after the last consumed newline.
    line_start: usize,
}

impl<'s, S: Source + ?Sized> Lexer<'s, S> {
    pub(super) fn new(source: &'s S, options: ScanOptions) -> Self {
        Self {
            source,
            options,
            stack: ContextStack::default(),
            pos: 0,
            line: 0,
            line_start: 0,
        }
    }

    #[inline]
    pub(super) fn peek(&self) -> Option<u8> {
        self.source.byte_at(self.pos)
    }

    /// The next byte, or an end-of-input error asking for one more.
    #[inline]
    pub(super) fn peek_required(&self) -> Result<u8, ScanError> {
        self.peek().ok_or_else(|| self.end_of_input(1))
    }

    #[inline]
    pub(super) fn remaining(&self) -> usize {
        self.source.len().saturating_sub(self.pos)
    }

    /// Skips JSON whitespace. Newlines are only ever consumed here, so this
    /// is the only place the line tracker moves.
    #[inline]
    pub(super) fn skip_whitespace(&mut self) {
        while let Some(byte) = self.peek() {
            if !class::is(byte, class::WHITESPACE) {
                break;
            }
            self.pos += 1;
            if byte == b'\n' {
                self.line += 1;
                self.line_start = self.pos;
            }
        }
    }

    /// Consumes a run of ASCII digits.
    #[inline]
    pub(super) fn skip_digits(&mut self) {
        while let Some(byte) = self.peek() {
            if !class::is(byte, class::DIGIT) {
                break;
            }
            self.pos += 1;
        }
    }

    /// A malformed-token error at the cursor.
    #[cold]
    pub(super) fn malformed(&self, expected: &'static str) -> ScanError {
        self.error_at(self.pos, ErrorKind::MalformedToken { expected })
    }

    /// An end-of-input error at the cursor for a token that still needed
    /// `required` bytes.
    #[cold]
    pub(super) fn end_of_input(&self, required: usize) -> ScanError {
        self.error_at(
            self.pos,
            ErrorKind::EndOfInput {
                required,
                available: self.remaining(),
            },
        )
    }

    fn error_at(&self, offset: usize, kind: ErrorKind) -> ScanError {
        let err = ScanError {
            kind,
            line: self.line,
            column: offset.saturating_sub(self.line_start),
            offset,
        };
        debug!(%err, depth = self.stack.depth(), "scan failed");
        #[cfg(any(test, feature = "fuzzing"))]
        if self.options.panic_on_error {
            panic!("{err}");
        }
        err
    }
}
