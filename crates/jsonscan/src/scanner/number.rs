//! Number delimiting.
//!
//! The scanner never computes a numeric value. It only finds where the token
//! ends and where its `.` and exponent marker sit, so the consumer can pick an
//! integer or floating representation without scanning the bytes again.

use super::{class, lexer::Lexer};
use crate::{ScanError, Source};

/// A delimited number token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct NumberToken {
    pub(super) start: usize,
    pub(super) end: usize,
    pub(super) dot_index: Option<usize>,
    pub(super) exp_index: Option<usize>,
}

impl<S: Source + ?Sized> Lexer<'_, S> {
    /// Scans a number starting at the cursor (`-` or a digit).
    ///
    /// A leading `0` ends the integer part: in `01` the token is `0` and the
    /// `1` is left for the driver, which rejects it.
    pub(super) fn scan_number(&mut self) -> Result<NumberToken, ScanError> {
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.pos += 1;
        }

        match self.peek_required()? {
            b'0' => self.pos += 1,
            b'1'..=b'9' => {
                self.pos += 1;
                self.skip_digits();
            }
            _ => return Err(self.malformed("digit")),
        }

        let mut dot_index = None;
        if self.peek() == Some(b'.') {
            dot_index = Some(self.pos);
            self.pos += 1;
            self.expect_digits()?;
        }

        let mut exp_index = None;
        if matches!(self.peek(), Some(b'e' | b'E')) {
            exp_index = Some(self.pos);
            self.pos += 1;
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            self.expect_digits()?;
        }

        Ok(NumberToken {
            start,
            end: self.pos,
            dot_index,
            exp_index,
        })
    }

    /// One or more digits.
    fn expect_digits(&mut self) -> Result<(), ScanError> {
        if !class::is(self.peek_required()?, class::DIGIT) {
            return Err(self.malformed("digit"));
        }
        self.pos += 1;
        self.skip_digits();
        Ok(())
    }
}
