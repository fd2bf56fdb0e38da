//! String recognition.
//!
//! Strings are validated, never unescaped: the caller gets the raw span
//! between the quotes and decodes it (or not) on its own terms.

use super::{
    class::{self, ESCAPE, HEX, STRING_STOP},
    lexer::Lexer,
    utf8,
};
use crate::{ScanError, Source, Utf8Validation};

impl<S: Source + ?Sized> Lexer<'_, S> {
    /// Scans a string whose opening quote was just consumed. Leaves the
    /// cursor past the closing quote and returns the raw content span.
    pub(super) fn scan_string(&mut self) -> Result<(usize, usize), ScanError> {
        let start = self.pos;
        loop {
            match self.peek() {
                Some(byte) if !class::is(byte, STRING_STOP) => self.pos += 1,
                Some(b'"') => {
                    let end = self.pos;
                    self.pos += 1;
                    return Ok((start, end));
                }
                Some(byte) if byte < 0x20 => return Err(self.malformed("non-control character")),
                // backslash or the first non-ASCII byte
                Some(_) => return self.scan_string_slow(start),
                None => return Err(self.end_of_input(1)),
            }
        }
    }

    fn scan_string_slow(&mut self, start: usize) -> Result<(usize, usize), ScanError> {
        loop {
            match self.peek_required()? {
                b'"' => {
                    let end = self.pos;
                    self.pos += 1;
                    return Ok((start, end));
                }
                b'\\' => {
                    self.pos += 1;
                    self.scan_escape()?;
                }
                byte => self.scan_code_point(byte)?,
            }
        }
    }

    /// Validates the escape whose backslash was just consumed.
    fn scan_escape(&mut self) -> Result<(), ScanError> {
        let byte = self.peek_required()?;
        if class::is(byte, ESCAPE) {
            self.pos += 1;
            return Ok(());
        }
        if byte != b'u' {
            return Err(self.malformed("escape character"));
        }
        self.pos += 1;
        for read in 0..4 {
            match self.peek() {
                Some(digit) if class::is(digit, HEX) => self.pos += 1,
                Some(_) => return Err(self.malformed("hex digit")),
                None => return Err(self.end_of_input(4 - read)),
            }
        }
        Ok(())
    }

    /// Consumes one unescaped code point starting with `lead`.
    fn scan_code_point(&mut self, lead: u8) -> Result<(), ScanError> {
        if !utf8::is_valid_lead(lead) {
            return Err(self.malformed(if lead < 0x20 {
                "non-control character"
            } else {
                "UTF-8 leading byte"
            }));
        }
        let len = utf8::continuation_len(lead);
        if len == 0 {
            self.pos += 1;
            return Ok(());
        }

        let second = match self.options.utf8 {
            Utf8Validation::Structural => None,
            Utf8Validation::Strict => match utf8::strict_second_byte(lead) {
                Some(range) => Some(range),
                None => return Err(self.malformed("well-formed UTF-8 leading byte")),
            },
        };
        self.pos += 1;

        for read in 0..len {
            let Some(byte) = self.peek() else {
                return Err(self.end_of_input(len - read));
            };
            let ok = match (&second, read) {
                (Some(range), 0) => range.contains(&byte),
                _ => utf8::is_continuation(byte),
            };
            if !ok {
                return Err(self.malformed("UTF-8 continuation byte"));
            }
            self.pos += 1;
        }
        Ok(())
    }
}
