//! Fixed-token matching for `true`, `false` and `null`.

use super::lexer::Lexer;
use crate::{ScanError, Source};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Literal {
    Null,
    True,
    False,
}

impl Literal {
    /// The literal that starts with `first`, if any.
    pub(super) fn from_first(first: u8) -> Option<Self> {
        match first {
            b'n' => Some(Literal::Null),
            b't' => Some(Literal::True),
            b'f' => Some(Literal::False),
            _ => None,
        }
    }

    fn text(self) -> &'static [u8] {
        match self {
            Literal::Null => b"null",
            Literal::True => b"true",
            Literal::False => b"false",
        }
    }

    fn expected(self) -> &'static str {
        match self {
            Literal::Null => "null",
            Literal::True => "true",
            Literal::False => "false",
        }
    }
}

impl<S: Source + ?Sized> Lexer<'_, S> {
    /// Matches `literal` at the cursor and returns its span.
    ///
    /// The remaining length is checked up front, so a truncated literal is
    /// reported as end of input even when the bytes present already differ.
    pub(super) fn scan_literal(&mut self, literal: Literal) -> Result<(usize, usize), ScanError> {
        let text = literal.text();
        if self.remaining() < text.len() {
            return Err(self.end_of_input(text.len()));
        }
        let start = self.pos;
        let matches = text
            .iter()
            .enumerate()
            .all(|(i, &b)| self.source.byte_at(start + i) == Some(b));
        if !matches {
            return Err(self.malformed(literal.expected()));
        }
        self.pos += text.len();
        Ok((start, self.pos))
    }
}
