//! The scanning engine.
//!
//! Overview
//! - A pushdown automaton walks the source once, byte by byte, and reports
//!   every token to a [`Sink`] the moment it is recognized. Nothing is
//!   buffered, decoded or copied: events carry offsets into the source.
//! - Nesting is tracked on an explicit [`ContextStack`] instead of the call
//!   stack, so depth is bounded by memory only.
//! - The automaton state is a loop-local [`State`]. Whitespace is skipped
//!   before every dispatch; a closing bracket is checked before the state's
//!   own rule, which is what lets `[]` and `{}` close right after opening.
//!
//! Value scanners live in sibling modules (`string`, `number`, `literal`)
//! as methods on the per-scan [`Lexer`].

mod class;
mod context;
mod lexer;
mod literal;
mod number;
mod string;
mod utf8;

use context::Context;
use lexer::Lexer;
use literal::Literal;

use crate::{ScanError, ScanOptions, Sink, Source};

/// Which tokens are legal next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// A value is expected.
    Data,
    /// Just after `{`: a key or `}`.
    ObjectStart,
    /// After `,` inside an object: a key.
    ObjectKey,
    /// After an object member's value: `,` or `}`.
    ObjectEnd,
    /// Just after `[`: a value or `]`.
    ArrayStart,
    /// After an array element: `,` or `]`.
    ArrayEnd,
    /// After a key: `:`.
    Separator,
}

impl Context {
    /// The state that follows a completed child of this collection.
    fn end_state(self) -> State {
        match self {
            Context::InObject { .. } => State::ObjectEnd,
            Context::InArray { .. } => State::ArrayEnd,
        }
    }
}

/// Scans JSON documents with a fixed set of [`ScanOptions`].
///
/// A `Scanner` holds no per-scan state; one value can be shared freely,
/// including across threads, and every [`scan`](Scanner::scan) call starts
/// from scratch.
///
/// # Examples
///
/// ```
/// use jsonscan::{ErrorKind, Scanner};
///
/// let scanner = Scanner::default();
/// assert!(scanner.scan(r#"{"a": [1, 2.5, true]}"#, &mut ()).is_ok());
///
/// let err = scanner.scan(r#"{"a":}"#, &mut ()).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::MalformedToken { expected: "json value" });
/// assert_eq!(err.offset(), 5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scanner {
    options: ScanOptions,
}

impl Scanner {
    /// Creates a scanner with the given options.
    #[must_use]
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    /// The options this scanner was built with.
    #[must_use]
    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Scans one document whose root must be an object or an array.
    ///
    /// On success `sink` has seen a balanced `start_json` .. `end_json` pair
    /// around the fully closed root. On failure the scan stopped at the first
    /// violation; the sink may hold a prefix of events that should be
    /// discarded.
    ///
    /// # Errors
    ///
    /// Returns a malformed-token error for any grammar violation and an
    /// end-of-input error when the source ends before the root closes.
    pub fn scan<S, K>(&self, source: &S, sink: &mut K) -> Result<(), ScanError>
    where
        S: Source + ?Sized,
        K: Sink<S> + ?Sized,
    {
        Lexer::new(source, self.options).run(sink)
    }
}

/// Scans `source` with default options.
///
/// # Errors
///
/// See [`Scanner::scan`].
pub fn scan<S, K>(source: &S, sink: &mut K) -> Result<(), ScanError>
where
    S: Source + ?Sized,
    K: Sink<S> + ?Sized,
{
    Scanner::default().scan(source, sink)
}

/// Scans `source` with the given options.
///
/// # Errors
///
/// See [`Scanner::scan`].
pub fn scan_with_options<S, K>(
    source: &S,
    sink: &mut K,
    options: ScanOptions,
) -> Result<(), ScanError>
where
    S: Source + ?Sized,
    K: Sink<S> + ?Sized,
{
    Scanner::new(options).scan(source, sink)
}

impl<S: Source + ?Sized> Lexer<'_, S> {
    fn run<K: Sink<S> + ?Sized>(mut self, sink: &mut K) -> Result<(), ScanError> {
        self.skip_whitespace();
        let mut state = match self.peek() {
            Some(byte @ (b'{' | b'[')) => {
                sink.start_json(self.source, self.pos);
                self.open(byte, sink)
            }
            Some(_) => return Err(self.malformed("object or array")),
            None => return Err(self.end_of_input(1)),
        };

        loop {
            self.skip_whitespace();
            let byte = self.peek_required()?;

            let closes = matches!(
                (state, byte),
                (State::ArrayStart | State::ArrayEnd, b']')
                    | (State::ObjectStart | State::ObjectEnd, b'}')
            );
            if closes {
                match self.close(sink)? {
                    Some(next) => {
                        state = next;
                        continue;
                    }
                    None => break,
                }
            }

            state = match state {
                State::Data | State::ArrayStart => self.value(byte, sink)?,
                State::ObjectStart | State::ObjectKey => {
                    if byte != b'"' {
                        return Err(self.malformed(if state == State::ObjectStart {
                            "object key or '}'"
                        } else {
                            "object key"
                        }));
                    }
                    self.pos += 1;
                    let (start, end) = self.scan_string()?;
                    sink.string_value(self.source, start, end);
                    State::Separator
                }
                State::Separator => {
                    if byte != b':' {
                        return Err(self.malformed("':'"));
                    }
                    self.pos += 1;
                    State::Data
                }
                State::ObjectEnd => {
                    if byte != b',' {
                        return Err(self.malformed("',' or '}'"));
                    }
                    self.pos += 1;
                    State::ObjectKey
                }
                State::ArrayEnd => {
                    if byte != b',' {
                        return Err(self.malformed("',' or ']'"));
                    }
                    self.pos += 1;
                    State::Data
                }
            };
        }

        let end = self.pos;
        if !self.options.allow_trailing_content {
            self.skip_whitespace();
            if self.peek().is_some() {
                return Err(self.malformed("end of input"));
            }
        }
        sink.end_json(self.source, end);
        Ok(())
    }

    /// Dispatches on the first byte of a value.
    fn value<K: Sink<S> + ?Sized>(&mut self, byte: u8, sink: &mut K) -> Result<State, ScanError> {
        match byte {
            b'{' | b'[' => return Ok(self.open(byte, sink)),
            b'"' => {
                self.pos += 1;
                let (start, end) = self.scan_string()?;
                sink.string_value(self.source, start, end);
            }
            b'-' | b'0'..=b'9' => {
                let n = self.scan_number()?;
                sink.number_value(self.source, n.start, n.end, n.dot_index, n.exp_index);
            }
            _ => {
                let Some(literal) = Literal::from_first(byte) else {
                    return Err(self.malformed("json value"));
                };
                let (start, end) = self.scan_literal(literal)?;
                match literal {
                    Literal::Null => sink.null_value(self.source, start, end),
                    Literal::True => sink.boolean_value(self.source, true, start, end),
                    Literal::False => sink.boolean_value(self.source, false, start, end),
                }
            }
        }
        self.value_added()
    }

    /// Opens the collection whose bracket is at the cursor.
    fn open<K: Sink<S> + ?Sized>(&mut self, bracket: u8, sink: &mut K) -> State {
        let start = self.pos;
        self.pos += 1;
        if bracket == b'{' {
            self.stack.push_object(start);
            sink.start_object(self.source, start);
            trace!(offset = start, depth = self.stack.depth(), "open object");
            State::ObjectStart
        } else {
            self.stack.push_array(start);
            sink.start_array(self.source, start);
            trace!(offset = start, depth = self.stack.depth(), "open array");
            State::ArrayStart
        }
    }

    /// Closes the innermost collection at the cursor. Returns `None` once the
    /// root has closed.
    fn close<K: Sink<S> + ?Sized>(&mut self, sink: &mut K) -> Result<Option<State>, ScanError> {
        let end = self.pos;
        let Some(context) = self.stack.pop() else {
            return Err(self.malformed("object or array"));
        };
        let (start, count) = (context.start(), context.count());
        match context {
            Context::InObject { .. } => sink.end_object(self.source, start, end, count),
            Context::InArray { .. } => sink.end_array(self.source, start, end, count),
        }
        self.pos += 1;
        trace!(start, end, count, depth = self.stack.depth(), "close");

        if self.stack.depth() == 0 {
            return Ok(None);
        }
        self.value_added().map(Some)
    }

    /// Counts a finished child in the innermost collection.
    fn value_added(&mut self) -> Result<State, ScanError> {
        let Some(top) = self.stack.top_mut() else {
            return Err(self.malformed("object or array"));
        };
        top.value_added();
        Ok(top.end_state())
    }
}
