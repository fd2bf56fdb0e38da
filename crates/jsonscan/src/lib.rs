//! A zero-copy structural JSON scanner.
//!
//! `jsonscan` walks a JSON document once and reports objects, arrays,
//! strings, numbers, booleans and nulls to a [`Sink`] as byte offsets into
//! the source. It builds no tree and does not unescape strings or parse
//! numbers; consumers decide what to materialize.
//!
//! ```rust
//! use jsonscan::{EventRecorder, ScanEvent, scan};
//!
//! let src = r#"{"a":1,"b":[true,false,null]}"#;
//! let mut recorder = EventRecorder::new();
//! scan(src, &mut recorder).unwrap();
//!
//! let events = recorder.into_events();
//! assert_eq!(events.first(), Some(&ScanEvent::StartJson { offset: 0 }));
//! assert_eq!(
//!     events[events.len() - 2],
//!     ScanEvent::EndObject { start: 0, end: 28, element_count: 2 }
//! );
//! ```

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

#[cfg(feature = "tracing")]
macro_rules! trace {
    ($($arg:tt)*) => { ::tracing::trace!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! debug {
    ($($arg:tt)*) => { ::tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

mod error;
mod event;
mod options;
mod scanner;
mod sink;
mod source;

#[cfg(test)]
mod tests;

pub use error::{ErrorKind, ScanError};
pub use event::{EventRecorder, ScanEvent};
pub use options::{ScanOptions, Utf8Validation};
pub use scanner::{Scanner, scan, scan_with_options};
pub use sink::Sink;
pub use source::Source;
