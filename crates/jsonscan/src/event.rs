//! Recorded scan events.
//!
//! The scanner itself never materializes events; it calls a [`Sink`]
//! directly. [`EventRecorder`] is a sink that keeps every call as a
//! [`ScanEvent`], which is convenient for tests, debugging and for consumers
//! that prefer to walk a flat list.
//!
//! # Examples
//!
//! ```
//! use jsonscan::{EventRecorder, ScanEvent, scan};
//!
//! let mut recorder = EventRecorder::new();
//! scan(r#"["a",1]"#, &mut recorder).unwrap();
//! assert_eq!(
//!     recorder.into_events(),
//!     vec![
//!         ScanEvent::StartJson { offset: 0 },
//!         ScanEvent::StartArray { offset: 0 },
//!         ScanEvent::String { start: 2, end: 3 },
//!         ScanEvent::Number { start: 5, end: 6, dot_index: None, exp_index: None },
//!         ScanEvent::EndArray { start: 0, end: 6, element_count: 2 },
//!         ScanEvent::EndJson { offset: 7 },
//!     ]
//! );
//! ```
use alloc::vec::Vec;
use core::ops::Range;

use crate::{Sink, Source};

/// One sink callback, with its offsets.
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(any(test, feature = "serde"), serde(tag = "kind"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanEvent {
    StartJson {
        offset: usize,
    },
    EndJson {
        offset: usize,
    },
    StartObject {
        offset: usize,
    },
    EndObject {
        start: usize,
        end: usize,
        element_count: usize,
    },
    StartArray {
        offset: usize,
    },
    EndArray {
        start: usize,
        end: usize,
        element_count: usize,
    },
    String {
        start: usize,
        end: usize,
    },
    Number {
        start: usize,
        end: usize,
        #[cfg_attr(
            any(test, feature = "serde"),
            serde(skip_serializing_if = "Option::is_none", default)
        )]
        dot_index: Option<usize>,
        #[cfg_attr(
            any(test, feature = "serde"),
            serde(skip_serializing_if = "Option::is_none", default)
        )]
        exp_index: Option<usize>,
    },
    Boolean {
        value: bool,
        start: usize,
        end: usize,
    },
    Null {
        start: usize,
        end: usize,
    },
}

impl ScanEvent {
    /// The byte range of a scalar token or of a closed collection.
    ///
    /// Collection spans run from the opening bracket up to (not including)
    /// the closing one. Start events and the `json` markers have no span.
    #[must_use]
    pub fn span(&self) -> Option<Range<usize>> {
        match *self {
            ScanEvent::EndObject { start, end, .. }
            | ScanEvent::EndArray { start, end, .. }
            | ScanEvent::String { start, end }
            | ScanEvent::Number { start, end, .. }
            | ScanEvent::Boolean { start, end, .. }
            | ScanEvent::Null { start, end } => Some(start..end),
            ScanEvent::StartJson { .. }
            | ScanEvent::EndJson { .. }
            | ScanEvent::StartObject { .. }
            | ScanEvent::StartArray { .. } => None,
        }
    }

    /// For number events, whether the token has neither a fraction nor an
    /// exponent.
    #[must_use]
    pub fn is_integer(&self) -> Option<bool> {
        match *self {
            ScanEvent::Number {
                dot_index,
                exp_index,
                ..
            } => Some(dot_index.is_none() && exp_index.is_none()),
            _ => None,
        }
    }
}

/// A [`Sink`] that records every event in order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EventRecorder {
    events: Vec<ScanEvent>,
}

impl EventRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The events recorded so far.
    #[must_use]
    pub fn events(&self) -> &[ScanEvent] {
        &self.events
    }

    /// Consumes the recorder, returning its events.
    #[must_use]
    pub fn into_events(self) -> Vec<ScanEvent> {
        self.events
    }

    /// Forgets everything recorded, keeping the allocation.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl<S: Source + ?Sized> Sink<S> for EventRecorder {
    fn start_json(&mut self, _: &S, offset: usize) {
        self.events.push(ScanEvent::StartJson { offset });
    }

    fn end_json(&mut self, _: &S, offset: usize) {
        self.events.push(ScanEvent::EndJson { offset });
    }

    fn start_object(&mut self, _: &S, offset: usize) {
        self.events.push(ScanEvent::StartObject { offset });
    }

    fn end_object(&mut self, _: &S, start: usize, end: usize, element_count: usize) {
        self.events.push(ScanEvent::EndObject {
            start,
            end,
            element_count,
        });
    }

    fn start_array(&mut self, _: &S, offset: usize) {
        self.events.push(ScanEvent::StartArray { offset });
    }

    fn end_array(&mut self, _: &S, start: usize, end: usize, element_count: usize) {
        self.events.push(ScanEvent::EndArray {
            start,
            end,
            element_count,
        });
    }

    fn string_value(&mut self, _: &S, start: usize, end: usize) {
        self.events.push(ScanEvent::String { start, end });
    }

    fn number_value(
        &mut self,
        _: &S,
        start: usize,
        end: usize,
        dot_index: Option<usize>,
        exp_index: Option<usize>,
    ) {
        self.events.push(ScanEvent::Number {
            start,
            end,
            dot_index,
            exp_index,
        });
    }

    fn boolean_value(&mut self, _: &S, value: bool, start: usize, end: usize) {
        self.events.push(ScanEvent::Boolean { value, start, end });
    }

    fn null_value(&mut self, _: &S, start: usize, end: usize) {
        self.events.push(ScanEvent::Null { start, end });
    }
}
