//! Consumer side of a scan.

use crate::Source;

/// Receives scan events as soon as each token is recognized.
///
/// All offsets are byte offsets into `source`; spans are half-open
/// `[start, end)`. String spans cover the raw content between the quotes,
/// escapes included. Keys and values both arrive through
/// [`string_value`](Sink::string_value): inside an object the strings
/// alternate key, value.
///
/// Every method has an empty default body, so `()` serves as a
/// validation-only sink.
///
/// When a scan fails the sink may already have seen a prefix of the events;
/// any state built from them should be discarded.
#[allow(unused_variables)]
pub trait Sink<S: Source + ?Sized> {
    /// The scan found the root collection starting at `offset`.
    fn start_json(&mut self, source: &S, offset: usize) {}

    /// The root collection closed; `offset` is just past its last byte.
    fn end_json(&mut self, source: &S, offset: usize) {}

    /// An object opens at `offset`.
    fn start_object(&mut self, source: &S, offset: usize) {}

    /// The object opened at `start` closes at `end` (the offset of `}`)
    /// after `element_count` members.
    fn end_object(&mut self, source: &S, start: usize, end: usize, element_count: usize) {}

    /// An array opens at `offset`.
    fn start_array(&mut self, source: &S, offset: usize) {}

    /// The array opened at `start` closes at `end` (the offset of `]`)
    /// after `element_count` elements.
    fn end_array(&mut self, source: &S, start: usize, end: usize, element_count: usize) {}

    /// A string key or value, still escaped.
    fn string_value(&mut self, source: &S, start: usize, end: usize) {}

    /// A number token. `dot_index` and `exp_index` are the absolute offsets
    /// of `.` and `e`/`E` when the token has them.
    fn number_value(
        &mut self,
        source: &S,
        start: usize,
        end: usize,
        dot_index: Option<usize>,
        exp_index: Option<usize>,
    ) {
    }

    /// A `true` or `false` literal.
    fn boolean_value(&mut self, source: &S, value: bool, start: usize, end: usize) {}

    /// A `null` literal.
    fn null_value(&mut self, source: &S, start: usize, end: usize) {}
}

impl<S: Source + ?Sized> Sink<S> for () {}

impl<S: Source + ?Sized, K: Sink<S> + ?Sized> Sink<S> for &mut K {
    fn start_json(&mut self, source: &S, offset: usize) {
        (**self).start_json(source, offset);
    }

    fn end_json(&mut self, source: &S, offset: usize) {
        (**self).end_json(source, offset);
    }

    fn start_object(&mut self, source: &S, offset: usize) {
        (**self).start_object(source, offset);
    }

    fn end_object(&mut self, source: &S, start: usize, end: usize, element_count: usize) {
        (**self).end_object(source, start, end, element_count);
    }

    fn start_array(&mut self, source: &S, offset: usize) {
        (**self).start_array(source, offset);
    }

    fn end_array(&mut self, source: &S, start: usize, end: usize, element_count: usize) {
        (**self).end_array(source, start, end, element_count);
    }

    fn string_value(&mut self, source: &S, start: usize, end: usize) {
        (**self).string_value(source, start, end);
    }

    fn number_value(
        &mut self,
        source: &S,
        start: usize,
        end: usize,
        dot_index: Option<usize>,
        exp_index: Option<usize>,
    ) {
        (**self).number_value(source, start, end, dot_index, exp_index);
    }

    fn boolean_value(&mut self, source: &S, value: bool, start: usize, end: usize) {
        (**self).boolean_value(source, value, start, end);
    }

    fn null_value(&mut self, source: &S, start: usize, end: usize) {
        (**self).null_value(source, start, end);
    }
}
