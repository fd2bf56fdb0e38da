//! Bookkeeping for open collections.

use alloc::vec::Vec;

/// One open object or array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Context {
    InObject { start: usize, count: usize },
    InArray { start: usize, count: usize },
}

impl Context {
    pub(super) fn start(self) -> usize {
        match self {
            Context::InObject { start, .. } | Context::InArray { start, .. } => start,
        }
    }

    pub(super) fn count(self) -> usize {
        match self {
            Context::InObject { count, .. } | Context::InArray { count, .. } => count,
        }
    }

    /// Records one more completed child.
    pub(super) fn value_added(&mut self) {
        match self {
            Context::InObject { count, .. } | Context::InArray { count, .. } => *count += 1,
        }
    }
}

/// LIFO of open collections; its depth is the current nesting depth.
#[derive(Debug, Default)]
pub(super) struct ContextStack {
    frames: Vec<Context>,
}

impl ContextStack {
    pub(super) fn push_object(&mut self, start: usize) {
        self.frames.push(Context::InObject { start, count: 0 });
    }

    pub(super) fn push_array(&mut self, start: usize) {
        self.frames.push(Context::InArray { start, count: 0 });
    }

    pub(super) fn pop(&mut self) -> Option<Context> {
        self.frames.pop()
    }

    pub(super) fn top_mut(&mut self) -> Option<&mut Context> {
        self.frames.last_mut()
    }

    pub(super) fn depth(&self) -> usize {
        self.frames.len()
    }
}
