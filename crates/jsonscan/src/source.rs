//! Random-access byte input.

use alloc::{string::String, vec::Vec};

use bstr::BStr;

/// Indexed, read-only access to the bytes being scanned.
///
/// Reads at or past [`len`](Source::len) return `None`; the scanner turns
/// that into an end-of-input error carrying the current position.
pub trait Source {
    /// The byte at `offset`, or `None` past the end.
    fn byte_at(&self, offset: usize) -> Option<u8>;

    /// Number of bytes in the source.
    fn len(&self) -> usize;

    /// Returns `true` if the source holds no bytes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Source for [u8] {
    #[inline]
    fn byte_at(&self, offset: usize) -> Option<u8> {
        self.get(offset).copied()
    }

    #[inline]
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }
}

impl Source for str {
    #[inline]
    fn byte_at(&self, offset: usize) -> Option<u8> {
        self.as_bytes().get(offset).copied()
    }

    #[inline]
    fn len(&self) -> usize {
        str::len(self)
    }
}

impl Source for Vec<u8> {
    #[inline]
    fn byte_at(&self, offset: usize) -> Option<u8> {
        self.as_slice().byte_at(offset)
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl Source for String {
    #[inline]
    fn byte_at(&self, offset: usize) -> Option<u8> {
        self.as_str().byte_at(offset)
    }

    #[inline]
    fn len(&self) -> usize {
        String::len(self)
    }
}

impl Source for BStr {
    #[inline]
    fn byte_at(&self, offset: usize) -> Option<u8> {
        self.get(offset).copied()
    }

    #[inline]
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }
}

impl<T: Source + ?Sized> Source for &T {
    #[inline]
    fn byte_at(&self, offset: usize) -> Option<u8> {
        (**self).byte_at(offset)
    }

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }
}
