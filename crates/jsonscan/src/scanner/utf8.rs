//! Table-driven UTF-8 structure checks.
//!
//! Two constants stand in for a decoder:
//!
//! - `LENGTHS` packs 16 two-bit entries, indexed by the high nibble of a
//!   leading byte, giving the number of continuation bytes that follow it.
//! - `VALID` is a 32-bit mask indexed by the top five bits of a byte. A set
//!   bit means the byte may start a code point inside a string: printable
//!   ASCII (`>= 0x20`) or a multi-byte leading byte. Control characters,
//!   continuation bytes and `0xF8..=0xFF` are clear.
//!
//! Nothing here decodes the scalar value. Range checks that catch overlong
//! forms, surrogates and values past U+10FFFF are applied separately, only
//! under [`Utf8Validation::Strict`](crate::Utf8Validation::Strict).

use core::ops::RangeInclusive;

// nibble:  0-7 -> 0, 8-B -> 0 (rejected by VALID), C-D -> 1, E -> 2, F -> 3
const LENGTHS: u32 = 0b11_10_01_01_00_00_00_00_00_00_00_00_00_00_00_00;

// top five bits: 00100..=01111 (0x20..=0x7F), 11000..=11110 (0xC0..=0xF7)
const VALID: u32 = 0b01111111_00000000_11111111_11110000;

/// Whether `byte` may begin a code point inside a string.
#[inline(always)]
pub(super) fn is_valid_lead(byte: u8) -> bool {
    (VALID >> (byte >> 3)) & 1 == 1
}

/// How many continuation bytes follow a valid leading byte.
#[inline(always)]
pub(super) fn continuation_len(lead: u8) -> usize {
    ((LENGTHS >> ((lead >> 4) * 2)) & 0b11) as usize
}

/// Whether `byte` has the `10xxxxxx` continuation pattern.
#[inline(always)]
pub(super) fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// The bytes allowed right after `lead` in well-formed UTF-8 (Unicode
/// table 3-7). `None` for leading bytes that are never well formed.
pub(super) fn strict_second_byte(lead: u8) -> Option<RangeInclusive<u8>> {
    match lead {
        0xC2..=0xDF | 0xE1..=0xEC | 0xEE..=0xEF | 0xF1..=0xF3 => Some(0x80..=0xBF),
        0xE0 => Some(0xA0..=0xBF),
        0xED => Some(0x80..=0x9F),
        0xF0 => Some(0x90..=0xBF),
        0xF4 => Some(0x80..=0x8F),
        _ => None,
    }
}
