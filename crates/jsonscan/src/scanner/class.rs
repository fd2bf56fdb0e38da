//! Byte classification.
//!
//! One table lookup answers every "what kind of byte is this" question the
//! driver and the value scanners ask in their hot loops.

pub(super) const WHITESPACE: u8 = 1 << 0;
pub(super) const DIGIT: u8 = 1 << 1;
pub(super) const HEX: u8 = 1 << 2;
/// Bytes that may follow a backslash as a single-byte escape.
pub(super) const ESCAPE: u8 = 1 << 3;
/// Bytes that end the ASCII fast path of the string scanner: quote,
/// backslash, control characters and anything non-ASCII.
pub(super) const STRING_STOP: u8 = 1 << 4;

static CLASSES: [u8; 256] = build_table();

const fn build_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut b = 0usize;
    while b < 256 {
        let byte = b as u8;
        let mut class = 0;
        if matches!(byte, b' ' | b'\t' | b'\n' | b'\r') {
            class |= WHITESPACE;
        }
        if byte.is_ascii_digit() {
            class |= DIGIT | HEX;
        }
        if matches!(byte, b'a'..=b'f' | b'A'..=b'F') {
            class |= HEX;
        }
        if matches!(byte, b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't') {
            class |= ESCAPE;
        }
        if byte == b'"' || byte == b'\\' || byte < 0x20 || byte >= 0x80 {
            class |= STRING_STOP;
        }
        table[b] = class;
        b += 1;
    }
    table
}

#[inline(always)]
pub(super) fn is(byte: u8, class: u8) -> bool {
    CLASSES[byte as usize] & class != 0
}
