//! Code Page 865 (Nordic) upper-half table.
//!
//! Identical to CP437 except three positions: 0x9B (ø for ¢), 0x9D
//! (Ø for ¥), and 0xAF (¤ for »).

use super::cp437;

/// Map a Unicode code point to its CP865 byte value (0x80–0xFF).
pub(super) fn lookup(ch: char) -> Option<u8> {
    match ch {
        'ø' => Some(0x9B),
        'Ø' => Some(0x9D),
        '¤' => Some(0xAF),
        // Displaced CP437 characters
        '¢' | '¥' | '»' => None,
        _ => cp437::lookup(ch),
    }
}
