//! ISO-8859-15 (Latin 9) upper-half table.
//!
//! Latin-1 with eight positions revised, most notably the Euro sign at
//! 0xA4. Everything else in 0x80–0xFF maps to its own code point.

/// Map a Unicode code point to its ISO-8859-15 byte value (0x80–0xFF).
pub(super) fn lookup(ch: char) -> Option<u8> {
    // The eight positions that differ from Latin-1
    let byte = match ch {
        '€' => 0xA4,
        'Š' => 0xA6,
        'š' => 0xA8,
        'Ž' => 0xB4,
        'ž' => 0xB8,
        'Œ' => 0xBC,
        'œ' => 0xBD,
        'Ÿ' => 0xBE,
        // The Latin-1 characters those positions displaced
        '¤' | '¦' | '¨' | '´' | '¸' | '¼' | '½' | '¾' => return None,
        _ => {
            let code = ch as u32;
            if (0x80..=0xFF).contains(&code) {
                code as u8
            } else {
                return None;
            }
        }
    };
    Some(byte)
}
