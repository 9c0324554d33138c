//! Windows-1252 (Western European) upper-half table.
//!
//! Latin-1 with the 0x80–0x9F control range reassigned to typographic
//! characters.

/// Map a Unicode code point to its Windows-1252 byte value (0x80–0xFF).
pub(super) fn lookup(ch: char) -> Option<u8> {
    let byte = match ch {
        // 0x80–0x9F: typographic block (0x81, 0x8D, 0x8F, 0x90, 0x9D unassigned)
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8A,
        '‹' => 0x8B,
        'Œ' => 0x8C,
        'Ž' => 0x8E,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9A,
        '›' => 0x9B,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,

        // 0xA0–0xFF: Latin-1 identity
        _ => {
            let code = ch as u32;
            if (0xA0..=0xFF).contains(&code) {
                code as u8
            } else {
                return None;
            }
        }
    };
    Some(byte)
}
