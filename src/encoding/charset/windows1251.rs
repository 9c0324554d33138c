//! Windows-1251 (Cyrillic) upper-half table.

/// Map a Unicode code point to its Windows-1251 byte value (0x80–0xFF).
pub(super) fn lookup(ch: char) -> Option<u8> {
    // 0xC0–0xFF: А-я are contiguous in both Unicode and Windows-1251
    if ('А'..='я').contains(&ch) {
        return Some((ch as u32 - 'А' as u32) as u8 + 0xC0);
    }

    let byte = match ch {
        // 0x80–0x9F: Serbian/Macedonian letters and typographic marks
        'Ђ' => 0x80,
        'Ѓ' => 0x81,
        '‚' => 0x82,
        'ѓ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        '€' => 0x88,
        '‰' => 0x89,
        'Љ' => 0x8A,
        '‹' => 0x8B,
        'Њ' => 0x8C,
        'Ќ' => 0x8D,
        'Ћ' => 0x8E,
        'Џ' => 0x8F,
        'ђ' => 0x90,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '™' => 0x99,
        'љ' => 0x9A,
        '›' => 0x9B,
        'њ' => 0x9C,
        'ќ' => 0x9D,
        'ћ' => 0x9E,
        'џ' => 0x9F,

        // 0xA0–0xBF
        '\u{00A0}' => 0xA0,
        'Ў' => 0xA1,
        'ў' => 0xA2,
        'Ј' => 0xA3,
        '¤' => 0xA4,
        'Ґ' => 0xA5,
        '¦' => 0xA6,
        '§' => 0xA7,
        'Ё' => 0xA8,
        '©' => 0xA9,
        'Є' => 0xAA,
        '«' => 0xAB,
        '¬' => 0xAC,
        '\u{00AD}' => 0xAD, // soft hyphen
        '®' => 0xAE,
        'Ї' => 0xAF,
        '°' => 0xB0,
        '±' => 0xB1,
        'І' => 0xB2,
        'і' => 0xB3,
        'ґ' => 0xB4,
        'µ' => 0xB5,
        '¶' => 0xB6,
        '·' => 0xB7,
        'ё' => 0xB8,
        '№' => 0xB9,
        'є' => 0xBA,
        '»' => 0xBB,
        'ј' => 0xBC,
        'Ѕ' => 0xBD,
        'ѕ' => 0xBE,
        'ї' => 0xBF,

        _ => return None,
    };
    Some(byte)
}
