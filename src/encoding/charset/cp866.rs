//! Code Page 866 (Cyrillic, DOS) upper-half table.
//!
//! Keeps the CP437 box-drawing block at 0xB0–0xDF, which makes it the
//! page of choice for Russian receipts with ruled layouts.

/// Map a Unicode code point to its CP866 byte value (0x80–0xFF).
pub(super) fn lookup(ch: char) -> Option<u8> {
    // 0x80–0xAF: А-Я а-п are contiguous in both Unicode and CP866
    if ('А'..='п').contains(&ch) {
        return Some((ch as u32 - 'А' as u32) as u8 + 0x80);
    }
    // 0xE0–0xEF: р-я
    if ('р'..='я').contains(&ch) {
        return Some((ch as u32 - 'р' as u32) as u8 + 0xE0);
    }

    let byte = match ch {
        // 0xB0–0xDF: shades and box drawing, same layout as CP437
        '░' => 0xB0,
        '▒' => 0xB1,
        '▓' => 0xB2,
        '│' => 0xB3,
        '┤' => 0xB4,
        '╡' => 0xB5,
        '╢' => 0xB6,
        '╖' => 0xB7,
        '╕' => 0xB8,
        '╣' => 0xB9,
        '║' => 0xBA,
        '╗' => 0xBB,
        '╝' => 0xBC,
        '╜' => 0xBD,
        '╛' => 0xBE,
        '┐' => 0xBF,
        '└' => 0xC0,
        '┴' => 0xC1,
        '┬' => 0xC2,
        '├' => 0xC3,
        '─' => 0xC4,
        '┼' => 0xC5,
        '╞' => 0xC6,
        '╟' => 0xC7,
        '╚' => 0xC8,
        '╔' => 0xC9,
        '╩' => 0xCA,
        '╦' => 0xCB,
        '╠' => 0xCC,
        '═' => 0xCD,
        '╬' => 0xCE,
        '╧' => 0xCF,
        '╨' => 0xD0,
        '╤' => 0xD1,
        '╥' => 0xD2,
        '╙' => 0xD3,
        '╘' => 0xD4,
        '╒' => 0xD5,
        '╓' => 0xD6,
        '╫' => 0xD7,
        '╪' => 0xD8,
        '┘' => 0xD9,
        '┌' => 0xDA,
        '█' => 0xDB,
        '▄' => 0xDC,
        '▌' => 0xDD,
        '▐' => 0xDE,
        '▀' => 0xDF,

        // 0xF0–0xFF: Ukrainian/Belarusian letters and symbols
        'Ё' => 0xF0,
        'ё' => 0xF1,
        'Є' => 0xF2,
        'є' => 0xF3,
        'Ї' => 0xF4,
        'ї' => 0xF5,
        'Ў' => 0xF6,
        'ў' => 0xF7,
        '°' => 0xF8,
        '∙' => 0xF9,
        '·' => 0xFA,
        '√' => 0xFB,
        '№' => 0xFC,
        '¤' => 0xFD,
        '■' => 0xFE,
        '\u{00A0}' => 0xFF,

        _ => return None,
    };
    Some(byte)
}
