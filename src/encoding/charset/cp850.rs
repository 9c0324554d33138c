//! Code Page 850 (Multilingual / Western European) upper-half table.

/// Map a Unicode code point to its CP850 byte value (0x80–0xFF).
pub(super) fn lookup(ch: char) -> Option<u8> {
    let byte = match ch {
        // 0x80–0x8F
        'Ç' => 0x80,
        'ü' => 0x81,
        'é' => 0x82,
        'â' => 0x83,
        'ä' => 0x84,
        'à' => 0x85,
        'å' => 0x86,
        'ç' => 0x87,
        'ê' => 0x88,
        'ë' => 0x89,
        'è' => 0x8A,
        'ï' => 0x8B,
        'î' => 0x8C,
        'ì' => 0x8D,
        'Ä' => 0x8E,
        'Å' => 0x8F,

        // 0x90–0x9F
        'É' => 0x90,
        'æ' => 0x91,
        'Æ' => 0x92,
        'ô' => 0x93,
        'ö' => 0x94,
        'ò' => 0x95,
        'û' => 0x96,
        'ù' => 0x97,
        'ÿ' => 0x98,
        'Ö' => 0x99,
        'Ü' => 0x9A,
        'ø' => 0x9B,
        '£' => 0x9C,
        'Ø' => 0x9D,
        '×' => 0x9E,
        'ƒ' => 0x9F,

        // 0xA0–0xAF
        'á' => 0xA0,
        'í' => 0xA1,
        'ó' => 0xA2,
        'ú' => 0xA3,
        'ñ' => 0xA4,
        'Ñ' => 0xA5,
        'ª' => 0xA6,
        'º' => 0xA7,
        '¿' => 0xA8,
        '®' => 0xA9,
        '¬' => 0xAA,
        '½' => 0xAB,
        '¼' => 0xAC,
        '¡' => 0xAD,
        '«' => 0xAE,
        '»' => 0xAF,

        // 0xB0–0xBF: shades, box drawing, accented capitals
        '░' => 0xB0,
        '▒' => 0xB1,
        '▓' => 0xB2,
        '│' => 0xB3,
        '┤' => 0xB4,
        'Á' => 0xB5,
        'Â' => 0xB6,
        'À' => 0xB7,
        '©' => 0xB8,
        '╣' => 0xB9,
        '║' => 0xBA,
        '╗' => 0xBB,
        '╝' => 0xBC,
        '¢' => 0xBD,
        '¥' => 0xBE,
        '┐' => 0xBF,

        // 0xC0–0xCF
        '└' => 0xC0,
        '┴' => 0xC1,
        '┬' => 0xC2,
        '├' => 0xC3,
        '─' => 0xC4,
        '┼' => 0xC5,
        'ã' => 0xC6,
        'Ã' => 0xC7,
        '╚' => 0xC8,
        '╔' => 0xC9,
        '╩' => 0xCA,
        '╦' => 0xCB,
        '╠' => 0xCC,
        '═' => 0xCD,
        '╬' => 0xCE,
        '¤' => 0xCF,

        // 0xD0–0xDF
        'ð' => 0xD0,
        'Ð' => 0xD1,
        'Ê' => 0xD2,
        'Ë' => 0xD3,
        'È' => 0xD4,
        'ı' => 0xD5,
        'Í' => 0xD6,
        'Î' => 0xD7,
        'Ï' => 0xD8,
        '┘' => 0xD9,
        '┌' => 0xDA,
        '█' => 0xDB,
        '▄' => 0xDC,
        '¦' => 0xDD,
        'Ì' => 0xDE,
        '▀' => 0xDF,

        // 0xE0–0xEF
        'Ó' => 0xE0,
        'ß' => 0xE1,
        'Ô' => 0xE2,
        'Ò' => 0xE3,
        'õ' => 0xE4,
        'Õ' => 0xE5,
        'µ' => 0xE6,
        'þ' => 0xE7,
        'Þ' => 0xE8,
        'Ú' => 0xE9,
        'Û' => 0xEA,
        'Ù' => 0xEB,
        'ý' => 0xEC,
        'Ý' => 0xED,
        '¯' => 0xEE,
        '´' => 0xEF,

        // 0xF0–0xFF
        '\u{00AD}' => 0xF0, // soft hyphen
        '±' => 0xF1,
        '‗' => 0xF2,
        '¾' => 0xF3,
        '¶' => 0xF4,
        '§' => 0xF5,
        '÷' => 0xF6,
        '¸' => 0xF7,
        '°' => 0xF8,
        '¨' => 0xF9,
        '·' => 0xFA,
        '¹' => 0xFB,
        '³' => 0xFC,
        '²' => 0xFD,
        '■' => 0xFE,
        '\u{00A0}' => 0xFF,

        _ => return None,
    };
    Some(byte)
}
