//! # Code Page Tables
//!
//! One submodule per supported code page, each a fixed Unicode → byte
//! mapping for the upper half (0x80–0xFF) of the page. ASCII is shared by
//! every page and handled by the encoder, not the tables.
//!
//! ## Supported Pages
//!
//! | Page | Charset | Characters |
//! |------|---------|------------|
//! | 0 | CP437 | US English, box drawing (default) |
//! | 2 | CP850 | Western European |
//! | 5 | CP865 | Nordic |
//! | 16 | Windows-1252 | Western European |
//! | 17 | CP866 | Cyrillic |
//! | 18 | CP852 | Central European |
//! | 40 | ISO-8859-15 | Western European + Euro |
//! | 46 | Windows-1251 | Cyrillic |
//!
//! Page numbers follow the ESC/POS `ESC t n` assignment. The tables are
//! data, not logic; they were transcribed from the published code page
//! definitions and are exercised through [`Charset::encode_char`].

mod cp437;
mod cp850;
mod cp852;
mod cp865;
mod cp866;
mod iso8859_15;
mod windows1251;
mod windows1252;

/// A printer code page: an ESC/POS page number plus a fixed mapping from
/// Unicode code points to single bytes.
///
/// Charsets are plain values — constructed once, copied freely, compared
/// structurally. [`Charset::default`] (CP437, page 0) is the page every
/// print job starts in.
///
/// ```
/// use recibo::Charset;
///
/// assert_eq!(Charset::default(), Charset::Cp437);
/// assert_eq!(Charset::Cp865.page_number(), 5);
/// assert_eq!(Charset::Cp865.encode_char('Ø'), Some(0x9D));
/// assert_eq!(Charset::Cp437.encode_char('Ø'), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Charset {
    /// Page 0 [CP437: USA, Standard Europe]
    #[default]
    Cp437,
    /// Page 2 [CP850: Multilingual]
    Cp850,
    /// Page 18 [CP852: Latin 2]
    Cp852,
    /// Page 5 [CP865: Nordic]
    Cp865,
    /// Page 17 [CP866: Cyrillic #2]
    Cp866,
    /// Page 40 [ISO8859-15: Latin 9]
    Iso8859_15,
    /// Page 46 [Windows-1251: Cyrillic]
    Windows1251,
    /// Page 16 [Windows-1252: Western European]
    Windows1252,
}

impl Charset {
    /// Code page number according to the ESC/POS specification (`ESC t n`).
    pub const fn page_number(self) -> u8 {
        match self {
            Charset::Cp437 => 0,
            Charset::Cp850 => 2,
            Charset::Cp852 => 18,
            Charset::Cp865 => 5,
            Charset::Cp866 => 17,
            Charset::Iso8859_15 => 40,
            Charset::Windows1251 => 46,
            Charset::Windows1252 => 16,
        }
    }

    /// The assigned IANA name of this character set.
    ///
    /// <https://www.iana.org/assignments/character-sets/character-sets.xhtml>
    pub const fn name(self) -> &'static str {
        match self {
            Charset::Cp437 => "IBM437",
            Charset::Cp850 => "IBM850",
            Charset::Cp852 => "IBM852",
            Charset::Cp865 => "IBM865",
            Charset::Cp866 => "IBM866",
            Charset::Iso8859_15 => "ISO-8859-15",
            Charset::Windows1251 => "windows-1251",
            Charset::Windows1252 => "windows-1252",
        }
    }

    /// Map a Unicode code point to this page's byte for it (0x80–0xFF).
    ///
    /// Returns `None` if the character has no representation in this page.
    /// ASCII is not covered here; the encoder passes it through before
    /// consulting the table.
    pub fn encode_char(self, ch: char) -> Option<u8> {
        match self {
            Charset::Cp437 => cp437::lookup(ch),
            Charset::Cp850 => cp850::lookup(ch),
            Charset::Cp852 => cp852::lookup(ch),
            Charset::Cp865 => cp865::lookup(ch),
            Charset::Cp866 => cp866::lookup(ch),
            Charset::Iso8859_15 => iso8859_15::lookup(ch),
            Charset::Windows1251 => windows1251::lookup(ch),
            Charset::Windows1252 => windows1252::lookup(ch),
        }
    }
}
