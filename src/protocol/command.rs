//! # ESC/POS Command Model
//!
//! Every printer operation is a [`Command`] variant that serializes itself
//! to the exact byte sequence the firmware expects. Commands are immutable
//! once constructed and serialization is a pure function of their fields,
//! so two commands are interchangeable exactly when they compare equal.
//!
//! The [`CommandBuilder`](crate::builder::CommandBuilder) accumulates
//! commands and flattens them with [`Command::bytes`]; nothing here keeps
//! state between calls.

use crate::encoding::{self, Charset};
use crate::protocol::{ESC, GS, LF, u16_le};

/// Text alignment options (`ESC a n`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

/// QR code error correction level (`GS ( k fn 69`)
///
/// Higher levels survive more symbol damage at the cost of density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QrCorrectionLevel {
    /// 7 % recovery (approx.)
    #[default]
    L = 48,
    /// 15 % recovery (approx.)
    M = 49,
    /// 25 % recovery (approx.)
    Q = 50,
    /// 30 % recovery (approx.)
    H = 51,
}

/// HRI (Human Readable Interpretation) position for 1D barcodes (`GS H n`)
///
/// Controls where the digits accompanying the bars are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HriPosition {
    /// No HRI text printed
    None = 0,
    /// HRI above the barcode
    Above = 1,
    /// HRI below the barcode (default)
    #[default]
    Below = 2,
    /// HRI both above and below
    Both = 3,
}

/// A single ESC/POS operation.
///
/// ## Wire Format Summary
///
/// | Variant | Bytes (decimal) |
/// |---------|-----------------|
/// | `Initialize` | 27 64 |
/// | `Newline` | 10 |
/// | `Bold(on)` | 27 69 {1,0} |
/// | `Italics(on)` | 27 52 {1,0} |
/// | `Underline(on)` | 27 45 {1,0} |
/// | `SelectCharset(cs)` | 27 116 page |
/// | `Justify(a)` | 27 97 {0,1,2} |
/// | `TextSize(w,h)` | 29 33 size |
/// | `Cut` | 29 86 1 |
/// | `Text` | encoded bytes, no framing |
/// | 2D barcodes | `GS ( k` function chains, see below |
/// | 1D barcodes | `GS H` / `GS f` / `GS k`, see below |
///
/// `TextSize` multipliers must already be in `1..=8`; the builder clamps
/// before constructing, which keeps field equality equivalent to
/// serialized equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Reset the printer to its power-on defaults (`ESC @`).
    ///
    /// Clears the print buffer and all style modes. NV memory and stored
    /// graphics are untouched.
    Initialize,
    /// Encoded text, no framing bytes. The charset is the one in effect
    /// when the command was created.
    Text { content: String, charset: Charset },
    /// Print the line buffer and feed one line (`LF`).
    Newline,
    /// Emphasis mode on/off (`ESC E n`).
    Bold(bool),
    /// Italics mode on/off (`ESC 4 n`).
    ///
    /// Not part of the original Epson command set; widely implemented by
    /// compatible firmwares.
    Italics(bool),
    /// Underline mode on/off (`ESC - n`).
    Underline(bool),
    /// Select a character code page (`ESC t n`).
    SelectCharset(Charset),
    /// Set text alignment (`ESC a n`).
    Justify(Alignment),
    /// Character size multipliers (`GS ! n`), both in `1..=8`.
    ///
    /// The size byte packs `width - 1` into the high nibble and
    /// `height - 1` into the low nibble.
    TextSize { width: u8, height: u8 },
    /// Partial cut (`GS V 1`).
    Cut,
    /// QR code symbol: select EC level, store data, print.
    QrCode {
        content: String,
        ec_level: QrCorrectionLevel,
    },
    /// Aztec code symbol: select EC percentage, store data, print.
    AztecCode { content: String, ec_percent: u8 },
    /// Data Matrix symbol: store data, print. No EC selection phase — the
    /// Reed-Solomon level is fixed by the symbol size.
    DataMatrix { content: String },
    /// UPC-A barcode, content is exactly 12 digits including check digit.
    UpcA { content: String, hri: HriPosition },
    /// EAN-13 barcode, content is exactly 13 digits including check digit.
    Ean13 { content: String, hri: HriPosition },
    /// EAN-8 barcode, content is exactly 8 digits including check digit.
    Ean8 { content: String, hri: HriPosition },
}

impl Command {
    /// Serialize this command to the exact bytes the printer consumes.
    ///
    /// Pure and deterministic; no hidden state beyond the variant fields.
    pub fn bytes(&self) -> Vec<u8> {
        match self {
            Command::Initialize => vec![ESC, b'@'],
            Command::Text { content, charset } => encoding::encode(content, *charset),
            Command::Newline => vec![LF],
            Command::Bold(enabled) => vec![ESC, b'E', u8::from(*enabled)],
            Command::Italics(enabled) => vec![ESC, b'4', u8::from(*enabled)],
            Command::Underline(enabled) => vec![ESC, b'-', u8::from(*enabled)],
            Command::SelectCharset(charset) => vec![ESC, b't', charset.page_number()],
            Command::Justify(alignment) => vec![ESC, b'a', *alignment as u8],
            Command::TextSize { width, height } => {
                let w = (*width).clamp(1, 8) - 1;
                let h = (*height).clamp(1, 8) - 1;
                vec![GS, b'!', (w << 4) | h]
            }
            Command::Cut => vec![GS, b'V', 1],
            Command::QrCode { content, ec_level } => {
                let mut data = vec![GS, b'(', b'k', 3, 0, 49, 69, *ec_level as u8];
                push_symbol_store(&mut data, 49, content);
                data.extend_from_slice(&[GS, b'(', b'k', 3, 0, 49, 81, 48]);
                data
            }
            Command::AztecCode {
                content,
                ec_percent,
            } => {
                let mut data = vec![GS, b'(', b'k', 3, 0, 53, 69, *ec_percent];
                push_symbol_store(&mut data, 53, content);
                data.extend_from_slice(&[GS, b'(', b'k', 3, 0, 53, 81, 48]);
                data
            }
            Command::DataMatrix { content } => {
                let mut data = Vec::new();
                push_symbol_store(&mut data, 54, content);
                data.extend_from_slice(&[GS, b'(', b'k', 3, 0, 54, 81, 48]);
                data
            }
            Command::UpcA { content, hri } => barcode_1d(65, content, *hri),
            Command::Ean13 { content, hri } => barcode_1d(67, content, *hri),
            Command::Ean8 { content, hri } => barcode_1d(68, content, *hri),
        }
    }
}

/// Append the 2D symbol "store data" function (`GS ( k pL pH cn 80 48 d1..dk`).
///
/// `cn` selects the symbology (49 = QR, 53 = Aztec, 54 = Data Matrix).
/// The length prefix covers the three function bytes plus the payload.
fn push_symbol_store(data: &mut Vec<u8>, cn: u8, content: &str) {
    let payload = content.as_bytes();
    let [p_l, p_h] = u16_le(payload.len() as u16 + 3);
    data.extend_from_slice(&[GS, b'(', b'k', p_l, p_h, cn, 80, 48]);
    data.extend_from_slice(payload);
}

/// Serialize a 1D barcode: HRI position and font prologue, then the
/// barcode data function.
///
/// `GS k` (function B) takes the symbology byte, an explicit length, and
/// the digits as **numeric values** — not their ASCII codes.
fn barcode_1d(kind: u8, content: &str, hri: HriPosition) -> Vec<u8> {
    let mut data = vec![GS, b'H', hri as u8, GS, b'f', 0];
    data.extend_from_slice(&[GS, b'k', kind, content.len() as u8]);
    data.extend(content.bytes().map(|b| b - b'0'));
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize() {
        assert_eq!(Command::Initialize.bytes(), vec![27, 64]);
    }

    #[test]
    fn test_newline() {
        assert_eq!(Command::Newline.bytes(), vec![10]);
    }

    #[test]
    fn test_style_toggles() {
        assert_eq!(Command::Bold(true).bytes(), vec![27, 69, 1]);
        assert_eq!(Command::Bold(false).bytes(), vec![27, 69, 0]);
        assert_eq!(Command::Italics(true).bytes(), vec![27, 52, 1]);
        assert_eq!(Command::Italics(false).bytes(), vec![27, 52, 0]);
        assert_eq!(Command::Underline(true).bytes(), vec![27, 45, 1]);
        assert_eq!(Command::Underline(false).bytes(), vec![27, 45, 0]);
    }

    #[test]
    fn test_select_charset() {
        assert_eq!(
            Command::SelectCharset(Charset::Cp437).bytes(),
            vec![27, 116, 0]
        );
        assert_eq!(
            Command::SelectCharset(Charset::Windows1251).bytes(),
            vec![27, 116, 46]
        );
    }

    #[test]
    fn test_justify() {
        assert_eq!(Command::Justify(Alignment::Left).bytes(), vec![27, 97, 0]);
        assert_eq!(Command::Justify(Alignment::Center).bytes(), vec![27, 97, 1]);
        assert_eq!(Command::Justify(Alignment::Right).bytes(), vec![27, 97, 2]);
    }

    #[test]
    fn test_text_size_packing() {
        assert_eq!(
            Command::TextSize {
                width: 1,
                height: 1
            }
            .bytes(),
            vec![29, 33, 0x00]
        );
        assert_eq!(
            Command::TextSize {
                width: 2,
                height: 3
            }
            .bytes(),
            vec![29, 33, 0x12]
        );
        assert_eq!(
            Command::TextSize {
                width: 8,
                height: 8
            }
            .bytes(),
            vec![29, 33, 0x77]
        );
    }

    #[test]
    fn test_cut() {
        assert_eq!(Command::Cut.bytes(), vec![29, 86, 1]);
    }

    #[test]
    fn test_text_uses_charset() {
        let cmd = Command::Text {
            content: "Año".to_string(),
            charset: Charset::Cp437,
        };
        assert_eq!(cmd.bytes(), vec![0x41, 0xA4, 0x6F]);
    }

    #[test]
    fn test_qr_code_phases() {
        let cmd = Command::QrCode {
            content: "AB".to_string(),
            ec_level: QrCorrectionLevel::M,
        };
        let expected = [
            // 1. EC level selection
            vec![29, 40, 107, 3, 0, 49, 69, 49],
            // 2. Store: length 2 + 3 = 5
            vec![29, 40, 107, 5, 0, 49, 80, 48, b'A', b'B'],
            // 3. Print
            vec![29, 40, 107, 3, 0, 49, 81, 48],
        ]
        .concat();
        assert_eq!(cmd.bytes(), expected);
    }

    #[test]
    fn test_qr_length_prefix_is_little_endian() {
        let content = "x".repeat(300);
        let cmd = Command::QrCode {
            content,
            ec_level: QrCorrectionLevel::L,
        };
        let bytes = cmd.bytes();
        // 303 = 0x012F
        assert_eq!(&bytes[8..13], &[29, 40, 107, 0x2F, 0x01]);
    }

    #[test]
    fn test_aztec_carries_ec_percent() {
        let cmd = Command::AztecCode {
            content: "hi".to_string(),
            ec_percent: 23,
        };
        let expected = [
            vec![29, 40, 107, 3, 0, 53, 69, 23],
            vec![29, 40, 107, 5, 0, 53, 80, 48, b'h', b'i'],
            vec![29, 40, 107, 3, 0, 53, 81, 48],
        ]
        .concat();
        assert_eq!(cmd.bytes(), expected);
    }

    #[test]
    fn test_data_matrix_has_no_ec_phase() {
        let cmd = Command::DataMatrix {
            content: "hi".to_string(),
        };
        let expected = [
            vec![29, 40, 107, 5, 0, 54, 80, 48, b'h', b'i'],
            vec![29, 40, 107, 3, 0, 54, 81, 48],
        ]
        .concat();
        assert_eq!(cmd.bytes(), expected);
    }

    #[test]
    fn test_upca_emits_digit_values() {
        let cmd = Command::UpcA {
            content: "036000291452".to_string(),
            hri: HriPosition::Below,
        };
        let expected = [
            vec![29, 72, 2, 29, 102, 0],
            vec![29, 107, 65, 12, 0, 3, 6, 0, 0, 0, 2, 9, 1, 4, 5, 2],
        ]
        .concat();
        assert_eq!(cmd.bytes(), expected);
    }

    #[test]
    fn test_ean8_kind_and_length() {
        let cmd = Command::Ean8 {
            content: "96385074".to_string(),
            hri: HriPosition::None,
        };
        let bytes = cmd.bytes();
        assert_eq!(&bytes[..6], &[29, 72, 0, 29, 102, 0]);
        assert_eq!(&bytes[6..10], &[29, 107, 68, 8]);
        assert_eq!(&bytes[10..], &[9, 6, 3, 8, 5, 0, 7, 4]);
    }

    #[test]
    fn test_command_equality_is_structural() {
        assert_eq!(
            Command::TextSize {
                width: 2,
                height: 2
            },
            Command::TextSize {
                width: 2,
                height: 2
            }
        );
        assert_ne!(Command::Bold(true), Command::Bold(false));
    }
}
