//! # Text Encoding
//!
//! Converts Unicode strings to the single-byte code-page text ESC/POS
//! printers consume. The printer must have the matching page selected
//! (`ESC t n`) for the bytes to render correctly; the
//! [`CommandBuilder`](crate::builder::CommandBuilder) keeps the two in
//! sync automatically.
//!
//! ## Replacement Policy
//!
//! Encoding is total: every input character produces exactly one output
//! byte, and no input can make it fail. Characters the target page cannot
//! represent become `?` (0x3F). Printers must always receive *some* byte —
//! a receipt with a `?` in it beats an aborted print job — so substitution
//! is silent toward the caller and visible only as `tracing` debug events.
//!
//! Per character, in order:
//!
//! 1. Code points 0–31 (control characters) are always replaced,
//!    regardless of page. A newline inside `text()` is a control
//!    character; line breaks are their own command.
//! 2. Code points 32–127 (printable ASCII) pass through unchanged.
//! 3. U+FFFD, the Unicode replacement character, maps to the replacement
//!    byte directly.
//! 4. Everything else is looked up in the page table; a miss yields the
//!    replacement byte.

mod charset;

pub use charset::Charset;

/// The byte substituted for control characters and unmappable input.
const REPLACEMENT: u8 = b'?';

/// Encode a Unicode string as single-byte code-page text.
///
/// The output length always equals the number of `char`s in the input —
/// ESC/POS pages are single-byte, so there is no multi-byte expansion.
///
/// ## Example
///
/// ```
/// use recibo::{Charset, encoding};
///
/// assert_eq!(encoding::encode("Año", Charset::Cp437), vec![0x41, 0xA4, 0x6F]);
/// // CP437 has no Ø; the caller still gets a full-length buffer.
/// assert_eq!(encoding::encode("Øl", Charset::Cp437), vec![b'?', b'l']);
/// assert_eq!(encoding::encode("Øl", Charset::Cp865), vec![0x9D, b'l']);
/// ```
pub fn encode(text: &str, charset: Charset) -> Vec<u8> {
    let mut output = Vec::with_capacity(text.len());

    for (index, ch) in text.chars().enumerate() {
        let byte = match ch as u32 {
            0..=31 => {
                tracing::debug!(
                    codepoint = ch as u32,
                    index,
                    "replacing control character with '?'"
                );
                REPLACEMENT
            }
            32..=127 => ch as u8,
            0xFFFD => REPLACEMENT,
            _ => match charset.encode_char(ch) {
                Some(byte) => byte,
                None => {
                    tracing::debug!(
                        charset = charset.name(),
                        codepoint = ch as u32,
                        index,
                        "replacing unmappable character with '?'"
                    );
                    REPLACEMENT
                }
            },
        };
        output.push(byte);
    }

    output
}
