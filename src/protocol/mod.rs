//! # ESC/POS Protocol
//!
//! This module implements the ESC/POS command protocol spoken by most
//! thermal receipt printers (Epson TM series and the many compatibles).
//!
//! ## Protocol Overview
//!
//! ESC/POS is a byte-oriented protocol where commands are escape sequences
//! interleaved with printable data. The subset implemented here covers:
//!
//! - **Text printing**: code-page text, styles, sizes, alignment
//! - **Barcodes**: 1D (UPC-A, EAN-13, EAN-8) and 2D (QR, Aztec, Data Matrix)
//! - **Paper control**: line feed, partial cut
//!
//! ## Escape Sequence Structure
//!
//! Commands follow these patterns:
//! - Single byte: `LF`
//! - Two bytes: `ESC @`
//! - Multi-byte with parameters: `ESC E n`, `GS ( k pL pH fn ...`
//!
//! ## Byte Order
//!
//! Multi-byte lengths use **little-endian** encoding: the 2D barcode store
//! command sends its payload length as `pL, pH` where
//! `len = pL + pH * 256`.
//!
//! Printer firmware performs no error correction on malformed control
//! sequences, so every byte value here is load-bearing.

pub mod barcode;
pub mod command;

/// ESC (Escape) - Command prefix byte
///
/// Most ESC/POS commands begin with ESC (0x1B). This byte signals the start
/// of a control sequence rather than printable text.
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Used for character size, cutting, and barcode commands.
/// Hex: 0x1D, Decimal: 29
pub const GS: u8 = 0x1D;

/// LF (Line Feed) - Print and advance one line
///
/// Prints any data in the line buffer and advances paper by the current
/// line spacing amount.
pub const LF: u8 = 0x0A;

/// Encode a length as little-endian bytes [pL, pH]
///
/// ## Example
///
/// ```
/// use recibo::protocol::u16_le;
///
/// assert_eq!(u16_le(0x1234), [0x34, 0x12]);
/// assert_eq!(u16_le(20), [20, 0]);
/// ```
#[inline]
pub const fn u16_le(value: u16) -> [u8; 2] {
    [value as u8, (value >> 8) as u8]
}
