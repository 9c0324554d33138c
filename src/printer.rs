//! # Printer Configuration
//!
//! The one piece of hardware knowledge the encoding core needs: how many
//! characters fit on a line. Everything else about the device (transport,
//! chunking, buffer sizes) lives outside this crate.

/// # Printer Configuration
///
/// Describes the addressable line width of a printer in characters.
///
/// The value depends on paper width and the firmware's base font:
///
/// | Paper | Typical columns |
/// |-------|-----------------|
/// | 58mm | 32 |
/// | 80mm | 48 |
///
/// Supplied by the caller, never mutated by the core. The builder uses it
/// only for line layout; no command embeds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrinterConfig {
    /// Addressable line width in characters (at size multiplier 1).
    pub chars_per_line: usize,
}

impl PrinterConfig {
    /// 58mm paper, 32 columns.
    pub const MM58: Self = Self { chars_per_line: 32 };

    /// 80mm paper, 48 columns.
    pub const MM80: Self = Self { chars_per_line: 48 };

    pub const fn new(chars_per_line: usize) -> Self {
        Self { chars_per_line }
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self::MM80
    }
}
