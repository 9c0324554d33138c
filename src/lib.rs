//! # Recibo - ESC/POS Receipt Encoding Library
//!
//! Recibo is a Rust library for composing ESC/POS print jobs for thermal
//! receipt printers. It provides:
//!
//! - **Protocol implementation**: ESC/POS command serialization
//! - **Text encoding**: Unicode → code-page bytes with a total
//!   replacement policy
//! - **Barcodes**: validated QR, Aztec, Data Matrix, UPC-A, EAN-13, EAN-8
//! - **Layout**: a builder DSL with scoped styles and column layout
//!
//! Recibo produces a finished byte buffer; getting it to the printer
//! (USB, Bluetooth, network) is the caller's job.
//!
//! ## Quick Start
//!
//! ```
//! use recibo::{CommandBuilder, LineSegment, PrinterConfig};
//!
//! let builder = CommandBuilder::build(PrinterConfig::MM58, |b| {
//!     b.with_bold(true, |b| {
//!         b.line("RECIBO CAFE");
//!     });
//!     b.segmented_line(&[
//!         LineSegment::left("2x Espresso"),
//!         LineSegment::right("6.00"),
//!     ]);
//!     b.two_column_line("Total", "6.00", 1);
//!     b.cut();
//! });
//!
//! // Hand this to your transport of choice.
//! let payload: Vec<u8> = builder.bytes();
//! # assert!(payload.starts_with(&[0x1B, 0x40]));
//! ```
//!
//! Barcodes are validated up front, so appending one cannot fail:
//!
//! ```
//! use recibo::{barcode::QrCodeSpec, CommandBuilder, PrinterConfig, QrCorrectionLevel};
//!
//! let qr = QrCodeSpec::create("https://example.com/r/42", QrCorrectionLevel::M)?;
//! let builder = CommandBuilder::build(PrinterConfig::MM80, |b| {
//!     b.barcode(qr).cut();
//! });
//! # assert!(!builder.bytes().is_empty());
//! # Ok::<(), recibo::BarcodeError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`builder`] | Command builder DSL and line layout |
//! | [`protocol`] | ESC/POS commands and barcode specs |
//! | [`encoding`] | Code page tables and text encoding |
//! | [`printer`] | Printer configurations |
//! | [`error`] | Error types |
//!
//! ## Diagnostics
//!
//! Characters a code page cannot represent print as `?` instead of
//! failing the job; each substitution emits a [`tracing`] debug event.
//! Install a subscriber to see them.

pub mod builder;
pub mod encoding;
pub mod error;
pub mod printer;
pub mod protocol;

// Re-exports for convenience
pub use builder::{CommandBuilder, LineSegment};
pub use encoding::Charset;
pub use error::BarcodeError;
pub use printer::PrinterConfig;
pub use protocol::barcode;
pub use protocol::command::{Alignment, Command, HriPosition, QrCorrectionLevel};
