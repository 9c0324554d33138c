//! # Golden Tests
//!
//! End-to-end tests asserting the exact byte streams the builder emits.
//! The expected sequences were checked against the Epson ESC/POS command
//! reference; if one of these fails after a change, the change altered
//! the wire format, not just the internals.

use pretty_assertions::assert_eq;
use recibo::barcode::{Ean8Spec, QrCodeSpec};
use recibo::{
    Charset, CommandBuilder, HriPosition, LineSegment, PrinterConfig, QrCorrectionLevel,
};

/// `ESC @` then `ESC t 0`: reset and select CP437.
const PREAMBLE: [u8; 5] = [27, 64, 27, 116, 0];

fn stream(parts: &[&[u8]]) -> Vec<u8> {
    let mut bytes = PREAMBLE.to_vec();
    for part in parts {
        bytes.extend_from_slice(part);
    }
    bytes
}

#[test]
fn empty_builder_emits_exactly_the_preamble() {
    let builder = CommandBuilder::new(PrinterConfig::MM58);
    assert_eq!(builder.bytes(), PREAMBLE.to_vec());
}

#[test]
fn receipt_header_and_totals() {
    let builder = CommandBuilder::build(PrinterConfig::new(16), |b| {
        b.with_bold(true, |b| {
            b.line("CAFE");
        });
        b.two_column_line("Item", "1.00", 1);
        b.cut();
    });

    assert_eq!(
        builder.bytes(),
        stream(&[
            &[27, 69, 1], // bold on
            b"CAFE",
            &[10],
            &[27, 69, 0], // bold off (scope restore)
            b"Item",
            b"        ", // 16 - 4 - 4 = 8 spaces
            b"1.00",
            &[10],
            &[29, 86, 1], // cut
        ])
    );
}

#[test]
fn repeated_style_calls_collapse_to_one_toggle() {
    let builder = CommandBuilder::build(PrinterConfig::MM58, |b| {
        b.bold(true).bold(true).bold(true);
        b.text("!");
    });
    assert_eq!(builder.bytes(), stream(&[&[27, 69, 1], b"!"]));
}

#[test]
fn charset_switch_selects_page_and_encodes_text() {
    let builder = CommandBuilder::build(PrinterConfig::MM58, |b| {
        b.charset(Charset::Cp866).line("Чай");
    });
    assert_eq!(
        builder.bytes(),
        stream(&[
            &[27, 116, 17], // select CP866
            &[0x97, 0xA0, 0xA9],
            &[10],
        ])
    );
}

#[test]
fn unmappable_characters_degrade_to_question_marks() {
    let builder = CommandBuilder::build(PrinterConfig::MM58, |b| {
        b.text("5€ 塵");
    });
    // CP437 has neither the euro sign nor CJK
    assert_eq!(builder.bytes(), stream(&[b"5? ?"]));
}

#[test]
fn qr_code_emits_all_three_phases() {
    let qr = QrCodeSpec::create("HELLO", QrCorrectionLevel::M).unwrap();
    let builder = CommandBuilder::build(PrinterConfig::MM80, |b| {
        b.barcode(qr);
    });
    assert_eq!(
        builder.bytes(),
        stream(&[
            &[29, 40, 107, 3, 0, 49, 69, 49], // EC level M
            &[29, 40, 107, 8, 0, 49, 80, 48], // store, length 5 + 3
            b"HELLO",
            &[29, 40, 107, 3, 0, 49, 81, 48], // print
        ])
    );
}

#[test]
fn ean8_stream_carries_the_computed_check_digit() {
    let ean = Ean8Spec::create("9638507", HriPosition::Below).unwrap();
    let builder = CommandBuilder::build(PrinterConfig::MM80, |b| {
        b.barcode(ean);
    });
    assert_eq!(
        builder.bytes(),
        stream(&[
            &[29, 72, 2, 29, 102, 0], // HRI below, font 0
            &[29, 107, 68, 8],
            &[9, 6, 3, 8, 5, 0, 7, 4], // digits as values, check digit last
        ])
    );
}

#[test]
fn segmented_line_fills_the_full_width() {
    let builder = CommandBuilder::build(PrinterConfig::MM58, |b| {
        b.segmented_line(&[
            LineSegment::left("Espresso"),
            LineSegment::centered("x2"),
            LineSegment::right("3.00"),
        ]);
    });

    // Columns are 11 + 11 + 10 characters wide (remainder goes left):
    // "Espresso" right-padded to 11, "x2" centered in 11 (left-biased),
    // "3.00" left-padded to 10.
    let bytes = builder.bytes();
    assert_eq!(
        bytes,
        stream(&[
            b"Espresso",
            b"   ",
            b"     ",
            b"x2",
            b"    ",
            b"      ",
            b"3.00",
            &[10],
        ])
    );
    // the rendered row spans the whole line
    assert_eq!(bytes.len() - 5, 32 + 1);
}

#[test]
fn magnified_segments_pad_at_base_width() {
    let builder = CommandBuilder::build(PrinterConfig::new(10), |b| {
        b.text_size(8, 1);
        b.segmented_line(&[LineSegment::left("12"), LineSegment::left("3")]);
    });

    assert_eq!(
        builder.bytes(),
        stream(&[
            &[29, 33, 0x70], // 8x1
            b"1",
            b"3",
            &[10],
            b"2",
            &[29, 33, 0x00], // drop to 1x1 for padding
            b"     ",
            &[29, 33, 0x70], // restore 8x1
            &[10],
        ])
    );
}

#[test]
fn nested_scopes_unwind_in_order() {
    let builder = CommandBuilder::build(PrinterConfig::MM58, |b| {
        b.with_underline(true, |b| {
            b.text("a");
            b.with_bold(true, |b| {
                b.text("b");
            });
            b.text("c");
        });
        b.text("d");
    });
    assert_eq!(
        builder.bytes(),
        stream(&[
            &[27, 45, 1],
            b"a",
            &[27, 69, 1],
            b"b",
            &[27, 69, 0],
            b"c",
            &[27, 45, 0],
            b"d",
        ])
    );
}
