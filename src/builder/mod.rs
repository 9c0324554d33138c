//! # Command Builder
//!
//! The stateful DSL that assembles a print job. The builder owns an
//! append-only command list plus the current effective style (bold,
//! italics, underline, charset, alignment, text size); style setters
//! compare against the effective value and no-op when nothing would
//! change, so the emitted stream never contains vacuous toggles.
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
//! let payload: Vec<u8> = builder.bytes();
//! ```
//!
//! A builder is created per print job, mutated through its methods, and
//! consumed once by [`bytes`](CommandBuilder::bytes). It is synchronous
//! and single-threaded; confine one instance to one logical call chain.

mod layout;

pub use layout::LineSegment;

use crate::encoding::Charset;
use crate::printer::PrinterConfig;
use crate::protocol::barcode::BarcodeSpec;
use crate::protocol::command::{Alignment, Command};

/// Accumulates [`Command`]s for a single print job.
///
/// Every emitted sequence starts with `Initialize` followed by
/// `SelectCharset` of the default page, so the printer is in a known
/// state regardless of its factory defaults.
#[derive(Debug, Clone)]
pub struct CommandBuilder {
    config: PrinterConfig,
    commands: Vec<Command>,
    bold: bool,
    italics: bool,
    underline: bool,
    charset: Charset,
    alignment: Alignment,
    width: u8,
    height: u8,
}

impl CommandBuilder {
    /// Create a builder seeded with the printer-reset preamble.
    pub fn new(config: PrinterConfig) -> Self {
        let charset = Charset::default();
        Self {
            config,
            commands: vec![Command::Initialize, Command::SelectCharset(charset)],
            bold: false,
            italics: false,
            underline: false,
            charset,
            alignment: Alignment::Left,
            width: 1,
            height: 1,
        }
    }

    /// Run a configuration closure against a fresh builder.
    pub fn build(config: PrinterConfig, configure: impl FnOnce(&mut Self)) -> Self {
        let mut builder = Self::new(config);
        configure(&mut builder);
        builder
    }

    /// The accumulated commands, preamble included.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Flatten the command list into the byte stream the printer consumes.
    pub fn bytes(&self) -> Vec<u8> {
        self.commands.iter().flat_map(Command::bytes).collect()
    }

    // ========================================================================
    // Style setters (compacting)
    // ========================================================================

    /// Turn emphasis on or off. No-op if already in the requested state.
    pub fn bold(&mut self, enabled: bool) -> &mut Self {
        if self.bold != enabled {
            self.bold = enabled;
            self.commands.push(Command::Bold(enabled));
        }
        self
    }

    /// Turn italics on or off. No-op if already in the requested state.
    pub fn italics(&mut self, enabled: bool) -> &mut Self {
        if self.italics != enabled {
            self.italics = enabled;
            self.commands.push(Command::Italics(enabled));
        }
        self
    }

    /// Turn underline on or off. No-op if already in the requested state.
    pub fn underline(&mut self, enabled: bool) -> &mut Self {
        if self.underline != enabled {
            self.underline = enabled;
            self.commands.push(Command::Underline(enabled));
        }
        self
    }

    /// Select the code page used to encode subsequent text.
    pub fn charset(&mut self, charset: Charset) -> &mut Self {
        if self.charset != charset {
            self.charset = charset;
            self.commands.push(Command::SelectCharset(charset));
        }
        self
    }

    /// Set text alignment for subsequent lines.
    pub fn text_align(&mut self, alignment: Alignment) -> &mut Self {
        if self.alignment != alignment {
            self.alignment = alignment;
            self.commands.push(Command::Justify(alignment));
        }
        self
    }

    /// Set the character size multipliers. Values are coerced into `1..=8`.
    pub fn text_size(&mut self, width: u8, height: u8) -> &mut Self {
        let width = width.clamp(1, 8);
        let height = height.clamp(1, 8);
        if (self.width, self.height) != (width, height) {
            self.width = width;
            self.height = height;
            self.commands.push(Command::TextSize { width, height });
        }
        self
    }

    // ========================================================================
    // Scoped style combinators
    // ========================================================================

    /// Run `body` with emphasis set to `enabled`, then restore.
    ///
    /// The restore goes through the compacting setter, so leaving the scope
    /// in the state it started in emits nothing. Scopes nest freely; `body`
    /// may change the same style again.
    pub fn with_bold(&mut self, enabled: bool, body: impl FnOnce(&mut Self)) -> &mut Self {
        let previous = self.bold;
        self.bold(enabled);
        body(self);
        self.bold(previous)
    }

    /// Run `body` with italics set to `enabled`, then restore.
    pub fn with_italics(&mut self, enabled: bool, body: impl FnOnce(&mut Self)) -> &mut Self {
        let previous = self.italics;
        self.italics(enabled);
        body(self);
        self.italics(previous)
    }

    /// Run `body` with underline set to `enabled`, then restore.
    pub fn with_underline(&mut self, enabled: bool, body: impl FnOnce(&mut Self)) -> &mut Self {
        let previous = self.underline;
        self.underline(enabled);
        body(self);
        self.underline(previous)
    }

    /// Run `body` with the given code page selected, then restore.
    pub fn with_charset(&mut self, charset: Charset, body: impl FnOnce(&mut Self)) -> &mut Self {
        let previous = self.charset;
        self.charset(charset);
        body(self);
        self.charset(previous)
    }

    /// Run `body` with the given alignment, then restore.
    pub fn with_text_align(
        &mut self,
        alignment: Alignment,
        body: impl FnOnce(&mut Self),
    ) -> &mut Self {
        let previous = self.alignment;
        self.text_align(alignment);
        body(self);
        self.text_align(previous)
    }

    /// Run `body` with the given size multipliers, then restore.
    pub fn with_text_size(
        &mut self,
        width: u8,
        height: u8,
        body: impl FnOnce(&mut Self),
    ) -> &mut Self {
        let previous = (self.width, self.height);
        self.text_size(width, height);
        body(self);
        self.text_size(previous.0, previous.1)
    }

    // ========================================================================
    // Content
    // ========================================================================

    /// Append text, tagged with the charset currently in effect.
    ///
    /// Empty content appends nothing. An embedded `'\n'` is a control
    /// character and prints as `?`; use [`line`](Self::line) or
    /// [`newline`](Self::newline) to break lines.
    pub fn text(&mut self, content: impl Into<String>) -> &mut Self {
        let content = content.into();
        if !content.is_empty() {
            self.commands.push(Command::Text {
                content,
                charset: self.charset,
            });
        }
        self
    }

    /// Append text followed by a line feed.
    pub fn line(&mut self, content: impl Into<String>) -> &mut Self {
        self.text(content).newline()
    }

    /// Print the line buffer and feed one line.
    pub fn newline(&mut self) -> &mut Self {
        self.commands.push(Command::Newline);
        self
    }

    /// Perform a partial paper cut.
    pub fn cut(&mut self) -> &mut Self {
        self.commands.push(Command::Cut);
        self
    }

    /// Append a validated barcode.
    ///
    /// Takes any of the spec types produced by the barcode factories;
    /// validation already happened at spec construction, so this cannot
    /// fail.
    pub fn barcode(&mut self, spec: impl Into<BarcodeSpec>) -> &mut Self {
        self.commands.push(spec.into().into_command());
        self
    }

    // ========================================================================
    // Line layout
    // ========================================================================

    /// Print two fragments on one line: `left` flush left, `right` flush
    /// right, separated by at least `min_space` spaces.
    ///
    /// The spacer is sized so `left + spaces + right` fills the line at the
    /// character width currently in effect. Forces left justification
    /// first (the layout is done with spaces, not alignment commands).
    /// Does not terminate the line; see
    /// [`two_column_line`](Self::two_column_line).
    pub fn two_column_text(&mut self, left: &str, right: &str, min_space: usize) -> &mut Self {
        let char_width = self.width as usize;
        let spaces = self
            .config
            .chars_per_line
            .saturating_sub(left.chars().count() * char_width)
            .saturating_sub(right.chars().count() * char_width)
            .max(min_space);

        self.text_align(Alignment::Left);
        self.text(left);
        self.text(" ".repeat(spaces));
        self.text(right)
    }

    /// [`two_column_text`](Self::two_column_text) followed by a line feed.
    pub fn two_column_line(&mut self, left: &str, right: &str, min_space: usize) -> &mut Self {
        self.two_column_text(left, right, min_space).newline()
    }

    /// Lay out segments as aligned columns, distributing the line width
    /// evenly (leftmost columns absorb the remainder).
    pub fn segmented_line(&mut self, segments: &[LineSegment]) -> &mut Self {
        self.segmented_line_with(segments, layout::even_widths)
    }

    /// Lay out segments as aligned columns with a custom width strategy.
    ///
    /// `strategy` receives the line width and the column count and must
    /// return one allotted width per column.
    ///
    /// Each segment is split into chunks of `allotted / char_width`
    /// characters (minimum 1), where `char_width` is the width multiplier
    /// in effect at the call. Segments that overflow their column continue
    /// on the following rows; shorter columns are padded so every row
    /// keeps the column boundaries. Alignment is realized with literal
    /// space padding emitted at character width 1, so columns line up even
    /// when the text itself is magnified.
    pub fn segmented_line_with(
        &mut self,
        segments: &[LineSegment],
        strategy: impl Fn(usize, usize) -> Vec<usize>,
    ) -> &mut Self {
        if segments.is_empty() {
            return self;
        }

        let char_width = self.width as usize;
        let widths = strategy(self.config.chars_per_line, segments.len());

        let columns: Vec<(Vec<String>, usize, Alignment)> = segments
            .iter()
            .zip(widths)
            .map(|(segment, allotted)| {
                let chunk_size = (allotted / char_width).max(1);
                let chunks = layout::chunk_text(segment.text(), chunk_size);
                (chunks, allotted, segment.alignment())
            })
            .collect();

        let rows = columns
            .iter()
            .map(|(chunks, _, _)| chunks.len())
            .max()
            .unwrap_or(0);

        for row in 0..rows {
            for (chunks, allotted, alignment) in &columns {
                let chunk = chunks.get(row).map(String::as_str).unwrap_or("");
                let remaining = allotted.saturating_sub(chunk.chars().count() * char_width);
                let pad = layout::padding(*alignment, remaining);

                self.pad(pad.left);
                self.text(chunk);
                self.pad(pad.right);
            }
            self.newline();
        }
        self
    }

    /// Emit `count` spaces at character width 1, restoring the active size
    /// afterwards. Both size changes go through the compacting setter, so
    /// nothing is emitted when the width already is 1.
    fn pad(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        let (width, height) = (self.width, self.height);
        self.text_size(1, height);
        self.text(" ".repeat(count));
        self.text_size(width, height);
    }
}

impl Default for CommandBuilder {
    fn default() -> Self {
        Self::new(PrinterConfig::default())
    }
}
