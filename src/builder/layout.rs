//! # Line Layout
//!
//! The pure half of the segmented-line algorithm: width distribution,
//! text chunking, and padding arithmetic. The
//! [`CommandBuilder`](super::CommandBuilder) turns the results into
//! commands; nothing in this module touches the command list.

use crate::protocol::command::Alignment;

/// An independently aligned span of text sharing a print line with other
/// segments.
///
/// Segments are layout input only; the builder consumes them and emits
/// plain `Text` commands with explicit space padding, so nothing of the
/// segment survives into the command list.
///
/// ```
/// use recibo::{CommandBuilder, LineSegment, PrinterConfig};
///
/// let mut builder = CommandBuilder::new(PrinterConfig::MM58);
/// builder.segmented_line(&[
///     LineSegment::left("Total"),
///     LineSegment::right("48.00"),
/// ]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSegment {
    text: String,
    alignment: Alignment,
}

impl LineSegment {
    pub fn new(text: impl Into<String>, alignment: Alignment) -> Self {
        Self {
            text: text.into(),
            alignment,
        }
    }

    /// A left-aligned segment.
    pub fn left(text: impl Into<String>) -> Self {
        Self::new(text, Alignment::Left)
    }

    /// A centered segment.
    pub fn centered(text: impl Into<String>) -> Self {
        Self::new(text, Alignment::Center)
    }

    /// A right-aligned segment.
    pub fn right(text: impl Into<String>) -> Self {
        Self::new(text, Alignment::Right)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }
}

/// Split `chars_per_line` evenly among `segments` columns.
///
/// The remainder is handed out one extra character at a time to the
/// leftmost columns, so widths differ by at most one and earlier columns
/// are never narrower than later ones.
pub(crate) fn even_widths(chars_per_line: usize, segments: usize) -> Vec<usize> {
    if segments == 0 {
        return Vec::new();
    }
    let base = chars_per_line / segments;
    let extra = chars_per_line % segments;
    (0..segments)
        .map(|i| if i < extra { base + 1 } else { base })
        .collect()
}

/// Split `text` into successive chunks of `chunk_size` characters.
///
/// Empty text yields exactly one empty chunk, never zero. A column must
/// occupy its cell on the first row even when it has nothing to say,
/// otherwise the remaining columns would shift left.
pub(crate) fn chunk_text(text: &str, chunk_size: usize) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(chunk_size.max(1))
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Space counts surrounding a chunk inside its allotted cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Padding {
    pub left: usize,
    pub right: usize,
}

/// Distribute `remaining` cell space according to the segment alignment.
///
/// Center splits left-biased: odd remainders put the extra space on the
/// left. Not a protocol requirement, but changing it would shift existing
/// receipts by one column.
pub(crate) fn padding(alignment: Alignment, remaining: usize) -> Padding {
    match alignment {
        Alignment::Left => Padding {
            left: 0,
            right: remaining,
        },
        Alignment::Right => Padding {
            left: remaining,
            right: 0,
        },
        Alignment::Center => Padding {
            left: remaining.div_ceil(2),
            right: remaining / 2,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_widths_exact_division() {
        assert_eq!(even_widths(32, 2), vec![16, 16]);
        assert_eq!(even_widths(48, 3), vec![16, 16, 16]);
    }

    #[test]
    fn test_even_widths_remainder_is_left_biased() {
        assert_eq!(even_widths(32, 3), vec![11, 11, 10]);
        assert_eq!(even_widths(10, 4), vec![3, 3, 2, 2]);
    }

    #[test]
    fn test_even_widths_sum_is_line_width() {
        for segments in 1..=8 {
            let widths = even_widths(48, segments);
            assert_eq!(widths.iter().sum::<usize>(), 48);
        }
    }

    #[test]
    fn test_even_widths_no_segments() {
        assert_eq!(even_widths(48, 0), Vec::<usize>::new());
    }

    #[test]
    fn test_chunk_text_splits_by_chars() {
        assert_eq!(chunk_text("abcdef", 2), vec!["ab", "cd", "ef"]);
        assert_eq!(chunk_text("abcde", 2), vec!["ab", "cd", "e"]);
        assert_eq!(chunk_text("ab", 5), vec!["ab"]);
    }

    #[test]
    fn test_chunk_text_empty_yields_one_empty_chunk() {
        assert_eq!(chunk_text("", 4), vec![""]);
    }

    #[test]
    fn test_chunk_text_counts_chars_not_bytes() {
        assert_eq!(chunk_text("Žluť", 2), vec!["Žl", "uť"]);
    }

    #[test]
    fn test_padding_left_right() {
        assert_eq!(padding(Alignment::Left, 5), Padding { left: 0, right: 5 });
        assert_eq!(padding(Alignment::Right, 5), Padding { left: 5, right: 0 });
    }

    #[test]
    fn test_padding_center_is_left_biased() {
        assert_eq!(padding(Alignment::Center, 4), Padding { left: 2, right: 2 });
        assert_eq!(padding(Alignment::Center, 5), Padding { left: 3, right: 2 });
        assert_eq!(padding(Alignment::Center, 0), Padding { left: 0, right: 0 });
    }
}
