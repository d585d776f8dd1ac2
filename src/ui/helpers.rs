//! Shared rendering utilities and helpers.
//!
//! Components write into a frame buffer (`&mut String`) rather than straight
//! to stdout so a whole frame can be checked in tests and printed in one go.
//! All width arithmetic counts `char`s, never bytes, so multi-byte names and
//! tags never split inside a code point.

/// Marker appended to text cut short by [`truncate`].
pub const ELLIPSIS: char = '…';

/// Moves the cursor to a 1-indexed `row` and `col`.
///
/// ```
/// use scentsphere::ui::helpers::position_cursor;
///
/// let mut frame = String::new();
/// position_cursor(&mut frame, 5, 1);
/// assert_eq!(frame, "\u{1b}[5;1H");
/// ```
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    out.push_str(&format!("\u{1b}[{row};{col}H"));
}

/// Visible width of `text` in terminal cells, counting one cell per `char`.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Shortens `text` to at most `max` chars, ending in [`ELLIPSIS`] when cut.
///
/// ```
/// use scentsphere::ui::helpers::truncate;
///
/// assert_eq!(truncate("Rose Noir", 20), "Rose Noir");
/// assert_eq!(truncate("Rose Noir", 5), "Rose…");
/// ```
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if display_width(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut cut: String = text.chars().take(max - 1).collect();
    cut.push(ELLIPSIS);
    cut
}

/// Writes `text` centered in a line of `cols` cells, padded on both sides.
///
/// Text wider than the line is truncated first.
pub fn write_centered(out: &mut String, text: &str, cols: usize) {
    let text = truncate(text, cols);
    let width = display_width(&text);
    let padding = cols.saturating_sub(width) / 2;

    out.push_str(&" ".repeat(padding));
    out.push_str(&text);
    out.push_str(&" ".repeat(cols.saturating_sub(padding + width)));
}

/// Writes `text` left-aligned and padded with spaces to exactly `cols` cells.
pub fn write_padded(out: &mut String, text: &str, cols: usize) {
    let text = truncate(text, cols);
    out.push_str(&text);
    out.push_str(&" ".repeat(cols.saturating_sub(display_width(&text))));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("Éclat d'Arpège", 6), "Éclat…");
        assert_eq!(truncate("香水香水", 3), "香水…");
    }

    #[test]
    fn truncate_to_zero_is_empty() {
        assert_eq!(truncate("musk", 0), "");
    }

    #[test]
    fn centered_line_fills_width() {
        let mut out = String::new();
        write_centered(&mut out, "amber", 11);
        assert_eq!(out, "   amber   ");
    }

    #[test]
    fn padded_line_truncates_long_text() {
        let mut out = String::new();
        write_padded(&mut out, "sandalwood", 6);
        assert_eq!(out, "sanda…");
    }
}
