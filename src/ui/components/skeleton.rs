//! Loading skeleton component renderer.
//!
//! Draws a status line and a fixed number of placeholder cards shaped like
//! real result cards. Placeholders carry no data, and the ones that do not
//! fit the body area are left out.

use crate::app::state::CARD_HEIGHT;
use crate::ui::helpers::{position_cursor, write_centered};
use crate::ui::theme::Theme;

/// Bar widths as fractions of the card width, one per card line.
const BAR_SHAPE: [usize; 4] = [45, 30, 60, 40];

/// Renders the status line and up to `placeholders` skeleton cards between
/// `row` and `last_row`. Returns the next free row.
pub fn render_skeleton(
    out: &mut String,
    row: usize,
    last_row: usize,
    placeholders: usize,
    message: &str,
    theme: &Theme,
    cols: usize,
) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.spinner_fg));
    write_centered(out, message, cols);
    out.push_str(Theme::reset());

    let mut current_row = row + 1;
    let card_width = cols.saturating_sub(4);

    for _ in 0..placeholders {
        if current_row + CARD_HEIGHT - 1 > last_row + 1 {
            break;
        }
        for (line, percent) in BAR_SHAPE.iter().enumerate() {
            position_cursor(out, current_row + line, 1);
            out.push_str("  ");
            out.push_str(&Theme::fg(&theme.colors.skeleton_fg));
            out.push_str(&"░".repeat(card_width * percent / 100));
            out.push_str(Theme::reset());
        }
        current_row += CARD_HEIGHT;
    }

    current_row
}
