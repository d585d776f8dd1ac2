//! Header component renderer.
//!
//! Title and tagline, both centered. The title is bold and uses the optional
//! header background; the tagline is italic in its own color.

use crate::ui::helpers::{position_cursor, write_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header starting at `row`. Returns the next free row.
pub fn render_header(out: &mut String, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        out.push_str(&Theme::bg(bg));
    }
    write_centered(out, &header.title, cols);
    out.push_str(Theme::reset());

    position_cursor(out, row + 1, 1);
    out.push_str(Theme::italic());
    out.push_str(&Theme::fg(&theme.colors.tagline_fg));
    write_centered(out, &header.tagline, cols);
    out.push_str(Theme::reset());

    row + 2
}
