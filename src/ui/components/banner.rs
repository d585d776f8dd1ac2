//! Error banner component renderer.

use crate::ui::helpers::{display_width, position_cursor, truncate};
use crate::ui::theme::Theme;

const BANNER_MARGIN: usize = 3;

/// Renders a three-line error banner in the error colors. Returns the next free row.
///
/// ```text
/// [margin]                                     [margin]
/// [margin]  ✕ Unable to fetch recommendations. [margin]
/// [margin]                                     [margin]
/// ```
pub fn render_error_banner(out: &mut String, row: usize, message: &str, theme: &Theme, cols: usize) -> usize {
    let width = cols.saturating_sub(BANNER_MARGIN * 2);
    let text = truncate(&format!("  ✕ {message}"), width);
    let lines = [String::new(), text, String::new()];

    for (offset, line) in lines.iter().enumerate() {
        position_cursor(out, row + offset, 1);
        out.push_str(&" ".repeat(BANNER_MARGIN));
        out.push_str(&Theme::fg(&theme.colors.error_fg));
        out.push_str(&Theme::bg(&theme.colors.error_bg));
        if offset == 1 {
            out.push_str(Theme::bold());
        }
        out.push_str(line);
        out.push_str(&" ".repeat(width.saturating_sub(display_width(line))));
        out.push_str(Theme::reset());
    }

    row + lines.len()
}
