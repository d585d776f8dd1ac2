//! Carousel indicator strip.
//!
//! A terminal pane cannot paint the background photo, so the rotation is
//! shown as a row of dots with the active image reference beside it.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::BackdropInfo;

/// Renders `● ○ ○ ○  image` at `row`. Returns the next free row.
pub fn render_backdrop(out: &mut String, row: usize, backdrop: &BackdropInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push(' ');

    for active in &backdrop.dots {
        if *active {
            out.push_str(&Theme::fg(&theme.colors.dot_active));
            out.push('●');
        } else {
            out.push_str(&Theme::fg(&theme.colors.dot_inactive));
            out.push('○');
        }
        out.push(' ');
    }

    let used = 1 + backdrop.dots.len() * 2 + 1;
    out.push(' ');
    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&truncate(&backdrop.image, cols.saturating_sub(used)));
    out.push_str(Theme::reset());

    row + 1
}
