//! Prompt and no-results messages.
//!
//! Both are quiet, centered text in the body area. They differ in tone: the
//! prompt invites a first search, the empty state reports that a finished
//! search matched nothing.

use crate::ui::helpers::{position_cursor, write_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the first-run prompt one row below `row`.
pub fn render_prompt(out: &mut String, row: usize, message: &str, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row + 1, 1);
    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    write_centered(out, message, cols);
    out.push_str(Theme::reset());
    row + 2
}

/// Renders the empty-result message and its hint.
///
/// ```text
/// [blank]
///      No perfumes found for your search.
///        Try another mood, occasion, or note
/// ```
pub fn render_empty_state(out: &mut String, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row + 1, 1);
    out.push_str(&Theme::fg(&theme.colors.empty_state_fg));
    write_centered(out, &empty.message, cols);
    out.push_str(Theme::reset());

    position_cursor(out, row + 2, 1);
    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    write_centered(out, &empty.subtitle, cols);
    out.push_str(Theme::reset());

    row + 3
}
