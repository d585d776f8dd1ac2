//! Search bar component renderer.
//!
//! Renders the query input box with a bordered frame, the query text (or the
//! dimmed placeholder), and a spinner at the right edge while a search is
//! pending.

use crate::ui::helpers::{display_width, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 3;

/// Spinner glyph and label drawn inside the box while loading.
const SPINNER: &str = "◌ searching ";

/// Text cursor drawn after the query while the box has focus.
const CURSOR: &str = "▏";

/// Renders the search input box at `row`. Returns `row + 3`.
///
/// # Layout
///
/// ```text
/// [margin] ┌──────────────────────────────┐ [margin]
/// [margin] │ ❀ rainy day in paris▏  ◌ searching │ [margin]
/// [margin] └──────────────────────────────┘ [margin]
/// ```
///
/// The border takes the accent color while the box has focus and the plain
/// border color otherwise.
pub fn render_search_bar(out: &mut String, row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if search.is_focused {
        Theme::fg(&theme.colors.search_bar_border)
    } else {
        Theme::fg(&theme.colors.border)
    };

    position_cursor(out, row, 1);
    out.push_str(&" ".repeat(SEARCH_BOX_MARGIN));
    out.push_str(&border);
    out.push_str(&format!("┌{}┐", "─".repeat(inner_width)));
    out.push_str(Theme::reset());

    let spinner_width = if search.is_loading { display_width(SPINNER) } else { 0 };
    let cursor = if search.is_focused { CURSOR } else { "" };
    let text_width = inner_width.saturating_sub(spinner_width + 3 + display_width(cursor));
    let text = truncate(&search.text, text_width);
    let text_color = if search.is_placeholder {
        &theme.colors.placeholder_fg
    } else {
        &theme.colors.text_normal
    };

    position_cursor(out, row + 1, 1);
    out.push_str(&" ".repeat(SEARCH_BOX_MARGIN));
    out.push_str(&border);
    out.push('│');
    out.push_str(&Theme::fg(&theme.colors.search_bar_border));
    out.push_str(" ❀ ");
    out.push_str(&Theme::fg(text_color));
    if search.is_placeholder {
        out.push_str(cursor);
        out.push_str(&text);
    } else {
        out.push_str(&text);
        out.push_str(cursor);
    }
    let used = 3 + display_width(&text) + display_width(cursor);
    out.push_str(&" ".repeat(inner_width.saturating_sub(used + spinner_width)));
    if search.is_loading {
        out.push_str(&Theme::fg(&theme.colors.spinner_fg));
        out.push_str(SPINNER);
    }
    out.push_str(&border);
    out.push('│');
    out.push_str(Theme::reset());

    position_cursor(out, row + 2, 1);
    out.push_str(&" ".repeat(SEARCH_BOX_MARGIN));
    out.push_str(&border);
    out.push_str(&format!("└{}┘", "─".repeat(inner_width)));
    out.push_str(Theme::reset());

    row + 3
}
