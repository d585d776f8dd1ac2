//! Composable UI component renderers.
//!
//! Each component draws one part of the pane into the frame buffer and
//! returns the next free row.
//!
//! # Components
//!
//! - [`header`]: Title and tagline
//! - [`search`]: Query input box with loading spinner
//! - [`empty`]: First-run prompt and no-results message
//! - [`skeleton`]: Placeholder cards while loading
//! - [`banner`]: Error banner
//! - [`cards`]: Result cards
//! - [`backdrop`]: Carousel indicator strip
//! - [`footer`]: Keybinding hints

mod backdrop;
mod banner;
mod cards;
mod empty;
mod footer;
mod header;
mod search;
mod skeleton;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BodyView, UIViewModel};

use backdrop::render_backdrop;
use banner::render_error_banner;
use cards::render_cards;
use empty::{render_empty_state, render_prompt};
use footer::render_footer;
use header::render_header;
use search::render_search_bar;
use skeleton::render_skeleton;

/// Renders a horizontal border line at `row`. Returns `row + 1`.
fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    row + 1
}

/// Renders the full pane.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Title]
/// [Tagline]
/// [Border]
/// [Search Bar - 3 lines]
/// [blank line]
/// [Body: prompt | skeleton | banner | no results | cards]
/// [Carousel strip]
/// [Border]
/// [Footer]
/// ```
pub fn render_layout(out: &mut String, vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 2;

    current_row = render_header(out, current_row, &vm.header, theme, cols);
    current_row = render_border(out, current_row, &theme.colors.border, cols);
    current_row = render_search_bar(out, current_row, &vm.search_bar, theme, cols);
    current_row += 1;

    let footer_row = rows;
    let border_row = footer_row.saturating_sub(1);
    let backdrop_row = border_row.saturating_sub(1);
    let last_body_row = backdrop_row.saturating_sub(1);

    let _current_row = match &vm.body {
        BodyView::Prompt { message } => render_prompt(out, current_row, message, theme, cols),
        BodyView::Skeleton { placeholders, message } => {
            render_skeleton(out, current_row, last_body_row, *placeholders, message, theme, cols)
        }
        BodyView::ErrorBanner { message } => render_error_banner(out, current_row, message, theme, cols),
        BodyView::Empty(empty) => render_empty_state(out, current_row, empty, theme, cols),
        BodyView::Results { cards, first_index, total } => {
            render_cards(out, current_row, cards, *first_index, *total, theme, cols)
        }
    };

    render_backdrop(out, backdrop_row, &vm.backdrop, theme, cols);
    render_border(out, border_row, &theme.colors.border, cols);
    render_footer(out, footer_row, &vm.footer, theme, cols);
}
