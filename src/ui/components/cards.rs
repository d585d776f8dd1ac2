//! Result card list renderer.
//!
//! Each card takes [`CARD_HEIGHT`] rows:
//!
//! ```text
//! ▌ Rose Noir · Aether                                1/5
//!     rose   oud   amber   musk
//!   ◇ https://images.example/rose.jpg
//!   ↗ https://shop.example/rose-noir
//! [blank]
//! ```
//!
//! The selected card gets a marker and highlighted title. The link line is
//! left blank when the card has no purchase link.

use crate::app::state::CARD_HEIGHT;
use crate::ui::helpers::{display_width, position_cursor, truncate, write_padded};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayCard;

/// Renders `cards` starting at `row`. Returns the next free row.
///
/// `first_index` is the position of `cards[0]` in the full result list, used
/// for the `n/total` counter on the selected card.
pub fn render_cards(
    out: &mut String,
    row: usize,
    cards: &[DisplayCard],
    first_index: usize,
    total: usize,
    theme: &Theme,
    cols: usize,
) -> usize {
    let mut current_row = row;
    for (offset, card) in cards.iter().enumerate() {
        let counter = format!("{}/{total}", first_index + offset + 1);
        render_card(out, current_row, card, &counter, theme, cols);
        current_row += CARD_HEIGHT;
    }
    current_row
}

fn render_card(out: &mut String, row: usize, card: &DisplayCard, counter: &str, theme: &Theme, cols: usize) {
    position_cursor(out, row, 1);
    let counter = if card.is_selected { counter } else { "" };
    let title_width = cols.saturating_sub(display_width(counter) + 1);
    let title = truncate(&format!("{} · {}", card.name, card.brand), title_width.saturating_sub(2));

    if card.is_selected {
        out.push_str(&Theme::fg(&theme.colors.selection_fg));
        out.push_str(&Theme::bg(&theme.colors.selection_bg));
        out.push_str(Theme::bold());
        out.push_str("▌ ");
    } else {
        out.push_str(&Theme::fg(&theme.colors.text_normal));
        out.push_str("  ");
    }
    write_padded(out, &title, title_width.saturating_sub(2));
    out.push_str(counter);
    out.push(' ');
    out.push_str(Theme::reset());

    position_cursor(out, row + 1, 1);
    out.push_str("    ");
    let mut used = 4;
    for tag in &card.tags {
        let chip = format!(" {tag} ");
        let width = display_width(&chip) + 1;
        if used + width > cols {
            break;
        }
        out.push_str(&Theme::fg(&theme.colors.tag_fg));
        out.push_str(&Theme::bg(&theme.colors.tag_bg));
        out.push_str(&chip);
        out.push_str(Theme::reset());
        out.push(' ');
        used += width;
    }

    position_cursor(out, row + 2, 1);
    out.push_str(&Theme::fg(&theme.colors.brand_fg));
    out.push_str(Theme::dim());
    out.push_str("  ◇ ");
    out.push_str(&card.image);
    out.push_str(Theme::reset());

    if let Some(link) = &card.purchase_link {
        position_cursor(out, row + 3, 1);
        out.push_str(&Theme::fg(&theme.colors.link_fg));
        out.push_str("  ↗ ");
        out.push_str(link);
        out.push_str(Theme::reset());
    }
}
