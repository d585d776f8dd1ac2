//! Application state management and view model computation.
//!
//! [`AppState`] bundles the two independent components, the search
//! orchestrator and the carousel, with the little UI state that belongs to
//! neither: the input mode and the card selection.
//!
//! # View Model Computation
//!
//! `compute_viewmodel` asks the selector for the rendering mode, then turns it
//! into display-ready data: copy text, truncation, and a window of cards
//! centered on the selection that fits the pane height.
//!
//! # Example
//!
//! ```
//! use scentsphere::{initialize, Config};
//!
//! let state = initialize(&Config::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.header.title, "ScentSphere");
//! ```

use super::modes::InputMode;
use crate::carousel::Carousel;
use crate::domain::ResultItem;
use crate::search::SearchOrchestrator;
use crate::ui::helpers::truncate;
use crate::ui::selector::{self, Card, DisplayOptions, RenderMode};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BackdropInfo, BodyView, DisplayCard, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo,
    UIViewModel,
};

pub const TITLE: &str = "ScentSphere";
pub const TAGLINE: &str = "Discover your signature scent.";
pub const PLACEHOLDER: &str = "Describe a mood, occasion, or note...";
pub const PROMPT_MESSAGE: &str = "Press Enter to begin your scent journey";
pub const LOADING_MESSAGE: &str = "Finding your perfect scents...";
pub const NO_RESULTS_MESSAGE: &str = "No perfumes found for your search.";
pub const NO_RESULTS_SUBTITLE: &str = "Try another mood, occasion, or note";

/// Rows taken by one result card, separator included.
pub const CARD_HEIGHT: usize = 5;

/// First body row, below blank, title, tagline, border, search box (3), blank.
pub const BODY_START_ROW: usize = 9;

/// Rows below the body: backdrop strip, border, footer, plus one spare.
const BOTTOM_CHROME_ROWS: usize = 4;

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    /// Single writer of the search lifecycle.
    pub search: SearchOrchestrator,

    /// Background rotation, independent of `search`.
    pub carousel: Carousel,

    pub input_mode: InputMode,

    /// Zero-based index of the selected card. Reset whenever results change.
    pub selected_index: usize,

    pub display: DisplayOptions,

    pub theme: Theme,
}

impl AppState {
    #[must_use]
    pub fn new(search: SearchOrchestrator, carousel: Carousel, display: DisplayOptions, theme: Theme) -> Self {
        Self {
            search,
            carousel,
            input_mode: InputMode::Typing,
            selected_index: 0,
            display,
            theme,
        }
    }

    /// Moves the card selection down, wrapping to the top. No-op without results.
    pub fn move_selection_down(&mut self) {
        let len = self.search.results().len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves the card selection up, wrapping to the bottom. No-op without results.
    pub fn move_selection_up(&mut self) {
        let len = self.search.results().len();
        if len == 0 {
            return;
        }
        self.selected_index = if self.selected_index == 0 {
            len - 1
        } else {
            self.selected_index - 1
        };
    }

    #[must_use]
    pub fn selected_result(&self) -> Option<&ResultItem> {
        self.search.results().get(self.selected_index)
    }

    /// Purchase link of the selected card, if links are enabled and it has one.
    #[must_use]
    pub fn selected_purchase_link(&self) -> Option<&str> {
        if !self.display.show_purchase_link {
            return None;
        }
        self.selected_result().and_then(ResultItem::purchase_link)
    }

    /// Computes a renderable view model for a pane of `rows` × `cols`.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let mode = selector::select(self.search.state(), self.search.has_searched(), &self.display);

        UIViewModel {
            header: HeaderInfo {
                title: TITLE.to_string(),
                tagline: TAGLINE.to_string(),
            },
            search_bar: self.compute_search_bar(),
            body: self.compute_body(mode, rows, cols),
            backdrop: self.compute_backdrop(cols),
            footer: self.compute_footer(),
        }
    }

    fn compute_search_bar(&self) -> SearchBarInfo {
        let query = self.search.query();
        let is_placeholder = query.is_empty();

        SearchBarInfo {
            text: if is_placeholder { PLACEHOLDER.to_string() } else { query.to_string() },
            is_placeholder,
            is_loading: self.search.state().is_loading(),
            is_focused: self.input_mode == InputMode::Typing,
        }
    }

    fn compute_body(&self, mode: RenderMode, rows: usize, cols: usize) -> BodyView {
        match mode {
            RenderMode::Prompt => BodyView::Prompt {
                message: PROMPT_MESSAGE.to_string(),
            },
            RenderMode::Skeleton { placeholders } => BodyView::Skeleton {
                placeholders,
                message: LOADING_MESSAGE.to_string(),
            },
            RenderMode::ErrorBanner { message } => BodyView::ErrorBanner { message },
            RenderMode::NoResults => BodyView::Empty(EmptyState {
                message: NO_RESULTS_MESSAGE.to_string(),
                subtitle: NO_RESULTS_SUBTITLE.to_string(),
            }),
            RenderMode::Results(cards) => self.compute_results(cards, rows, cols),
        }
    }

    /// Windows the cards around the selection.
    ///
    /// 1. Fit as many cards as the body height allows (at least one)
    /// 2. Center the window on the selected card
    /// 3. Slide the window back if it runs past the end
    fn compute_results(&self, cards: Vec<Card>, rows: usize, cols: usize) -> BodyView {
        let total = cards.len();
        let visible = (self.calculate_available_rows(rows) / CARD_HEIGHT).max(1);
        let selected = self.selected_index.min(total.saturating_sub(1));

        let mut start = selected.saturating_sub(visible / 2);
        let end = (start + visible).min(total);
        if end - start < visible && total >= visible {
            start = end - visible;
        }

        let width = cols.saturating_sub(4);
        let cards = cards
            .into_iter()
            .enumerate()
            .skip(start)
            .take(end - start)
            .map(|(i, card)| DisplayCard {
                name: truncate(&card.name, width),
                brand: truncate(&card.brand, width),
                tags: card.tags,
                image: truncate(&card.image, width.saturating_sub(7)),
                purchase_link: card.purchase_link.map(|url| truncate(&url, width.saturating_sub(6))),
                is_selected: i == selected,
            })
            .collect();

        BodyView::Results {
            cards,
            first_index: start,
            total,
        }
    }

    fn compute_backdrop(&self, cols: usize) -> BackdropInfo {
        BackdropInfo {
            dots: self.carousel.slides().map(|slide| slide.active).collect(),
            image: truncate(self.carousel.current_image(), cols.saturating_sub(self.carousel.len() * 2 + 4)),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Typing if self.search.results().is_empty() => {
                "Enter: search  Esc: new search  Type to describe a mood"
            }
            InputMode::Typing => {
                "Enter: search  Tab: browse results  ↑/↓: select  Esc: new search"
            }
            InputMode::Browsing if self.display.show_purchase_link => {
                "j/k: select  Enter/o: open link  /: edit query  n: new search  q: hide"
            }
            InputMode::Browsing => "j/k: select  /: edit query  n: new search  q: hide",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    /// Rows left for the body after the fixed chrome.
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        total_rows.saturating_sub(BODY_START_ROW + BOTTOM_CHROME_ROWS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchState;
    use pretty_assertions::assert_eq;

    fn state() -> AppState {
        let images = vec!["https://img/1.jpg".to_string(), "https://img/2.jpg".to_string()];
        AppState::new(
            SearchOrchestrator::new("http://backend", None),
            Carousel::new(images, 5.0).unwrap(),
            DisplayOptions::default(),
            Theme::default(),
        )
    }

    fn with_results(state: &mut AppState, count: usize) {
        let items = (0..count)
            .map(|i| ResultItem::new(format!("Scent {i}"), "Brand", format!("https://img/{i}.jpg")))
            .collect();
        let request = state.search.submit_text("romantic").unwrap();
        state.search.complete(request.token, Ok(items)).unwrap();
    }

    #[test]
    fn idle_viewmodel_shows_placeholder_and_prompt() {
        let vm = state().compute_viewmodel(24, 80);

        assert!(vm.search_bar.is_placeholder);
        assert_eq!(vm.search_bar.text, PLACEHOLDER);
        assert_eq!(vm.body, BodyView::Prompt { message: PROMPT_MESSAGE.to_string() });
        assert_eq!(vm.backdrop.dots, vec![true, false]);
    }

    #[test]
    fn loading_viewmodel_has_spinner_and_skeleton() {
        let mut s = state();
        s.search.submit_text("fresh").unwrap();

        let vm = s.compute_viewmodel(24, 80);
        assert!(vm.search_bar.is_loading);
        assert_eq!(vm.search_bar.text, "fresh");
        assert!(matches!(vm.body, BodyView::Skeleton { placeholders: 3, .. }));
    }

    #[test]
    fn results_window_follows_selection() {
        let mut s = state();
        with_results(&mut s, 10);
        s.selected_index = 9;

        // 24 rows leave 11 body rows: two cards.
        let BodyView::Results { cards, first_index, total } = s.compute_viewmodel(24, 80).body else {
            panic!("expected results");
        };
        assert_eq!(total, 10);
        assert_eq!(first_index, 8);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].name, "Scent 9");
        assert!(cards[1].is_selected);
    }

    #[test]
    fn tiny_pane_still_shows_one_card() {
        let mut s = state();
        with_results(&mut s, 3);

        let BodyView::Results { cards, .. } = s.compute_viewmodel(5, 40).body else {
            panic!("expected results");
        };
        assert_eq!(cards.len(), 1);
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut s = state();
        with_results(&mut s, 3);

        s.move_selection_up();
        assert_eq!(s.selected_index, 2);
        s.move_selection_down();
        assert_eq!(s.selected_index, 0);
    }

    #[test]
    fn selection_is_noop_without_results() {
        let mut s = state();
        s.move_selection_down();
        s.move_selection_up();
        assert_eq!(s.selected_index, 0);
        assert_eq!(s.search.state(), &SearchState::Idle);
    }

    #[test]
    fn purchase_link_respects_display_option() {
        let mut s = state();
        let request = s.search.submit_text("romantic").unwrap();
        let item = ResultItem::new("Rose Noir", "Aether", "").with_purchase_url("https://shop/rose");
        s.search.complete(request.token, Ok(vec![item])).unwrap();

        assert_eq!(s.selected_purchase_link(), Some("https://shop/rose"));
        s.display.show_purchase_link = false;
        assert_eq!(s.selected_purchase_link(), None);
    }
}
