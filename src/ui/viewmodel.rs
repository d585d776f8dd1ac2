//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready data only: text is already truncated,
//! cards are already windowed around the selection, and the body variant was
//! picked by [`crate::ui::selector::select`].
//!
//! # Example
//!
//! ```
//! use scentsphere::ui::viewmodel::{BackdropInfo, BodyView, FooterInfo, HeaderInfo, SearchBarInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: "ScentSphere".to_string(), tagline: "Discover your signature scent.".to_string() },
//!     search_bar: SearchBarInfo { text: "romantic".to_string(), is_placeholder: false, is_loading: true, is_focused: true },
//!     body: BodyView::Skeleton { placeholders: 3, message: "Finding your perfect scents...".to_string() },
//!     backdrop: BackdropInfo { dots: vec![true, false], image: "https://x/1.jpg".to_string() },
//!     footer: FooterInfo { keybindings: "Enter: search".to_string() },
//! };
//! assert!(vm.search_bar.is_loading);
//! ```

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub search_bar: SearchBarInfo,
    pub body: BodyView,
    pub backdrop: BackdropInfo,
    pub footer: FooterInfo,
}

/// Title block at the top of the pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    pub tagline: String,
}

/// Query input box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Query text, or the placeholder copy when the query is empty.
    pub text: String,

    /// `text` is placeholder copy and should be drawn dimmed.
    pub is_placeholder: bool,

    /// Draw the spinner at the right edge.
    pub is_loading: bool,

    /// Keystrokes currently edit the query.
    pub is_focused: bool,
}

/// Main content area, one variant per rendering mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyView {
    /// Centered hint shown before the first search.
    Prompt { message: String },

    /// Placeholder cards with a status line.
    Skeleton { placeholders: usize, message: String },

    /// Error banner.
    ErrorBanner { message: String },

    /// Explicit "nothing found" message, distinct from the error banner.
    Empty(EmptyState),

    /// Windowed result cards.
    Results {
        cards: Vec<DisplayCard>,
        /// Position of `cards[0]` in the full result list.
        first_index: usize,
        /// Total number of results (cards may be a window of them).
        total: usize,
    },
}

/// Display information for a single result card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayCard {
    pub name: String,
    pub brand: String,
    pub tags: Vec<String>,
    pub image: String,
    pub purchase_link: Option<String>,
    pub is_selected: bool,
}

/// Empty-result message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No perfumes found for your search.").
    pub message: String,

    /// Secondary hint (e.g., "Try another mood or occasion").
    pub subtitle: String,
}

/// Carousel strip: one dot per image plus the active image reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackdropInfo {
    /// `true` marks the active image.
    pub dots: Vec<bool>,
    pub image: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text for the current input mode.
    pub keybindings: String,
}
