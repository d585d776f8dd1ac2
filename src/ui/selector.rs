//! Rendering mode selection.
//!
//! [`select`] is a total, side-effect-free function of the search state. It is
//! never stored: the renderer recomputes it on every frame.

use crate::domain::ResultItem;
use crate::search::SearchState;

/// Placeholder cards shown while a search is pending.
pub const DEFAULT_SKELETON_COUNT: usize = 3;

/// Accord tags shown per card.
pub const DEFAULT_TAG_CAP: usize = 4;

/// Presentation knobs that affect which data a mode carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub tag_cap: usize,
    pub show_purchase_link: bool,
    pub skeleton_count: usize,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            tag_cap: DEFAULT_TAG_CAP,
            show_purchase_link: true,
            skeleton_count: DEFAULT_SKELETON_COUNT,
        }
    }
}

/// What the body of the pane shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderMode {
    /// Nothing searched yet: just the prompt.
    Prompt,
    /// Search pending: fixed number of placeholder cards, no data.
    Skeleton { placeholders: usize },
    /// Latest search failed.
    ErrorBanner { message: String },
    /// Latest search succeeded with nothing to show.
    NoResults,
    /// One card per result.
    Results(Vec<Card>),
}

impl RenderMode {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Prompt => "prompt",
            Self::Skeleton { .. } => "skeleton",
            Self::ErrorBanner { .. } => "error",
            Self::NoResults => "no-results",
            Self::Results(_) => "results",
        }
    }
}

/// Display data for one result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub name: String,
    pub brand: String,
    /// At most `tag_cap` accords, in backend order.
    pub tags: Vec<String>,
    pub image: String,
    /// Present only when links are enabled and the item has one.
    pub purchase_link: Option<String>,
}

impl Card {
    #[must_use]
    pub fn from_item(item: &ResultItem, options: &DisplayOptions) -> Self {
        Self {
            name: item.name.clone(),
            brand: item.brand.clone(),
            tags: item.accords.iter().take(options.tag_cap).cloned().collect(),
            image: item.image_url.clone(),
            purchase_link: options
                .show_purchase_link
                .then(|| item.purchase_link().map(String::from))
                .flatten(),
        }
    }
}

/// Maps `(state, has_searched)` to exactly one rendering mode.
///
/// An empty success only shows the "no results" message once the user has
/// searched; before that the prompt is shown.
///
/// # Examples
///
/// ```
/// use scentsphere::search::SearchState;
/// use scentsphere::ui::selector::{select, DisplayOptions, RenderMode};
///
/// let options = DisplayOptions::default();
/// assert_eq!(select(&SearchState::Idle, false, &options), RenderMode::Prompt);
/// assert_eq!(select(&SearchState::Success(vec![]), true, &options), RenderMode::NoResults);
/// ```
#[must_use]
pub fn select(state: &SearchState, has_searched: bool, options: &DisplayOptions) -> RenderMode {
    match state {
        SearchState::Idle => RenderMode::Prompt,
        SearchState::Loading => RenderMode::Skeleton {
            placeholders: options.skeleton_count,
        },
        SearchState::Error(message) => RenderMode::ErrorBanner {
            message: message.clone(),
        },
        SearchState::Success(items) if items.is_empty() => {
            if has_searched {
                RenderMode::NoResults
            } else {
                RenderMode::Prompt
            }
        }
        SearchState::Success(items) => RenderMode::Results(
            items.iter().map(|item| Card::from_item(item, options)).collect(),
        ),
    }
}
