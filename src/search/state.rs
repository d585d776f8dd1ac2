//! Search lifecycle state.

use crate::domain::ResultItem;

/// Lifecycle of the current search.
///
/// Exactly one variant is active. Loading-with-error or results-with-error
/// combinations cannot be expressed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    /// Nothing submitted since mount or the last clear.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The latest request succeeded. The list may be empty.
    Success(Vec<ResultItem>),
    /// The latest request failed. Holds the user-facing message.
    Error(String),
}

impl SearchState {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Results of a successful search, empty in every other state.
    #[must_use]
    pub fn results(&self) -> &[ResultItem] {
        match self {
            Self::Success(items) => items,
            _ => &[],
        }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Short name for log fields.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success(_) => "success",
            Self::Error(_) => "error",
        }
    }
}
