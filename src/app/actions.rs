//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! handler itself never talks to the host; the plugin shim turns each action
//! into the matching Zellij call (`web_request`, `set_timeout`, `run_command`,
//! `hide_self`).
//!
//! # Example
//!
//! ```
//! use scentsphere::app::Action;
//!
//! let actions = vec![Action::ArmTimer { seconds: 5.0 }, Action::CloseFocus];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::search::SearchRequest;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Issues the outbound search.
    ///
    /// The shim must hand `request.context()` to the host so the token comes
    /// back with the response.
    SendSearch(SearchRequest),

    /// Arms a one-shot host timer for the carousel.
    ArmTimer {
        /// Delay in seconds.
        seconds: f64,
    },

    /// Opens a purchase link outside the pane (system URL handler).
    OpenLink {
        url: String,
    },

    /// Hides the plugin pane.
    ///
    /// The plugin stays mounted, so the carousel keeps its lease.
    CloseFocus,
}
