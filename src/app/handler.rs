//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input,
//! host responses, and timer ticks, translating them into state changes and
//! action sequences.
//!
//! # Architecture
//!
//! 1. Events arrive from the plugin runtime
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via the orchestrator, the carousel, or `AppState`
//! 4. Actions are collected and returned for execution
//!
//! Search events and carousel events never touch each other's component: a
//! tick cannot change the search state and a response cannot move the
//! carousel.
//!
//! # Example
//!
//! ```
//! use scentsphere::app::{handle_event, Action, Event};
//! use scentsphere::{initialize, Config};
//!
//! let mut state = initialize(&Config::default());
//! for c in "rainy day".chars() {
//!     handle_event(&mut state, &Event::Char(c)).unwrap();
//! }
//! let (render, actions) = handle_event(&mut state, &Event::Submit).unwrap();
//! assert!(render);
//! assert!(matches!(actions[0], Action::SendSearch(_)));
//! ```

use super::modes::InputMode;
use crate::app::{Action, AppState};
use crate::carousel::TickOutcome;
use crate::domain::error::{Result, ScentSphereError};
use crate::search::{parse_response, RequestToken};

/// Events triggered by user input, host responses, or timers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Appends a character to the query (typing mode only).
    Char(char),
    /// Removes the last character of the query (typing mode only).
    Backspace,
    /// Submits the current query text.
    Submit,
    /// Drops query, results, and any pending request.
    NewSearch,

    /// Moves keyboard focus to the query box.
    FocusQuery,
    /// Moves keyboard focus to the result cards, if there are any.
    FocusResults,
    /// Moves card selection down by one position (wraps to top).
    SelectNext,
    /// Moves card selection up by one position (wraps to bottom).
    SelectPrevious,
    /// Opens the purchase link of the selected card.
    OpenPurchaseLink,
    /// Hides the plugin pane.
    CloseFocus,

    /// The pane is visible and has the permissions it needs.
    Mounted,
    /// The pane is going away.
    Unmount,
    /// A carousel host timer fired.
    Tick,

    /// A web request issued for a search came back.
    SearchResponse {
        /// Token recovered from the request context, if any.
        token: Option<RequestToken>,
        /// HTTP status, or 0 when the host got no response at all.
        status: u16,
        body: Vec<u8>,
    },

    /// The system URL handler exited with an error.
    LinkOpenFailed {
        url: String,
        error: String,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. Actions run in order.
///
/// # Errors
///
/// Expected outcomes are not errors here: a blank submit and a stale response
/// are logged and produce `(false, vec![])`. Other errors from state methods
/// are propagated.
///
/// # Tracing
///
/// Each call opens a debug-level span carrying the event.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Char(c) => {
            if state.input_mode != InputMode::Typing {
                return Ok((false, vec![]));
            }
            state.search.push_char(*c);
            tracing::trace!(query = %state.search.query(), char = %c, "query updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Typing {
                return Ok((false, vec![]));
            }
            state.search.pop_char();
            Ok((true, vec![]))
        }
        Event::Submit => match state.search.submit() {
            Ok(request) => {
                state.input_mode = InputMode::Typing;
                state.selected_index = 0;
                Ok((true, vec![Action::SendSearch(request)]))
            }
            Err(ScentSphereError::EmptyQuery) => {
                tracing::debug!("ignoring blank submit");
                Ok((false, vec![]))
            }
            Err(e) => Err(e),
        },
        Event::NewSearch => {
            tracing::debug!("starting new search");
            state.search.clear();
            state.input_mode = InputMode::Typing;
            state.selected_index = 0;
            Ok((true, vec![]))
        }
        Event::FocusQuery => {
            if state.input_mode == InputMode::Typing {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Typing;
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.search.results().is_empty() || state.input_mode == InputMode::Browsing {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Browsing;
            Ok((true, vec![]))
        }
        Event::SelectNext => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::SelectPrevious => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::OpenPurchaseLink => {
            let Some(url) = state.selected_purchase_link() else {
                tracing::debug!(selected = state.selected_index, "selected card has no purchase link");
                return Ok((false, vec![]));
            };
            tracing::debug!(url = %url, "opening purchase link");
            Ok((false, vec![Action::OpenLink { url: url.to_string() }]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::Mounted => {
            let actions = state
                .carousel
                .start()
                .map(|seconds| vec![Action::ArmTimer { seconds }])
                .unwrap_or_default();
            Ok((true, actions))
        }
        Event::Unmount => {
            tracing::debug!("unmounting");
            state.carousel.stop();
            state.search.clear();
            Ok((false, vec![]))
        }
        Event::Tick => match state.carousel.on_timer() {
            TickOutcome::Advanced { index, rearm } => {
                tracing::trace!(index, "carousel advanced");
                Ok((true, vec![Action::ArmTimer { seconds: rearm }]))
            }
            TickOutcome::Released => Ok((false, vec![])),
        },
        Event::SearchResponse { token, status, body } => {
            let Some(token) = token else {
                tracing::warn!(status, "web response without a request token");
                return Ok((false, vec![]));
            };

            let outcome = parse_response(*status, body);
            match state.search.complete(*token, outcome) {
                Ok(()) => {
                    state.selected_index = 0;
                    Ok((true, vec![]))
                }
                Err(e @ ScentSphereError::StaleResponse { .. }) => {
                    tracing::debug!(error = %e, "dropping stale response");
                    Ok((false, vec![]))
                }
                Err(e) => Err(e),
            }
        }
        Event::LinkOpenFailed { url, error } => {
            tracing::warn!(url = %url, error = %error, "failed to open purchase link");
            Ok((false, vec![]))
        }
    }
}
