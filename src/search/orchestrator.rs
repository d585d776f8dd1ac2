//! Search request lifecycle.
//!
//! [`SearchOrchestrator`] is the single writer of [`SearchState`]. It owns the
//! query text, mints a fresh [`RequestToken`] for every submission, and applies
//! a response only when its token matches the request currently in flight.
//! Anything older is reported as [`ScentSphereError::StaleResponse`] and
//! dropped, so a slow early response can never overwrite a later one.
//!
//! # Example
//!
//! ```
//! use scentsphere::search::{SearchOrchestrator, SearchState};
//!
//! let mut search = SearchOrchestrator::new("http://localhost:8000", None);
//! let first = search.submit_text("romantic").unwrap();
//! let second = search.submit_text("fresh").unwrap();
//!
//! // The older response arrives last and is ignored.
//! search.complete(second.token, Ok(vec![])).unwrap();
//! assert!(search.complete(first.token, Err(scentsphere::domain::ScentSphereError::Server { status: 500 })).is_err());
//! assert_eq!(search.state(), &SearchState::Success(vec![]));
//! ```

use super::request::{RequestToken, SearchRequest};
use super::state::SearchState;
use crate::domain::{Query, Result, ResultItem, ScentSphereError};

/// Owner of the query text and the search lifecycle.
#[derive(Debug, Clone)]
pub struct SearchOrchestrator {
    state: SearchState,

    /// Query text as typed. Validated only on submit.
    query: String,

    /// Set by a submission that passed validation, reset by `clear`.
    has_searched: bool,

    /// Last token handed out. Never decreases, not even across `clear`.
    last_issued: RequestToken,

    /// Token whose response may still update state.
    in_flight: Option<RequestToken>,

    backend_url: String,
    result_limit: Option<u32>,
}

impl SearchOrchestrator {
    #[must_use]
    pub fn new(backend_url: impl Into<String>, result_limit: Option<u32>) -> Self {
        Self {
            state: SearchState::Idle,
            query: String::new(),
            has_searched: false,
            last_issued: RequestToken::new(0),
            in_flight: None,
            backend_url: backend_url.into(),
            result_limit,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &SearchState {
        &self.state
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub const fn has_searched(&self) -> bool {
        self.has_searched
    }

    #[must_use]
    pub const fn in_flight(&self) -> Option<RequestToken> {
        self.in_flight
    }

    #[must_use]
    pub fn results(&self) -> &[ResultItem] {
        self.state.results()
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
    }

    /// Submits the current query text.
    ///
    /// On success the state becomes [`SearchState::Loading`], any previous
    /// error or result set is dropped, and exactly one request is returned for
    /// the caller to send. Any request issued earlier is superseded.
    ///
    /// # Errors
    ///
    /// Returns [`ScentSphereError::EmptyQuery`] when the text is blank. State
    /// is left untouched and no request is produced.
    pub fn submit(&mut self) -> Result<SearchRequest> {
        let query = Query::parse(&self.query)?;

        let token = self.last_issued.next();
        self.last_issued = token;

        if let Some(superseded) = self.in_flight.replace(token) {
            tracing::debug!(superseded = %superseded, token = %token, "superseding in-flight search");
        }

        self.state = SearchState::Loading;
        self.has_searched = true;

        let request = SearchRequest::new(token, query, &self.backend_url, self.result_limit);
        tracing::debug!(token = %token, url = %request.url, "search issued");
        Ok(request)
    }

    /// Replaces the query text and submits it.
    ///
    /// # Errors
    ///
    /// Same as [`submit`](Self::submit). The text is replaced even when it is
    /// rejected.
    pub fn submit_text(&mut self, text: impl Into<String>) -> Result<SearchRequest> {
        self.set_query(text);
        self.submit()
    }

    /// Applies the outcome of the request identified by `token`.
    ///
    /// Backend failures become [`SearchState::Error`] with the generic
    /// message; the result list is cleared with it.
    ///
    /// # Errors
    ///
    /// Returns [`ScentSphereError::StaleResponse`] when `token` is not the
    /// request in flight. The outcome is discarded and state is unchanged.
    pub fn complete(&mut self, token: RequestToken, outcome: Result<Vec<ResultItem>>) -> Result<()> {
        if self.in_flight != Some(token) {
            return Err(ScentSphereError::StaleResponse {
                token: token.value(),
                latest: self.in_flight.map(RequestToken::value),
            });
        }
        self.in_flight = None;

        self.state = match outcome {
            Ok(items) => {
                tracing::debug!(token = %token, result_count = items.len(), "search succeeded");
                SearchState::Success(items)
            }
            Err(e) => {
                tracing::warn!(token = %token, error = %e, "search failed");
                SearchState::Error(e.user_message())
            }
        };
        tracing::debug!(token = %token, state = self.state.label(), "search completed");

        Ok(())
    }

    /// Resets to [`SearchState::Idle`] with empty query and no results.
    ///
    /// Any request still in flight loses the right to update state.
    pub fn clear(&mut self) {
        if let Some(abandoned) = self.in_flight.take() {
            tracing::debug!(token = %abandoned, "abandoning in-flight search");
        }
        self.state = SearchState::Idle;
        self.query.clear();
        self.has_searched = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GENERIC_ERROR_MESSAGE;
    use pretty_assertions::assert_eq;

    fn orchestrator() -> SearchOrchestrator {
        SearchOrchestrator::new("http://backend", None)
    }

    fn rose() -> ResultItem {
        ResultItem::new("Rose Noir", "Aether", "https://x/img.jpg")
    }

    #[test]
    fn blank_submit_leaves_state_alone() {
        let mut search = orchestrator();
        let request = search.submit_text("fresh").unwrap();
        search.complete(request.token, Ok(vec![rose()])).unwrap();
        let before = search.state().clone();

        let err = search.submit_text("   ").unwrap_err();

        assert!(matches!(err, ScentSphereError::EmptyQuery));
        assert_eq!(search.state(), &before);
        assert_eq!(search.in_flight(), None);
    }

    #[test]
    fn submit_trims_and_enters_loading() {
        let mut search = orchestrator();
        let request = search.submit_text("  romantic ").unwrap();

        assert_eq!(request.query.as_str(), "romantic");
        assert_eq!(request.url, "http://backend/search/romantic");
        assert_eq!(search.state(), &SearchState::Loading);
        assert!(search.has_searched());
        assert_eq!(search.in_flight(), Some(request.token));
    }

    #[test]
    fn tokens_strictly_increase_across_clear() {
        let mut search = orchestrator();
        let a = search.submit_text("a").unwrap().token;
        search.clear();
        let b = search.submit_text("b").unwrap().token;
        let c = search.submit_text("c").unwrap().token;
        assert!(a < b && b < c);
    }

    #[test]
    fn late_older_response_is_discarded() {
        let mut search = orchestrator();
        let a = search.submit_text("romantic").unwrap();
        let b = search.submit_text("fresh").unwrap();

        search.complete(b.token, Ok(vec![])).unwrap();
        let err = search.complete(a.token, Ok(vec![rose()])).unwrap_err();

        assert!(matches!(err, ScentSphereError::StaleResponse { .. }));
        assert_eq!(search.state(), &SearchState::Success(vec![]));
    }

    #[test]
    fn early_older_response_is_discarded_while_newer_pending() {
        let mut search = orchestrator();
        let a = search.submit_text("romantic").unwrap();
        let b = search.submit_text("fresh").unwrap();

        assert!(search.complete(a.token, Ok(vec![rose()])).is_err());
        assert_eq!(search.state(), &SearchState::Loading);

        search.complete(b.token, Ok(vec![rose()])).unwrap();
        assert_eq!(search.results(), &[rose()]);
    }

    #[test]
    fn failure_clears_results_with_generic_message() {
        let mut search = orchestrator();
        let first = search.submit_text("romantic").unwrap();
        search.complete(first.token, Ok(vec![rose()])).unwrap();

        let second = search.submit_text("fresh").unwrap();
        search
            .complete(second.token, Err(ScentSphereError::Server { status: 500 }))
            .unwrap();

        assert_eq!(search.state(), &SearchState::Error(GENERIC_ERROR_MESSAGE.to_string()));
        assert!(search.results().is_empty());
    }

    #[test]
    fn clear_resets_everything_from_any_state() {
        let mut search = orchestrator();

        search.submit_text("loading").unwrap();
        search.clear();
        assert_eq!(search.state(), &SearchState::Idle);
        assert_eq!(search.query(), "");
        assert!(!search.has_searched());

        let request = search.submit_text("error").unwrap();
        search.complete(request.token, Err(ScentSphereError::Server { status: 502 })).unwrap();
        search.clear();
        assert_eq!(search.state(), &SearchState::Idle);
        assert_eq!(search.state().error_message(), None);
    }

    #[test]
    fn response_after_clear_is_stale() {
        let mut search = orchestrator();
        let request = search.submit_text("romantic").unwrap();
        search.clear();

        assert!(search.complete(request.token, Ok(vec![rose()])).is_err());
        assert_eq!(search.state(), &SearchState::Idle);
    }

    #[test]
    fn duplicate_response_is_stale() {
        let mut search = orchestrator();
        let request = search.submit_text("romantic").unwrap();
        search.complete(request.token, Ok(vec![rose()])).unwrap();

        assert!(search.complete(request.token, Ok(vec![])).is_err());
        assert_eq!(search.results(), &[rose()]);
    }
}
