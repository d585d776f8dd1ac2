//! Outbound search requests and their issuance tokens.
//!
//! Every request is stamped with a [`RequestToken`] when it is issued. The token
//! travels through the host's request-context map and comes back with the
//! response, which lets the orchestrator tell the latest request from
//! superseded ones.

use crate::domain::Query;
use std::collections::BTreeMap;
use std::fmt;

/// Context-map key carrying the request token through the host.
pub const TOKEN_CONTEXT_KEY: &str = "request_token";

/// Strictly increasing identifier assigned at issuance time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Token issued right after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Reads the token back out of a host context map.
    ///
    /// Returns `None` when the key is missing or not a number, e.g. for web
    /// requests this plugin did not issue.
    #[must_use]
    pub fn from_context(context: &BTreeMap<String, String>) -> Option<Self> {
        context
            .get(TOKEN_CONTEXT_KEY)
            .and_then(|raw| raw.parse::<u64>().ok())
            .map(Self)
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single `GET` against the recommendation endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub token: RequestToken,
    pub query: Query,
    pub url: String,
}

impl SearchRequest {
    /// Builds the request for `query` against `backend_url`.
    ///
    /// The query is percent-encoded as a single path segment. A trailing slash
    /// on the base address is tolerated.
    ///
    /// # Examples
    ///
    /// ```
    /// use scentsphere::domain::Query;
    /// use scentsphere::search::{RequestToken, SearchRequest};
    ///
    /// let query = Query::parse("night out").unwrap();
    /// let request = SearchRequest::new(RequestToken::new(1), query, "http://localhost:8000/", None);
    /// assert_eq!(request.url, "http://localhost:8000/search/night%20out");
    /// ```
    #[must_use]
    pub fn new(token: RequestToken, query: Query, backend_url: &str, limit: Option<u32>) -> Self {
        let base = backend_url.trim_end_matches('/');
        let mut url = format!("{base}/search/{}", urlencoding::encode(query.as_str()));
        if let Some(limit) = limit {
            url.push_str(&format!("?limit={limit}"));
        }

        Self { token, query, url }
    }

    /// Context map handed to the host alongside the request.
    #[must_use]
    pub fn context(&self) -> BTreeMap<String, String> {
        BTreeMap::from([(TOKEN_CONTEXT_KEY.to_string(), self.token.value().to_string())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(text: &str) -> Query {
        Query::parse(text).unwrap()
    }

    #[test]
    fn encodes_query_as_one_path_segment() {
        let request = SearchRequest::new(RequestToken::new(3), query("rose/oud & musk?"), "http://api", None);
        assert_eq!(request.url, "http://api/search/rose%2Foud%20%26%20musk%3F");
    }

    #[test]
    fn appends_limit_when_configured() {
        let request = SearchRequest::new(RequestToken::new(1), query("fresh"), "http://api", Some(5));
        assert_eq!(request.url, "http://api/search/fresh?limit=5");
    }

    #[test]
    fn token_round_trips_through_context() {
        let request = SearchRequest::new(RequestToken::new(42), query("casual"), "http://api", None);
        assert_eq!(RequestToken::from_context(&request.context()), Some(RequestToken::new(42)));
    }

    #[test]
    fn foreign_context_has_no_token() {
        let mut context = BTreeMap::new();
        assert_eq!(RequestToken::from_context(&context), None);
        context.insert(TOKEN_CONTEXT_KEY.to_string(), "abc".to_string());
        assert_eq!(RequestToken::from_context(&context), None);
    }
}
