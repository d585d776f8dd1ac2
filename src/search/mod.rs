//! Search request lifecycle: state, requests, response classification.
//!
//! # Modules
//!
//! - [`state`]: The four-way [`SearchState`]
//! - [`request`]: Outbound [`SearchRequest`] and issuance [`RequestToken`]
//! - [`response`]: Status/body classification into results or errors
//! - [`orchestrator`]: [`SearchOrchestrator`], the single writer of search state
//!
//! # Flow
//!
//! ```text
//! submit ──► Loading ──► request(token N) ──► host
//!                                              │
//! complete(token, outcome) ◄── parse_response ◄┘
//!     token == in flight? ── yes ──► Success / Error
//!                         └─ no ───► StaleResponse (dropped)
//! ```

pub mod orchestrator;
pub mod request;
pub mod response;
pub mod state;

pub use orchestrator::SearchOrchestrator;
pub use request::{RequestToken, SearchRequest};
pub use response::parse_response;
pub use state::SearchState;
