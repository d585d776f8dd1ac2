//! Domain layer for the ScentSphere plugin.
//!
//! Core types that know nothing about Zellij or rendering.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`query`]: Validated search query
//! - [`result_item`]: Recommended entry decoded from the backend
//!
//! # Examples
//!
//! ```
//! use scentsphere::domain::{Query, Result};
//!
//! fn validate(text: &str) -> Result<Query> {
//!     Query::parse(text)
//! }
//!
//! assert!(validate("romantic").is_ok());
//! ```

pub mod error;
pub mod query;
pub mod result_item;

pub use error::{Result, ScentSphereError, GENERIC_ERROR_MESSAGE};
pub use query::Query;
pub use result_item::ResultItem;
