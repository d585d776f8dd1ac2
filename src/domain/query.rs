//! Validated search query.

use super::error::{Result, ScentSphereError};
use std::fmt;

/// A trimmed, non-empty mood/occasion query.
///
/// Construction goes through [`Query::parse`], so holding a `Query` means the
/// text is safe to send to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// Trims `text` and rejects it if nothing is left.
    ///
    /// # Errors
    ///
    /// Returns [`ScentSphereError::EmptyQuery`] for empty or whitespace-only input.
    ///
    /// # Examples
    ///
    /// ```
    /// use scentsphere::domain::Query;
    ///
    /// let query = Query::parse("  night out ").unwrap();
    /// assert_eq!(query.as_str(), "night out");
    /// assert!(Query::parse(" \t ").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ScentSphereError::EmptyQuery);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
