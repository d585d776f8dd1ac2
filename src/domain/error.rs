//! Error types for the ScentSphere plugin.
//!
//! This module defines the centralized error type [`ScentSphereError`] and a type
//! alias [`Result`] used throughout the plugin. Backend-facing variants all map
//! to one generic, user-facing message via [`ScentSphereError::user_message`] so
//! that transport internals never reach the screen.

use thiserror::Error;

/// Message shown in the error banner for every backend-facing failure.
pub const GENERIC_ERROR_MESSAGE: &str = "Unable to fetch recommendations. Please try again.";

/// The main error type for ScentSphere plugin operations.
///
/// # Examples
///
/// ```
/// use scentsphere::domain::ScentSphereError;
///
/// let err = ScentSphereError::Server { status: 503 };
/// assert_eq!(err.to_string(), "Backend returned HTTP 503");
/// assert!(err.is_backend_failure());
/// ```
#[derive(Debug, Error)]
pub enum ScentSphereError {
    /// The submitted query was empty or whitespace-only.
    ///
    /// Recovered locally: the submission is blocked and no banner is shown.
    #[error("Query is empty")]
    EmptyQuery,

    /// The request never produced an HTTP exchange (DNS, refused, timeout).
    #[error("Transport error: {reason}")]
    Transport {
        /// Host-reported failure detail. Logged, never displayed.
        reason: String,
    },

    /// The backend answered with a non-2xx status.
    ///
    /// Error bodies are not parsed; the backend may not send JSON at all.
    #[error("Backend returned HTTP {status}")]
    Server {
        /// HTTP status code.
        status: u16,
    },

    /// A 2xx body could not be decoded as a result envelope.
    #[error("Malformed response body: {0}")]
    Decode(String),

    /// A response arrived for a request that has since been superseded.
    ///
    /// Never surfaced to the user; the response is discarded.
    #[error("Stale response for request {token} (latest is {latest:?})")]
    StaleResponse {
        /// Token carried by the response.
        token: u64,
        /// Token of the request currently in flight, if any.
        latest: Option<u64>,
    },

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScentSphereError {
    /// Returns `true` for failures caused by talking to the recommendation backend.
    #[must_use]
    pub const fn is_backend_failure(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::Server { .. } | Self::Decode(_)
        )
    }

    /// Text suitable for the error banner.
    ///
    /// Backend failures collapse to [`GENERIC_ERROR_MESSAGE`]; other variants
    /// fall back to their `Display` output.
    #[must_use]
    pub fn user_message(&self) -> String {
        if self.is_backend_failure() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}

/// A specialized `Result` type for ScentSphere operations.
pub type Result<T> = std::result::Result<T, ScentSphereError>;
