//! Rotation timer lease.
//!
//! Zellij timers are one-shot and cannot be cancelled once armed. The carousel
//! therefore models the periodic timer as a lease: while a [`TickerLease`] is
//! held, each firing advances and re-arms; once released, the next firing is
//! swallowed and nothing is re-armed, so no periodic work outlives teardown.

/// Proof that the rotation timer is active.
#[derive(Debug, PartialEq)]
pub struct TickerLease {
    period_secs: f64,
}

impl TickerLease {
    pub(super) fn acquire(period_secs: f64) -> Self {
        tracing::debug!(period_secs, "carousel ticker acquired");
        Self { period_secs }
    }

    #[must_use]
    pub const fn period_secs(&self) -> f64 {
        self.period_secs
    }
}

impl Drop for TickerLease {
    fn drop(&mut self) {
        tracing::debug!(period_secs = self.period_secs, "carousel ticker released");
    }
}
