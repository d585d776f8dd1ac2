//! Ambient background carousel.
//!
//! Cycles a fixed, ordered set of image references on a fixed interval for the
//! whole time the pane is mounted. It shares nothing with the search state and
//! keeps rotating through loading, error, and success alike.
//!
//! The host drives it: [`Carousel::start`] says how long to arm the first
//! timer, and every [`Carousel::on_timer`] either advances and asks for a
//! re-arm or reports that the ticker has been released.
//!
//! At most one host timer is outstanding at any time. Restarting while an old
//! timer is still pending reuses that timer instead of arming a second one,
//! which would double the rotation speed.
//!
//! # Example
//!
//! ```
//! use scentsphere::carousel::{Carousel, TickOutcome};
//!
//! let mut carousel = Carousel::new(vec!["a".into(), "b".into()], 5.0).unwrap();
//! assert_eq!(carousel.start(), Some(5.0));
//! assert_eq!(carousel.on_timer(), TickOutcome::Advanced { index: 1, rearm: 5.0 });
//! carousel.stop();
//! assert_eq!(carousel.on_timer(), TickOutcome::Released);
//! ```

mod ticker;

pub use ticker::TickerLease;

use crate::domain::{Result, ScentSphereError};

/// Default seconds between image changes.
pub const DEFAULT_INTERVAL_SECS: f64 = 5.0;

/// Backdrop images used when none are configured.
pub const DEFAULT_IMAGES: [&str; 4] = [
    "https://images.pexels.com/photos/1961795/pexels-photo-1961795.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    "https://images.pexels.com/photos/965989/pexels-photo-965989.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    "https://images.pexels.com/photos/208052/pexels-photo-208052.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    "https://images.pexels.com/photos/1233414/pexels-photo-1233414.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
];

/// Result of a host timer firing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// The index moved; arm another timer for `rearm` seconds.
    Advanced { index: usize, rearm: f64 },
    /// No lease is held. Nothing moved and nothing should be re-armed.
    Released,
}

/// One entry of the image sequence as seen by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide<'a> {
    pub image: &'a str,
    pub active: bool,
}

/// Rotating index over a non-empty image sequence.
#[derive(Debug)]
pub struct Carousel {
    images: Vec<String>,
    index: usize,
    period_secs: f64,
    lease: Option<TickerLease>,
    /// A host timer has been armed and has not fired yet.
    timer_pending: bool,
}

impl Carousel {
    /// Creates a stopped carousel positioned on the first image.
    ///
    /// # Errors
    ///
    /// Returns [`ScentSphereError::Config`] for an empty sequence or a period
    /// that is not a positive, finite number of seconds.
    pub fn new(images: Vec<String>, period_secs: f64) -> Result<Self> {
        if images.is_empty() {
            return Err(ScentSphereError::Config(
                "carousel needs at least one image".to_string(),
            ));
        }
        if !(period_secs.is_finite() && period_secs > 0.0) {
            return Err(ScentSphereError::Config(format!(
                "carousel interval must be positive, got {period_secs}"
            )));
        }

        Ok(Self {
            images,
            index: 0,
            period_secs,
            lease: None,
            timer_pending: false,
        })
    }

    /// Acquires the ticker lease.
    ///
    /// Returns the delay to arm when the host has no timer pending for this
    /// carousel, `None` otherwise (already running, or an old timer will fire
    /// soon and be picked up by the new lease).
    pub fn start(&mut self) -> Option<f64> {
        if self.lease.is_some() {
            return None;
        }
        self.lease = Some(TickerLease::acquire(self.period_secs));

        if self.timer_pending {
            None
        } else {
            self.timer_pending = true;
            Some(self.period_secs)
        }
    }

    /// Releases the ticker lease. Pending timers will be swallowed.
    pub fn stop(&mut self) {
        self.lease = None;
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.lease.is_some()
    }

    /// Handles one host timer firing.
    pub fn on_timer(&mut self) -> TickOutcome {
        self.timer_pending = false;

        let Some(lease) = &self.lease else {
            tracing::trace!("timer fired after carousel release");
            return TickOutcome::Released;
        };
        let rearm = lease.period_secs();

        self.index = (self.index + 1) % self.images.len();
        self.timer_pending = true;

        tracing::trace!(index = self.index, "carousel advanced");
        TickOutcome::Advanced {
            index: self.index,
            rearm,
        }
    }

    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn current_image(&self) -> &str {
        &self.images[self.index]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Every image with its active flag, in sequence order.
    pub fn slides(&self) -> impl Iterator<Item = Slide<'_>> {
        self.images.iter().enumerate().map(move |(i, image)| Slide {
            image,
            active: i == self.index,
        })
    }
}

impl Default for Carousel {
    /// The bundled backdrop images at the default interval, stopped.
    fn default() -> Self {
        Self {
            images: DEFAULT_IMAGES.iter().map(ToString::to_string).collect(),
            index: 0,
            period_secs: DEFAULT_INTERVAL_SECS,
            lease: None,
            timer_pending: false,
        }
    }
}
