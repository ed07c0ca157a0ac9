#![forbid(unsafe_code)]

//! Re-entrancy guard for in-flight transitions.
//!
//! While a transition animates, further requests are dropped rather than
//! queued. The guard clears itself [`GUARD_TIMEOUT`] after it was engaged
//! (animation time plus slack), or earlier when the host reports that the
//! animation finished.
//!
//! # Failure Modes
//!
//! - The timeout is a heuristic upper bound, not an animation-complete
//!   signal. A request can be accepted a moment before the previous
//!   animation is visually done, or be blocked slightly longer than needed.
//! - A host that never ticks and never reports completion keeps the guard
//!   engaged forever.

use std::time::Duration;

use tracing::debug;
use tripane_core::animation::{ANIMATION_DURATION, ReleaseTimer};

/// Extra time the guard stays engaged after the animation should have ended.
pub const GUARD_SLACK: Duration = Duration::from_millis(100);

/// Total time before an engaged guard clears on its own.
pub const GUARD_TIMEOUT: Duration = ANIMATION_DURATION.saturating_add(GUARD_SLACK);

/// Why a guard stopped blocking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardRelease {
    /// The scheduled timeout elapsed.
    TimedOut,
    /// The host signalled completion (or an orientation reset forced it).
    Released,
}

/// Flag plus scheduled reset.
#[derive(Debug, Clone, Default)]
pub struct TransitionGuard {
    pending: Option<ReleaseTimer>,
}

impl TransitionGuard {
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: None }
    }

    #[inline]
    #[must_use]
    pub fn is_engaged(&self) -> bool {
        self.pending.is_some()
    }

    /// Time until the scheduled release, if engaged.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.pending.as_ref().map(ReleaseTimer::remaining)
    }

    /// Engage the guard and schedule its release after [`GUARD_TIMEOUT`].
    ///
    /// Re-engaging restarts the schedule.
    pub fn engage(&mut self) {
        self.engage_for(GUARD_TIMEOUT);
    }

    pub(crate) fn engage_for(&mut self, timeout: Duration) {
        if timeout.is_zero() {
            self.pending = None;
            return;
        }
        debug!(target: "tripane.guard", timeout_ms = timeout.as_millis() as u64, "guard engaged");
        self.pending = Some(ReleaseTimer::new(timeout));
    }

    /// Forward elapsed time to the scheduled release.
    pub fn tick(&mut self, dt: Duration) -> Option<GuardRelease> {
        let timer = self.pending.as_mut()?;
        if timer.tick(dt) {
            self.pending = None;
            debug!(target: "tripane.guard", "guard timed out");
            return Some(GuardRelease::TimedOut);
        }
        None
    }

    /// Clear the guard now and cancel the scheduled release.
    pub fn release(&mut self) -> Option<GuardRelease> {
        self.pending.take().map(|timer| {
            debug!(
                target: "tripane.guard",
                remaining_ms = timer.remaining().as_millis() as u64,
                "guard released early"
            );
            GuardRelease::Released
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
