#![forbid(unsafe_code)]

//! Release timer: a tick-driven one-shot countdown.
//!
//! A [`ReleaseTimer`] counts down a fixed timeout as the host forwards
//! elapsed time through [`tick`](ReleaseTimer::tick). It fires exactly once,
//! on the tick that crosses the timeout.
//!
//! # Usage
//!
//! ```ignore
//! use std::time::Duration;
//! use tripane_core::animation::ReleaseTimer;
//!
//! let mut timer = ReleaseTimer::new(Duration::from_millis(400));
//! assert!(!timer.tick(Duration::from_millis(399)));
//! assert!(timer.tick(Duration::from_millis(1)));
//! assert!(!timer.tick(Duration::from_millis(1))); // already fired
//! ```
//!
//! # Invariants
//!
//! 1. `elapsed()` never exceeds `timeout()`.
//! 2. `tick()` returns `true` on exactly one call: the first one that brings
//!    `elapsed()` to `timeout()`.
//! 3. A zero timeout is expired at construction and never fires.
//!
//! # Failure Modes
//!
//! - Huge `dt`: elapsed time saturates at the timeout.

use std::time::Duration;

/// One-shot countdown advanced by explicit ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseTimer {
    timeout: Duration,
    elapsed: Duration,
}

impl ReleaseTimer {
    #[must_use]
    pub const fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            elapsed: Duration::ZERO,
        }
    }

    /// Advance the countdown. Returns `true` if the timer expired during
    /// this tick.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.is_expired() {
            return false;
        }
        self.elapsed = self.elapsed.saturating_add(dt).min(self.timeout);
        self.is_expired()
    }

    #[inline]
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.elapsed >= self.timeout
    }

    /// Time left before the timer fires.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.timeout.saturating_sub(self.elapsed)
    }

    #[inline]
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[inline]
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
