// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A last-trigger-wins debouncer.
//!
//! Bursty inputs (a continuous resize drag, say) should execute their
//! handler once, after the burst quiets down. Each [`trigger`](Debouncer::trigger)
//! replaces any pending deadline, so only the final trigger of a burst
//! fires; superseded deadlines are simply discarded.
//!
//! The debouncer owns no timer. The host's event loop passes the current
//! instant into `trigger` and `poll`, which keeps the type deterministic
//! under test and free of any runtime dependency, the same explicit-input
//! discipline the rest of the session layer follows.

use std::time::{Duration, Instant};

/// Delays work until a quiet period has elapsed since the last trigger.
#[derive(Copy, Clone, Debug)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    /// A debouncer with the given quiet period.
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// The configured quiet period.
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether a trigger is pending.
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Request the debounced work. Any pending deadline is replaced.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Returns true exactly once per quiet period: when a deadline is
    /// pending and `now` has reached it. The deadline is consumed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drop any pending deadline without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}
