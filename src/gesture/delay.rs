// SPDX-License-Identifier: MPL-2.0
//! Cancellable delayed action.
//!
//! Nothing sleeps: the action records a deadline and the host polls it with
//! the current time. Tests drive it with synthetic instants.

use std::time::{Duration, Instant};

/// A payload waiting for its deadline.
#[derive(Debug, Clone)]
pub struct DelayedAction<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Debug, Clone)]
struct Pending<T> {
    deadline: Instant,
    payload: T,
}

impl<T> DelayedAction<T> {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedules `payload` to fire `delay` after `now`, replacing anything
    /// already pending.
    pub fn schedule(&mut self, now: Instant, payload: T) {
        self.pending = Some(Pending {
            deadline: now + self.delay,
            payload,
        });
    }

    /// Drops the pending payload. Returns true if there was one.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Takes the payload if its deadline has been reached at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.pending.as_ref()?.deadline <= now {
            self.pending.take().map(|pending| pending.payload)
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending payload will fire, if any. Hosts use this to arm
    /// their own timer.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}
