//! Debounced value (pure state, timers owned by the caller's queue).
//!
//! The debouncer holds two values: the latest one observed and the one last
//! published. Every change to the observed value replaces the single pending
//! timer, so only the last value of a burst is ever published.

use crate::runtime::{TimerHandle, TimerQueue};
use std::time::Duration;
use tracing::trace;

/// Publishes a value only after it has stayed unchanged for a delay.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    observed: T,
    published: T,
    pending: Option<TimerHandle>,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    /// Start with `initial` both observed and published.
    pub fn new(initial: T) -> Self {
        Self {
            observed: initial.clone(),
            published: initial,
            pending: None,
        }
    }

    /// Observe the current source value and return the debounced one.
    ///
    /// A value different from the previously observed one cancels the pending
    /// timer (if any) and schedules a new one with `tag`. An unchanged value
    /// leaves the pending timer alone.
    pub fn observe<K>(
        &mut self,
        value: T,
        delay: Duration,
        timers: &mut TimerQueue<K>,
        tag: K,
    ) -> &T {
        if value != self.observed {
            self.observed = value;
            self.cancel_pending(timers);
            self.pending = Some(timers.schedule(delay, tag));
        }
        &self.published
    }

    /// Publish `value` immediately, dropping any pending timer.
    pub fn flush<K>(&mut self, value: T, timers: &mut TimerQueue<K>) -> &T {
        self.cancel_pending(timers);
        self.observed = value.clone();
        self.published = value;
        &self.published
    }

    /// Handle a fired timer.
    ///
    /// Returns the newly published value, or `None` when `handle` is not the
    /// current pending timer (superseded or after teardown).
    pub fn fire(&mut self, handle: TimerHandle) -> Option<&T> {
        if self.pending != Some(handle) {
            trace!(?handle, "Ignoring stale debounce timer");
            return None;
        }

        self.pending = None;
        self.published = self.observed.clone();
        Some(&self.published)
    }

    /// Last published value.
    pub fn value(&self) -> &T {
        &self.published
    }

    /// Latest observed value.
    pub fn observed(&self) -> &T {
        &self.observed
    }

    /// Whether a publish is scheduled.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Cancel the pending timer. Safe to call repeatedly.
    pub fn teardown<K>(&mut self, timers: &mut TimerQueue<K>) {
        self.cancel_pending(timers);
    }

    fn cancel_pending<K>(&mut self, timers: &mut TimerQueue<K>) {
        if let Some(handle) = self.pending.take() {
            timers.cancel(handle);
        }
    }
}

#[cfg(test)]
#[path = "debounce_tests.rs"]
mod tests;
