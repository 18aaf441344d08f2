//! Cancellable one-shot timers on a virtual clock.
//!
//! The queue never sleeps. The caller moves time forward with
//! [`TimerQueue::pop_due`] and [`TimerQueue::advance_clock`], which keeps
//! every timing test deterministic and lets the terminal shell map wall-clock
//! time onto the same queue.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// Handle to a scheduled timer.
///
/// Handles are never reused, so a handle that has fired or been cancelled
/// can be passed to [`TimerQueue::cancel`] again without touching any other
/// timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// A timer that reached its deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired<K> {
    /// Handle returned by `schedule`.
    pub handle: TimerHandle,
    /// Payload given to `schedule`.
    pub payload: K,
    /// Deadline the timer was scheduled for.
    pub at: Duration,
}

/// Timer queue keyed by deadline, ties broken by scheduling order.
#[derive(Debug)]
pub struct TimerQueue<K> {
    now: Duration,
    next_id: u64,
    pending: BTreeMap<(Duration, TimerHandle), K>,
    deadlines: HashMap<TimerHandle, Duration>,
}

impl<K> Default for TimerQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> TimerQueue<K> {
    /// Create an empty queue with the clock at zero.
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            pending: BTreeMap::new(),
            deadlines: HashMap::new(),
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `payload` to fire `delay` after the current time.
    pub fn schedule(&mut self, delay: Duration, payload: K) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;

        let deadline = self.now + delay;
        self.pending.insert((deadline, handle), payload);
        self.deadlines.insert(handle, deadline);
        handle
    }

    /// Cancel a timer.
    ///
    /// Returns `true` only if the timer was still pending. Cancelling a fired,
    /// already-cancelled or unknown handle is a no-op.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.deadlines.remove(&handle) {
            Some(deadline) => self.pending.remove(&(deadline, handle)).is_some(),
            None => false,
        }
    }

    /// Whether a timer is still waiting to fire.
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.deadlines.contains_key(&handle)
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Number of pending timers.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether no timers are pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Remove and return the earliest timer due at or before `until`.
    ///
    /// The clock moves to the timer's deadline, so anything the caller
    /// schedules while handling it is measured from that instant.
    pub fn pop_due(&mut self, until: Duration) -> Option<Fired<K>> {
        let (&(deadline, handle), _) = self.pending.iter().next()?;
        if deadline > until {
            return None;
        }

        let payload = self.pending.remove(&(deadline, handle))?;
        self.deadlines.remove(&handle);
        self.now = self.now.max(deadline);

        Some(Fired {
            handle,
            payload,
            at: deadline,
        })
    }

    /// Move the clock forward without firing anything. Never moves backwards.
    ///
    /// Call after draining [`pop_due`](Self::pop_due) for the same instant.
    pub fn advance_clock(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}
