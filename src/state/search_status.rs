//! Search status state machine.
//!
//! SearchStatus is a sum type with three states:
//! - Idle: query is empty
//! - Loading: query is non-empty and the debounced query has not settled on it
//! - Searching: query is non-empty and the debounced query caught up
//!
//! Loading is keystroke-driven: every change to a non-empty query enters
//! Loading, even when the new text equals the last published query. It is
//! left only when the debouncer publishes the current query.

use crate::runtime::{TimerHandle, TimerQueue};
use crate::state::debounce::Debouncer;
use std::time::Duration;
use tracing::debug;

// ===== SearchStatus =====

/// Derived search status. Loading implies searching by construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchStatus {
    /// No query. Landing content is shown.
    #[default]
    Idle,
    /// Query typed, debounce window still open.
    Loading {
        /// Query that is waiting to settle.
        query: String,
    },
    /// Debounced query equals the typed query.
    Searching {
        /// Settled query.
        query: String,
    },
}

/// Inputs to the status machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusEvent {
    /// The raw query changed.
    QueryChanged(String),
    /// The debouncer published a value.
    Published(String),
}

impl SearchStatus {
    /// Single transition function for the status machine.
    pub fn transition(self, event: StatusEvent) -> SearchStatus {
        match (self, event) {
            (_, StatusEvent::QueryChanged(query)) if query.is_empty() => SearchStatus::Idle,
            (_, StatusEvent::QueryChanged(query)) => SearchStatus::Loading { query },
            (SearchStatus::Loading { query }, StatusEvent::Published(published))
                if published == query =>
            {
                SearchStatus::Searching { query }
            }
            // Publishes for an older query, or while idle, change nothing.
            (state, StatusEvent::Published(_)) => state,
        }
    }

    /// True iff the query is non-empty.
    pub fn searching(&self) -> bool {
        !matches!(self, SearchStatus::Idle)
    }

    /// True while the debounce window for the current query is open.
    pub fn loading(&self) -> bool {
        matches!(self, SearchStatus::Loading { .. })
    }

    /// Query the status refers to, if any.
    pub fn query(&self) -> Option<&str> {
        match self {
            SearchStatus::Idle => None,
            SearchStatus::Loading { query } | SearchStatus::Searching { query } => Some(query),
        }
    }
}

// ===== SearchTracker =====

/// Debounced query plus the status derived from it.
///
/// The owner feeds query changes in and routes fired debounce timers back
/// through [`SearchTracker::on_timer`].
#[derive(Debug, Clone)]
pub struct SearchTracker {
    debounced: Debouncer<String>,
    status: SearchStatus,
    delay: Duration,
}

impl SearchTracker {
    /// Start tracking with the query present at mount.
    ///
    /// A non-empty initial query is treated as already settled: the debounced
    /// value starts equal to it.
    pub fn new(initial: impl Into<String>, delay: Duration) -> Self {
        let initial = initial.into();
        let status = SearchStatus::Idle
            .transition(StatusEvent::QueryChanged(initial.clone()))
            .transition(StatusEvent::Published(initial.clone()));

        Self {
            debounced: Debouncer::new(initial),
            status,
            delay,
        }
    }

    /// Current status.
    pub fn status(&self) -> &SearchStatus {
        &self.status
    }

    /// Last published (committed) query.
    pub fn debounced(&self) -> &str {
        self.debounced.value()
    }

    /// Feed a raw query change.
    ///
    /// `force` publishes immediately instead of waiting out the debounce
    /// window. Returns the new status when it changed.
    pub fn on_query<K>(
        &mut self,
        query: &str,
        force: bool,
        timers: &mut TimerQueue<K>,
        tag: K,
    ) -> Option<SearchStatus> {
        // Re-sending the same query is not a keystroke.
        if query == self.debounced.observed() && !force {
            return None;
        }

        let before = self.status.clone();
        self.apply(StatusEvent::QueryChanged(query.to_string()));

        if force {
            let published = self.debounced.flush(query.to_string(), timers).clone();
            self.apply(StatusEvent::Published(published));
        } else {
            self.debounced
                .observe(query.to_string(), self.delay, timers, tag);
        }

        self.changed_from(before)
    }

    /// Handle a fired debounce timer. Stale handles are ignored.
    pub fn on_timer(&mut self, handle: TimerHandle) -> Option<SearchStatus> {
        let published = self.debounced.fire(handle)?.clone();
        debug!(query = %published, "Debounced query published");

        let before = self.status.clone();
        self.apply(StatusEvent::Published(published));
        self.changed_from(before)
    }

    /// Cancel the debounce timer.
    pub fn teardown<K>(&mut self, timers: &mut TimerQueue<K>) {
        self.debounced.teardown(timers);
    }

    fn apply(&mut self, event: StatusEvent) {
        let status = std::mem::take(&mut self.status);
        self.status = status.transition(event);
    }

    fn changed_from(&self, before: SearchStatus) -> Option<SearchStatus> {
        if before == self.status {
            return None;
        }
        debug!(
            searching = self.status.searching(),
            loading = self.status.loading(),
            "Search status changed"
        );
        Some(self.status.clone())
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_status_tests.rs"]
mod tests;
