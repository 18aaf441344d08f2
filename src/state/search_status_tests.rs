//! Tests for the search status machine.

use super::*;

const DELAY: Duration = Duration::from_millis(500);

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Advance time, routing fired timers to the tracker.
/// Returns every status change observed on the way.
fn run_until(
    tracker: &mut SearchTracker,
    timers: &mut TimerQueue<()>,
    until: Duration,
) -> Vec<SearchStatus> {
    let mut changes = Vec::new();
    while let Some(fired) = timers.pop_due(until) {
        if let Some(status) = tracker.on_timer(fired.handle) {
            changes.push(status);
        }
    }
    timers.advance_clock(until);
    changes
}

fn loading(q: &str) -> SearchStatus {
    SearchStatus::Loading {
        query: q.to_string(),
    }
}

fn searching(q: &str) -> SearchStatus {
    SearchStatus::Searching {
        query: q.to_string(),
    }
}

// ===== transition tests =====

#[test]
fn empty_query_is_idle_from_any_state() {
    for state in [SearchStatus::Idle, loading("a"), searching("a")] {
        let next = state.transition(StatusEvent::QueryChanged(String::new()));
        assert_eq!(next, SearchStatus::Idle);
    }
}

#[test]
fn non_empty_query_enters_loading_from_any_state() {
    for state in [SearchStatus::Idle, loading("a"), searching("a")] {
        let next = state.transition(StatusEvent::QueryChanged("ab".to_string()));
        assert_eq!(next, loading("ab"));
    }
}

#[test]
fn keystroke_matching_published_value_still_loads() {
    let state = searching("a");
    let next = state.transition(StatusEvent::QueryChanged("a".to_string()));
    assert_eq!(next, loading("a"));
}

#[test]
fn publish_of_current_query_settles() {
    let next = loading("bat").transition(StatusEvent::Published("bat".to_string()));
    assert_eq!(next, searching("bat"));
}

#[test]
fn publish_of_other_value_is_ignored() {
    let next = loading("bat").transition(StatusEvent::Published("ba".to_string()));
    assert_eq!(next, loading("bat"));

    let idle = SearchStatus::Idle.transition(StatusEvent::Published("x".to_string()));
    assert_eq!(idle, SearchStatus::Idle);
}

#[test]
fn flags_follow_state() {
    assert!(!SearchStatus::Idle.searching());
    assert!(!SearchStatus::Idle.loading());
    assert!(loading("a").searching());
    assert!(loading("a").loading());
    assert!(searching("a").searching());
    assert!(!searching("a").loading());
}

// ===== SearchTracker tests =====

#[test]
fn initial_non_empty_query_is_settled() {
    let tracker = SearchTracker::new("batman", DELAY);
    assert_eq!(tracker.status(), &searching("batman"));
    assert_eq!(tracker.debounced(), "batman");
}

#[test]
fn initial_empty_query_is_idle() {
    let tracker = SearchTracker::new("", DELAY);
    assert_eq!(tracker.status(), &SearchStatus::Idle);
}

#[test]
fn loading_is_immediate_and_clears_exactly_at_settle() {
    let mut timers = TimerQueue::new();
    let mut tracker = SearchTracker::new("", DELAY);

    let change = tracker.on_query("bat", false, &mut timers, ());
    assert_eq!(change, Some(loading("bat")));

    assert!(run_until(&mut tracker, &mut timers, ms(499)).is_empty());
    assert!(tracker.status().loading(), "Still loading before the window closes");

    assert_eq!(
        run_until(&mut tracker, &mut timers, ms(500)),
        vec![searching("bat")]
    );
    assert_eq!(tracker.debounced(), "bat");
}

#[test]
fn batman_then_empty_goes_idle_without_settling() {
    let mut timers = TimerQueue::new();
    let mut tracker = SearchTracker::new("", DELAY);

    tracker.on_query("batman", false, &mut timers, ());
    run_until(&mut tracker, &mut timers, ms(200));
    let change = tracker.on_query("", false, &mut timers, ());
    assert_eq!(change, Some(SearchStatus::Idle));

    let later = run_until(&mut tracker, &mut timers, ms(2000));
    assert!(
        later.iter().all(|s| *s != searching("batman")),
        "batman must never settle, got {:?}",
        later
    );
    assert_eq!(tracker.status(), &SearchStatus::Idle);
    assert_eq!(tracker.debounced(), "");
}

#[test]
fn typing_back_to_settled_value_loads_then_settles_again() {
    let mut timers = TimerQueue::new();
    let mut tracker = SearchTracker::new("a", DELAY);

    tracker.on_query("ab", false, &mut timers, ());
    tracker.on_query("a", false, &mut timers, ());
    assert_eq!(tracker.status(), &loading("a"));

    assert_eq!(
        run_until(&mut tracker, &mut timers, ms(500)),
        vec![searching("a")]
    );
}

#[test]
fn repeated_identical_query_is_not_a_keystroke() {
    let mut timers = TimerQueue::new();
    let mut tracker = SearchTracker::new("", DELAY);

    tracker.on_query("a", false, &mut timers, ());
    run_until(&mut tracker, &mut timers, ms(500));

    assert_eq!(tracker.on_query("a", false, &mut timers, ()), None);
    assert_eq!(tracker.status(), &searching("a"));
}

#[test]
fn force_settles_immediately() {
    let mut timers = TimerQueue::new();
    let mut tracker = SearchTracker::new("", DELAY);

    tracker.on_query("bat", false, &mut timers, ());
    let change = tracker.on_query("", true, &mut timers, ());

    assert_eq!(change, Some(SearchStatus::Idle));
    assert_eq!(tracker.debounced(), "");
    assert!(timers.is_empty(), "Force must cancel the pending debounce");
}

#[test]
fn force_with_non_empty_query_skips_loading() {
    let mut timers = TimerQueue::new();
    let mut tracker = SearchTracker::new("", DELAY);

    let change = tracker.on_query("dune", true, &mut timers, ());
    assert_eq!(change, Some(searching("dune")));
}

#[test]
fn teardown_prevents_publish() {
    let mut timers = TimerQueue::new();
    let mut tracker = SearchTracker::new("", DELAY);

    tracker.on_query("x", false, &mut timers, ());
    tracker.teardown(&mut timers);

    assert!(run_until(&mut tracker, &mut timers, ms(1000)).is_empty());
    assert!(tracker.status().loading());
}
