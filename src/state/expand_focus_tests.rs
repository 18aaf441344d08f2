//! Tests for the expand/focus controller.

use super::*;

const DELAY: Duration = Duration::from_millis(100);

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn fire_until(
    ctl: &mut ExpandFocusController,
    timers: &mut TimerQueue<()>,
    until: Duration,
) -> Vec<FieldEffect> {
    let mut effects = Vec::new();
    while let Some(fired) = timers.pop_due(until) {
        effects.extend(ctl.fire(fired.handle));
    }
    timers.advance_clock(until);
    effects
}

// ===== toggle =====

#[test]
fn toggle_expands_and_schedules_one_focus_request() {
    let mut timers = TimerQueue::new();
    let mut ctl = ExpandFocusController::new(DELAY);

    assert_eq!(ctl.phase(true), ExpandPhase::Collapsed);
    assert!(ctl.toggle(true, &mut timers, ()));

    assert_eq!(ctl.phase(true), ExpandPhase::Expanding);
    assert_eq!(timers.len(), 1);
}

#[test]
fn focus_request_fires_after_delay() {
    let mut timers = TimerQueue::new();
    let mut ctl = ExpandFocusController::new(DELAY);
    ctl.toggle(true, &mut timers, ());

    assert!(fire_until(&mut ctl, &mut timers, ms(99)).is_empty());
    assert_eq!(
        fire_until(&mut ctl, &mut timers, ms(100)),
        vec![FieldEffect::FocusInput]
    );
    assert_eq!(ctl.phase(true), ExpandPhase::Expanded);

    ctl.on_focus();
    assert_eq!(ctl.phase(true), ExpandPhase::Focused);
}

#[test]
fn toggle_while_expanded_collapses_without_focus() {
    let mut timers = TimerQueue::new();
    let mut ctl = ExpandFocusController::new(DELAY);

    ctl.toggle(true, &mut timers, ());
    fire_until(&mut ctl, &mut timers, ms(100));

    assert!(!ctl.toggle(true, &mut timers, ()));
    assert_eq!(ctl.phase(true), ExpandPhase::Collapsed);
    assert!(timers.is_empty());
}

#[test]
fn rapid_re_expand_keeps_single_request() {
    let mut timers = TimerQueue::new();
    let mut ctl = ExpandFocusController::new(DELAY);

    ctl.toggle(true, &mut timers, ());
    ctl.toggle(true, &mut timers, ());
    ctl.toggle(true, &mut timers, ());

    assert_eq!(timers.len(), 1);
    assert_eq!(fire_until(&mut ctl, &mut timers, ms(500)).len(), 1);
}

#[test]
fn toggle_is_noop_outside_compact_mode() {
    let mut timers = TimerQueue::new();
    let mut ctl = ExpandFocusController::new(DELAY);

    assert!(!ctl.toggle(false, &mut timers, ()));
    assert!(timers.is_empty());
    assert!(ctl.is_expanded(false), "Wide layouts are always expanded");
    assert!(!ctl.is_expanded(true));
}

#[test]
fn teardown_before_delay_means_no_focus() {
    let mut timers = TimerQueue::new();
    let mut ctl = ExpandFocusController::new(DELAY);

    ctl.toggle(true, &mut timers, ());
    let handle = ctl.focus_request.expect("scheduled");
    ctl.teardown(&mut timers);
    ctl.teardown(&mut timers);

    assert!(timers.is_empty());
    assert_eq!(ctl.fire(handle), None, "Late fire must be a silent no-op");
    assert!(!ctl.is_focused());
}

// ===== blur / clear =====

#[test]
fn blur_unfocuses_reports_and_collapses() {
    let mut timers = TimerQueue::new();
    let mut ctl = ExpandFocusController::new(DELAY);
    ctl.toggle(true, &mut timers, ());
    fire_until(&mut ctl, &mut timers, ms(100));
    ctl.on_focus();

    let effects = ctl.on_blur();

    assert_eq!(effects, vec![FieldEffect::UnFocus(None)]);
    assert!(!ctl.is_focused());
    assert_eq!(ctl.phase(true), ExpandPhase::Collapsed);
}

#[test]
fn clear_reports_empty_value_collapses_and_refocuses() {
    let mut timers = TimerQueue::new();
    let mut ctl = ExpandFocusController::new(DELAY);
    ctl.toggle(true, &mut timers, ());

    let effects = ctl.clear();

    assert_eq!(
        effects,
        vec![
            FieldEffect::UnFocus(Some(String::new())),
            FieldEffect::FocusInput
        ]
    );
    assert!(!ctl.is_expanded(true));
}

#[test]
fn typing_reports_unforced_change() {
    let ctl = ExpandFocusController::new(DELAY);
    assert_eq!(
        ctl.on_input("dune"),
        FieldEffect::Change {
            value: "dune".to_string(),
            force: false
        }
    );
}

// ===== visibility =====

#[test]
fn clear_button_needs_text() {
    let ctl = ExpandFocusController::new(DELAY);
    assert!(!ctl.clear_visible("", false));
    assert!(ctl.clear_visible("x", false));
}

#[test]
fn clear_button_hidden_when_compact_and_collapsed() {
    let mut timers = TimerQueue::new();
    let mut ctl = ExpandFocusController::new(DELAY);

    assert!(!ctl.clear_visible("x", true));
    ctl.toggle(true, &mut timers, ());
    assert!(ctl.clear_visible("x", true));
}

#[test]
fn browse_hidden_only_while_sticky() {
    assert_eq!(browse_visibility(false, false), BrowseVisibility::Visible);
    assert_eq!(browse_visibility(true, false), BrowseVisibility::Visible);
    assert_eq!(browse_visibility(false, true), BrowseVisibility::Invisible);
    assert_eq!(browse_visibility(true, true), BrowseVisibility::Hidden);
}

// ===== slash focus =====

#[test]
fn slash_focuses_unfocused_field() {
    let mut ctl = ExpandFocusController::new(DELAY);
    assert_eq!(ctl.slash_focus(false), Some(FieldEffect::FocusInput));
}

#[test]
fn slash_expands_compact_field() {
    let mut ctl = ExpandFocusController::new(DELAY);
    ctl.slash_focus(true);
    assert!(ctl.is_expanded(true));
}

#[test]
fn slash_ignored_when_focused() {
    let mut ctl = ExpandFocusController::new(DELAY);
    ctl.on_focus();
    assert_eq!(ctl.slash_focus(true), None);
}
