//! Tests for the sticky controller.

use super::*;
use crate::runtime::EventSource;

fn controller(source: &EventSource<()>, offset: Px, banner: Px) -> StickyController {
    StickyController::mount(source.subscribe(()), offset, banner)
}

#[test]
fn starts_unsticky_without_samples() {
    let source = EventSource::new();
    let sticky = controller(&source, 56, 0);

    assert!(!sticky.is_sticky());
    assert_eq!(sticky.holder_top(), None);
    assert_eq!(sticky.fixed_top(), 56);
}

#[test]
fn sticks_when_region_reaches_offset() {
    let source = EventSource::new();
    let mut sticky = controller(&source, 56, 0);

    assert_eq!(sticky.on_scroll(300), None);
    assert_eq!(sticky.on_scroll(57), None);
    assert_eq!(sticky.on_scroll(56), None, "Exactly at the line is not past it");
    assert_eq!(sticky.on_scroll(55), Some(true));
    assert!(sticky.is_sticky());
}

#[test]
fn callback_fires_only_on_transitions() {
    let source = EventSource::new();
    let mut sticky = controller(&source, 16, 0);

    let transitions: Vec<bool> = [400, 200, 10, -50, -300, -20, 15, 16, 40, 500]
        .into_iter()
        .filter_map(|top| sticky.on_scroll(top))
        .collect();

    assert_eq!(transitions, vec![true, false]);
}

#[test]
fn banner_height_adds_to_fixed_position_and_threshold() {
    let source = EventSource::new();
    let mut sticky = controller(&source, 56, 40);

    assert_eq!(sticky.fixed_top(), 96);
    assert_eq!(sticky.on_scroll(95), Some(true));
}

#[test]
fn banner_change_reevaluates_against_last_sample() {
    let source = EventSource::new();
    let mut sticky = controller(&source, 56, 0);

    sticky.on_scroll(80);
    assert!(!sticky.is_sticky());

    assert_eq!(sticky.set_banner_height(40), Some(true));
    assert_eq!(sticky.set_banner_height(40), None);
    assert_eq!(sticky.set_banner_height(0), Some(false));
}

#[test]
fn breakpoint_crossing_while_sticky_moves_fixed_offset_without_transition() {
    let source = EventSource::new();
    let mut sticky = controller(&source, 16, 0);

    sticky.on_scroll(-200);
    assert!(sticky.is_sticky());

    // Desktop -> tablet while stuck: new position, no toggle.
    assert_eq!(sticky.set_offset(56), None);
    assert!(sticky.is_sticky());
    assert_eq!(sticky.fixed_top(), 56);

    // Tablet -> mobile.
    assert_eq!(sticky.set_offset(76), None);
    assert_eq!(sticky.fixed_top(), 76);
}

#[test]
fn offset_change_can_unstick_region_near_the_line() {
    let source = EventSource::new();
    let mut sticky = controller(&source, 76, 0);

    sticky.on_scroll(60);
    assert!(sticky.is_sticky());

    assert_eq!(sticky.set_offset(16), Some(false));
}

#[test]
fn same_offset_is_idempotent() {
    let source = EventSource::new();
    let mut sticky = controller(&source, 56, 0);
    sticky.on_scroll(0);

    assert_eq!(sticky.set_offset(56), None);
    assert_eq!(sticky.set_offset(56), None);
    assert!(sticky.is_sticky());
}

#[test]
fn oversized_banner_saturates_fixed_top() {
    let source = EventSource::new();
    let mut sticky = controller(&source, 56, u32::MAX);

    assert_eq!(sticky.fixed_top(), u32::MAX);
    assert_eq!(sticky.on_scroll(0), Some(true));

    assert_eq!(sticky.set_banner_height(u32::MAX - 10), None);
    assert_eq!(sticky.fixed_top(), u32::MAX);
}

#[test]
fn dropping_controller_removes_scroll_listener() {
    let source = EventSource::new();
    let sticky = controller(&source, 56, 0);
    assert!(sticky.is_listening());

    drop(sticky);
    assert_eq!(source.listener_count(), 0);
}
