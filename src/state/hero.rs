//! Hero search region: the search bar plus its sticky container.
//!
//! Composes the viewport observer, the sticky controller and the
//! expand/focus controller. The viewport feeds both others: tier crossings
//! move the sticky offset, class crossings switch compact behavior on or off.
//! The sticky flag is read (never written) to decide browse visibility.

use crate::model::{Breakpoint, LayoutConstants, Px, Timings};
use crate::runtime::{EventSource, Listener, TimerHandle, TimerQueue, TimerTag};
use crate::state::breakpoint_observer::BreakpointObserver;
use crate::state::expand_focus::{
    browse_visibility, BrowseVisibility, ExpandFocusController, ExpandPhase, FieldEffect,
};
use crate::state::sticky::StickyController;

/// Inbound events from the search field and its buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// Text input changed.
    Input(String),
    /// Search icon clicked.
    SearchIconClicked,
    /// Text input gained focus.
    InputFocused,
    /// Text input lost focus.
    InputBlurred,
    /// Clear button clicked.
    ClearClicked,
    /// `/` pressed while focus is elsewhere on the page.
    SlashPressed,
}

/// Outbound notifications from the hero region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeroEffect {
    /// Notification from the search field.
    Field(FieldEffect),
    /// `setIsSticky` to the page.
    SetSticky(bool),
}

impl From<FieldEffect> for HeroEffect {
    fn from(effect: FieldEffect) -> Self {
        HeroEffect::Field(effect)
    }
}

/// Render-ready snapshot of the hero region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroView {
    /// Viewport width.
    pub width: Px,
    /// Viewport class.
    pub breakpoint: Breakpoint,
    /// Whether the region is fixed.
    pub is_sticky: bool,
    /// Distance from the viewport top when fixed (offset plus banner).
    pub fixed_top: Px,
    /// Phase of the search affordance.
    pub phase: ExpandPhase,
    /// Whether the field is drawn at full width.
    pub expanded: bool,
    /// Whether the input has focus.
    pub focused: bool,
    /// Whether the clear button is drawn.
    pub clear_visible: bool,
    /// Browse affordance visibility.
    pub browse: BrowseVisibility,
}

/// Mounted hero search region.
#[derive(Debug)]
pub struct HeroSurface {
    viewport: BreakpointObserver,
    sticky: StickyController,
    field: ExpandFocusController,
}

impl HeroSurface {
    /// Mount: subscribe to resize and scroll for the surface's lifetime.
    pub fn mount(
        resize: &EventSource<Listener>,
        scroll: &EventSource<Listener>,
        layout: LayoutConstants,
        timings: Timings,
        width: Px,
        banner_height: Px,
    ) -> Self {
        let viewport =
            BreakpointObserver::mount(resize.subscribe(Listener::Viewport), layout, width);
        let sticky = StickyController::mount(
            scroll.subscribe(Listener::Sticky),
            viewport.sticky_offset(),
            banner_height,
        );

        Self {
            viewport,
            sticky,
            field: ExpandFocusController::new(timings.focus_hand_off),
        }
    }

    fn compact(&self) -> bool {
        self.viewport.is_mobile()
    }

    /// Handle a field event.
    pub fn handle(
        &mut self,
        event: SurfaceEvent,
        timers: &mut TimerQueue<TimerTag>,
    ) -> Vec<HeroEffect> {
        let compact = self.compact();
        let effects: Vec<FieldEffect> = match event {
            SurfaceEvent::Input(value) => vec![self.field.on_input(value)],
            SurfaceEvent::SearchIconClicked => {
                self.field.toggle(compact, timers, TimerTag::FocusHandOff);
                Vec::new()
            }
            SurfaceEvent::InputFocused => {
                self.field.on_focus();
                Vec::new()
            }
            SurfaceEvent::InputBlurred => self.field.on_blur(),
            SurfaceEvent::ClearClicked => self.field.clear(),
            SurfaceEvent::SlashPressed => self.field.slash_focus(compact).into_iter().collect(),
        };
        effects.into_iter().map(HeroEffect::from).collect()
    }

    /// Viewport resized.
    pub fn on_resize(&mut self, width: Px) -> Vec<HeroEffect> {
        let Some(change) = self.viewport.on_resize(width) else {
            return Vec::new();
        };

        change
            .sticky_offset
            .and_then(|offset| self.sticky.set_offset(offset))
            .map(HeroEffect::SetSticky)
            .into_iter()
            .collect()
    }

    /// Page scrolled; `holder_top` is the region's natural top in the viewport.
    pub fn on_scroll(&mut self, holder_top: i32) -> Vec<HeroEffect> {
        self.sticky
            .on_scroll(holder_top)
            .map(HeroEffect::SetSticky)
            .into_iter()
            .collect()
    }

    /// External banner height changed.
    pub fn set_banner_height(&mut self, height: Px) -> Vec<HeroEffect> {
        self.sticky
            .set_banner_height(height)
            .map(HeroEffect::SetSticky)
            .into_iter()
            .collect()
    }

    /// Focus request fired.
    pub fn on_timer(&mut self, handle: TimerHandle) -> Vec<HeroEffect> {
        self.field
            .fire(handle)
            .map(HeroEffect::from)
            .into_iter()
            .collect()
    }

    /// Snapshot for rendering, given the current field value.
    pub fn view(&self, value: &str) -> HeroView {
        let compact = self.compact();
        HeroView {
            width: self.viewport.width(),
            breakpoint: self.viewport.breakpoint(),
            is_sticky: self.sticky.is_sticky(),
            fixed_top: self.sticky.fixed_top(),
            phase: self.field.phase(compact),
            expanded: self.field.is_expanded(compact),
            focused: self.field.is_focused(),
            clear_visible: self.field.clear_visible(value, compact),
            browse: browse_visibility(compact, self.sticky.is_sticky()),
        }
    }

    /// Whether the region is fixed.
    pub fn is_sticky(&self) -> bool {
        self.sticky.is_sticky()
    }

    /// Whether the input has focus.
    pub fn is_focused(&self) -> bool {
        self.field.is_focused()
    }

    /// Viewport observer (read-only).
    pub fn viewport(&self) -> &BreakpointObserver {
        &self.viewport
    }

    /// Cancel timers. Listeners are released when `self` drops at the end.
    pub fn teardown(mut self, timers: &mut TimerQueue<TimerTag>) {
        self.field.teardown(timers);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    struct Fixture {
        resize: EventSource<Listener>,
        scroll: EventSource<Listener>,
        timers: TimerQueue<TimerTag>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                resize: EventSource::new(),
                scroll: EventSource::new(),
                timers: TimerQueue::new(),
            }
        }

        fn mount(&self, width: Px) -> HeroSurface {
            HeroSurface::mount(
                &self.resize,
                &self.scroll,
                LayoutConstants::default(),
                Timings::default(),
                width,
                0,
            )
        }
    }

    #[test]
    fn mount_registers_both_listeners() {
        let fx = Fixture::new();
        let hero = fx.mount(1000);

        assert_eq!(fx.resize.listeners(), vec![Listener::Viewport]);
        assert_eq!(fx.scroll.listeners(), vec![Listener::Sticky]);
        assert_eq!(hero.view("").fixed_top, 56);
    }

    #[test]
    fn teardown_releases_listeners_and_timers() {
        let mut fx = Fixture::new();
        let mut hero = fx.mount(500);
        hero.handle(SurfaceEvent::SearchIconClicked, &mut fx.timers);
        assert_eq!(fx.timers.len(), 1);

        hero.teardown(&mut fx.timers);

        assert!(fx.timers.is_empty());
        assert_eq!(fx.resize.listener_count(), 0);
        assert_eq!(fx.scroll.listener_count(), 0);
    }

    #[test]
    fn resize_across_tier_moves_fixed_top_while_sticky() {
        let fx = Fixture::new();
        let mut hero = fx.mount(1400);

        assert_eq!(hero.on_scroll(-100), vec![HeroEffect::SetSticky(true)]);
        assert_eq!(hero.on_resize(1000), Vec::<HeroEffect>::new());
        assert_eq!(hero.view("").fixed_top, 56);
        assert!(hero.is_sticky());
    }

    #[test]
    fn icon_click_only_schedules_in_compact_mode() {
        let mut fx = Fixture::new();
        let mut wide = fx.mount(1000);
        wide.handle(SurfaceEvent::SearchIconClicked, &mut fx.timers);
        assert!(fx.timers.is_empty());

        let mut narrow = fx.mount(500);
        narrow.handle(SurfaceEvent::SearchIconClicked, &mut fx.timers);
        assert_eq!(fx.timers.len(), 1);
        assert_eq!(narrow.view("").phase, ExpandPhase::Expanding);
    }

    #[test]
    fn focus_request_surfaces_as_field_effect() {
        let mut fx = Fixture::new();
        let mut hero = fx.mount(500);
        hero.handle(SurfaceEvent::SearchIconClicked, &mut fx.timers);

        let fired = fx
            .timers
            .pop_due(Duration::from_millis(100))
            .expect("focus request due");
        assert_eq!(fired.payload, TimerTag::FocusHandOff);
        assert_eq!(
            hero.on_timer(fired.handle),
            vec![HeroEffect::Field(FieldEffect::FocusInput)]
        );
    }

    #[test]
    fn browse_affordance_follows_sticky_state() {
        let fx = Fixture::new();
        let mut hero = fx.mount(1000);
        assert_eq!(hero.view("").browse, BrowseVisibility::Visible);

        hero.on_scroll(0);
        assert_eq!(hero.view("").browse, BrowseVisibility::Invisible);

        hero.on_resize(500);
        assert_eq!(hero.view("").browse, BrowseVisibility::Hidden);
    }

    #[test]
    fn growing_out_of_compact_mode_shows_field_expanded() {
        let fx = Fixture::new();
        let mut hero = fx.mount(500);
        assert!(!hero.view("abc").expanded);
        assert!(!hero.view("abc").clear_visible);

        hero.on_resize(900);
        assert!(hero.view("abc").expanded);
        assert!(hero.view("abc").clear_visible);
    }
}
