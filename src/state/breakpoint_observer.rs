//! Viewport width tracking.
//!
//! Updated synchronously on every resize notification. The sticky offset is
//! only recomputed when the width crosses a tier threshold, so sub-threshold
//! jitter never reaches consumers.

use crate::model::{Breakpoint, LayoutConstants, Px, StickyTier};
use crate::runtime::Subscription;
use tracing::debug;

/// Result of a resize that crossed a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeChange {
    /// Set when the sticky tier changed: the new base sticky offset.
    pub sticky_offset: Option<Px>,
    /// Set when the breakpoint class changed: the new class.
    pub breakpoint: Option<Breakpoint>,
}

/// Current viewport width and the classes derived from it.
#[derive(Debug)]
pub struct BreakpointObserver {
    width: Px,
    breakpoint: Breakpoint,
    tier: StickyTier,
    sticky_offset: Px,
    layout: LayoutConstants,
    _resize: Subscription,
}

impl BreakpointObserver {
    /// Start observing with the width sampled at mount.
    ///
    /// Holds `resize` for its whole lifetime; dropping the observer removes
    /// the resize listener.
    pub fn mount(resize: Subscription, layout: LayoutConstants, width: Px) -> Self {
        let tier = layout.sticky_tier(width);
        Self {
            width,
            breakpoint: layout.breakpoint(width),
            tier,
            sticky_offset: layout.sticky_offset(tier),
            layout,
            _resize: resize,
        }
    }

    /// Record a new width.
    ///
    /// Returns `None` when no threshold was crossed. Idempotent: repeating a
    /// width never reports a change.
    pub fn on_resize(&mut self, width: Px) -> Option<ResizeChange> {
        self.width = width;

        let tier = self.layout.sticky_tier(width);
        let sticky_offset = (tier != self.tier).then(|| {
            self.tier = tier;
            self.sticky_offset = self.layout.sticky_offset(tier);
            self.sticky_offset
        });

        let class = self.layout.breakpoint(width);
        let breakpoint = (class != self.breakpoint).then(|| {
            self.breakpoint = class;
            class
        });

        if sticky_offset.is_none() && breakpoint.is_none() {
            return None;
        }

        debug!(width, ?breakpoint, ?sticky_offset, "Viewport crossed a breakpoint");
        Some(ResizeChange {
            sticky_offset,
            breakpoint,
        })
    }

    /// Current width.
    pub fn width(&self) -> Px {
        self.width
    }

    /// Current breakpoint class.
    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    /// `width < 640` with default constants.
    pub fn is_mobile(&self) -> bool {
        self.breakpoint.is_compact()
    }

    /// Current sticky tier.
    pub fn tier(&self) -> StickyTier {
        self.tier
    }

    /// Base sticky offset for the current tier.
    pub fn sticky_offset(&self) -> Px {
        self.sticky_offset
    }

    /// Whether the resize listener is still registered.
    pub fn is_listening(&self) -> bool {
        self._resize.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::EventSource;

    fn observer(source: &EventSource<()>, width: Px) -> BreakpointObserver {
        BreakpointObserver::mount(source.subscribe(()), LayoutConstants::default(), width)
    }

    #[test]
    fn mount_derives_classes_from_width() {
        let source = EventSource::new();
        let obs = observer(&source, 500);

        assert_eq!(obs.breakpoint(), Breakpoint::Mobile);
        assert!(obs.is_mobile());
        assert_eq!(obs.sticky_offset(), 76);
        assert!(obs.is_listening());
    }

    #[test]
    fn sub_threshold_resize_reports_nothing() {
        let source = EventSource::new();
        let mut obs = observer(&source, 1000);

        assert_eq!(obs.on_resize(1001), None);
        assert_eq!(obs.on_resize(1100), None);
        assert_eq!(obs.width(), 1100, "Width still updates synchronously");
        assert_eq!(obs.sticky_offset(), 56);
    }

    #[test]
    fn crossing_desktop_threshold_reports_offset_and_class() {
        let source = EventSource::new();
        let mut obs = observer(&source, 1000);

        let change = obs.on_resize(1400).expect("threshold crossed");
        assert_eq!(change.sticky_offset, Some(16));
        assert_eq!(change.breakpoint, Some(Breakpoint::Desktop));
    }

    #[test]
    fn crossing_only_tier_threshold_keeps_class() {
        let source = EventSource::new();
        let mut obs = observer(&source, 700);

        let change = obs.on_resize(800).expect("tier crossed");
        assert_eq!(change.sticky_offset, Some(56));
        assert_eq!(change.breakpoint, None);
        assert_eq!(obs.breakpoint(), Breakpoint::Tablet);
    }

    #[test]
    fn crossing_only_compact_threshold_keeps_offset() {
        let source = EventSource::new();
        let mut obs = observer(&source, 700);

        let change = obs.on_resize(600).expect("class crossed");
        assert_eq!(change.sticky_offset, None);
        assert_eq!(change.breakpoint, Some(Breakpoint::Mobile));
        assert!(obs.is_mobile());
    }

    #[test]
    fn repeated_resize_is_idempotent() {
        let source = EventSource::new();
        let mut obs = observer(&source, 500);

        assert!(obs.on_resize(1400).is_some());
        assert_eq!(obs.on_resize(1400), None);
        assert_eq!(obs.sticky_offset(), 16);
    }

    #[test]
    fn dropping_observer_removes_listener() {
        let source = EventSource::new();
        let obs = observer(&source, 500);
        assert_eq!(source.listener_count(), 1);

        drop(obs);
        assert_eq!(source.listener_count(), 0);
    }
}
