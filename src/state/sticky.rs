//! Sticky hero search region.
//!
//! The region becomes fixed once its natural position scrolls within
//! `sticky_offset + banner_height` of the viewport top, and is then drawn at
//! exactly that distance. Triggering and drawing at the same line means the
//! bar does not move at the moment it sticks.
//!
//! Transitions are reported only when the sticky flag flips; scroll ticks
//! that keep the same state report nothing.

use crate::model::Px;
use crate::runtime::Subscription;
use tracing::debug;

/// Sticky/unsticky detection for the hero search region.
#[derive(Debug)]
pub struct StickyController {
    offset: Px,
    banner_height: Px,
    holder_top: Option<i32>,
    is_sticky: bool,
    _scroll: Subscription,
}

impl StickyController {
    /// Start detection. Not sticky until the first scroll sample says so.
    pub fn mount(scroll: Subscription, offset: Px, banner_height: Px) -> Self {
        Self {
            offset,
            banner_height,
            holder_top: None,
            is_sticky: false,
            _scroll: scroll,
        }
    }

    /// Whether the region is currently fixed.
    pub fn is_sticky(&self) -> bool {
        self.is_sticky
    }

    /// Base offset for the current breakpoint tier.
    pub fn offset(&self) -> Px {
        self.offset
    }

    /// External banner height stacked above the region.
    pub fn banner_height(&self) -> Px {
        self.banner_height
    }

    /// Distance from the viewport top at which the fixed region is drawn.
    ///
    /// Saturates instead of overflowing for oversized banner heights.
    pub fn fixed_top(&self) -> Px {
        self.offset.saturating_add(self.banner_height)
    }

    /// Last sampled natural position of the region, relative to the viewport top.
    pub fn holder_top(&self) -> Option<i32> {
        self.holder_top
    }

    /// Sample the region's natural position after a scroll.
    ///
    /// Returns the new sticky flag when it flipped.
    pub fn on_scroll(&mut self, holder_top: i32) -> Option<bool> {
        self.holder_top = Some(holder_top);
        self.reevaluate()
    }

    /// Apply a new base offset after a tier crossing.
    ///
    /// The fixed position follows immediately; the sticky flag is re-derived
    /// from the last sample against the new threshold.
    pub fn set_offset(&mut self, offset: Px) -> Option<bool> {
        if offset == self.offset {
            return None;
        }
        debug!(from = self.offset, to = offset, "Sticky offset changed");
        self.offset = offset;
        self.reevaluate()
    }

    /// Apply a new external banner height.
    pub fn set_banner_height(&mut self, banner_height: Px) -> Option<bool> {
        if banner_height == self.banner_height {
            return None;
        }
        self.banner_height = banner_height;
        self.reevaluate()
    }

    /// Whether the scroll listener is still registered.
    pub fn is_listening(&self) -> bool {
        self._scroll.is_active()
    }

    fn reevaluate(&mut self) -> Option<bool> {
        let holder_top = self.holder_top?;
        let threshold = i64::from(self.fixed_top());
        self.set_sticky(i64::from(holder_top) < threshold)
    }

    fn set_sticky(&mut self, sticky: bool) -> Option<bool> {
        if sticky == self.is_sticky {
            return None;
        }
        self.is_sticky = sticky;
        debug!(sticky, fixed_top = self.fixed_top(), "Sticky state toggled");
        Some(sticky)
    }
}

#[cfg(test)]
#[path = "sticky_tests.rs"]
mod tests;
