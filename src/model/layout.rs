//! Responsive layout classes derived from viewport width.
//!
//! Two independent threshold sets are derived from the same width:
//! - [`Breakpoint`] decides compact (icon-only) search behavior (640px)
//! - [`StickyTier`] decides the sticky offset band (768px / 1200px)
//!
//! Both are pure functions of width and [`LayoutConstants`].

/// Width or vertical offset in CSS pixels.
pub type Px = u32;

/// Width below which the search affordance collapses to an icon.
pub const DEFAULT_COMPACT_BREAKPOINT: Px = 640;

/// Width above which the sticky bar uses the tablet offset.
pub const DEFAULT_TABLET_BREAKPOINT: Px = 768;

/// Width above which the sticky bar uses the desktop offset.
pub const DEFAULT_DESKTOP_BREAKPOINT: Px = 1200;

/// Sticky offset at or below [`DEFAULT_TABLET_BREAKPOINT`].
pub const DEFAULT_STICKY_OFFSET_MOBILE: Px = 76;

/// Sticky offset between the tablet and desktop breakpoints.
pub const DEFAULT_STICKY_OFFSET_TABLET: Px = 56;

/// Sticky offset above [`DEFAULT_DESKTOP_BREAKPOINT`].
pub const DEFAULT_STICKY_OFFSET_DESKTOP: Px = 16;

// ===== Breakpoint =====

/// Device class of the current viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Breakpoint {
    /// Narrower than the compact breakpoint. Search collapses to an icon.
    Mobile,
    /// From the compact breakpoint up to and including the desktop breakpoint.
    Tablet,
    /// Wider than the desktop breakpoint.
    Desktop,
}

impl Breakpoint {
    /// Whether this class uses the collapsed, icon-only search affordance.
    pub fn is_compact(self) -> bool {
        matches!(self, Breakpoint::Mobile)
    }
}

// ===== StickyTier =====

/// Sticky offset band.
///
/// Uses different thresholds from [`Breakpoint`], so a width of 700px is
/// a `Tablet` breakpoint but a `Narrow` sticky tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StickyTier {
    /// At or below the tablet breakpoint.
    Narrow,
    /// Above the tablet breakpoint, at or below the desktop breakpoint.
    Medium,
    /// Above the desktop breakpoint.
    Wide,
}

// ===== LayoutConstants =====

/// Breakpoint widths and sticky offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConstants {
    /// Widths strictly below this are compact (mobile).
    pub compact_breakpoint: Px,
    /// Widths strictly above this use the tablet sticky offset.
    pub tablet_breakpoint: Px,
    /// Widths strictly above this are desktop.
    pub desktop_breakpoint: Px,
    /// Sticky offset for the narrow tier.
    pub sticky_offset_mobile: Px,
    /// Sticky offset for the medium tier.
    pub sticky_offset_tablet: Px,
    /// Sticky offset for the wide tier.
    pub sticky_offset_desktop: Px,
}

impl Default for LayoutConstants {
    fn default() -> Self {
        Self {
            compact_breakpoint: DEFAULT_COMPACT_BREAKPOINT,
            tablet_breakpoint: DEFAULT_TABLET_BREAKPOINT,
            desktop_breakpoint: DEFAULT_DESKTOP_BREAKPOINT,
            sticky_offset_mobile: DEFAULT_STICKY_OFFSET_MOBILE,
            sticky_offset_tablet: DEFAULT_STICKY_OFFSET_TABLET,
            sticky_offset_desktop: DEFAULT_STICKY_OFFSET_DESKTOP,
        }
    }
}

impl LayoutConstants {
    /// Classify a viewport width.
    pub fn breakpoint(&self, width: Px) -> Breakpoint {
        if width < self.compact_breakpoint {
            Breakpoint::Mobile
        } else if width <= self.desktop_breakpoint {
            Breakpoint::Tablet
        } else {
            Breakpoint::Desktop
        }
    }

    /// Whether a width is compact. Same as `breakpoint(width).is_compact()`.
    pub fn is_compact(&self, width: Px) -> bool {
        width < self.compact_breakpoint
    }

    /// Sticky offset band for a width.
    pub fn sticky_tier(&self, width: Px) -> StickyTier {
        if width > self.desktop_breakpoint {
            StickyTier::Wide
        } else if width > self.tablet_breakpoint {
            StickyTier::Medium
        } else {
            StickyTier::Narrow
        }
    }

    /// Base sticky offset for a tier, before any banner height is added.
    pub fn sticky_offset(&self, tier: StickyTier) -> Px {
        match tier {
            StickyTier::Narrow => self.sticky_offset_mobile,
            StickyTier::Medium => self.sticky_offset_tablet,
            StickyTier::Wide => self.sticky_offset_desktop,
        }
    }
}
