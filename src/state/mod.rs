//! Search interaction state machines (pure).
//!
//! All state transitions are plain functions over owned state. Timers are
//! scheduled on a queue passed in by the caller and listeners are registered
//! on event sources the caller owns, so everything here is testable without
//! a terminal.

pub mod breakpoint_observer;
pub mod debounce;
pub mod expand_focus;
pub mod hero;
pub mod page;
pub mod search_status;
pub mod sticky;

// Re-export for convenience
pub use breakpoint_observer::{BreakpointObserver, ResizeChange};
pub use debounce::Debouncer;
pub use expand_focus::{
    browse_visibility, BrowseVisibility, ExpandFocusController, ExpandPhase, FieldEffect,
};
pub use hero::{HeroEffect, HeroSurface, HeroView, SurfaceEvent};
pub use page::{ContentRegion, HomePage, PageNotification, PageOptions};
pub use search_status::{SearchStatus, SearchTracker, StatusEvent};
pub use sticky::StickyController;
