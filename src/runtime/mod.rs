//! Single-threaded event plumbing (timers, global event sources, page host).
//!
//! Everything runs on one cooperative queue: external events are delivered
//! one at a time and timers fire only when the host advances the clock.

pub mod host;
pub mod listeners;
pub mod timer;

pub use host::Runtime;
pub use listeners::{EventSource, ListenerId, Subscription};
pub use timer::{Fired, TimerHandle, TimerQueue};

/// What a scheduled timer is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerTag {
    /// Debounced query publish.
    Debounce,
    /// Focus hand-off after the compact search expands.
    FocusHandOff,
}

/// Receiver of a global event source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Listener {
    /// Viewport observer, on the resize source.
    Viewport,
    /// Sticky detector, on the scroll source.
    Sticky,
}
