//! Timer delays for the search surface.

use std::time::Duration;

/// Default quiet period before a query is committed.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Default delay between expanding the compact search and focusing it.
///
/// Gives the width transition time to run before the input claims focus.
pub const DEFAULT_FOCUS_HAND_OFF: Duration = Duration::from_millis(100);

/// Timer delays used by the debouncer and the expand/focus controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Debounce interval for the committed query.
    pub debounce: Duration,
    /// Delay before a scheduled focus request fires.
    pub focus_hand_off: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            focus_hand_off: DEFAULT_FOCUS_HAND_OFF,
        }
    }
}
