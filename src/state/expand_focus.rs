//! Compact search affordance: expand, focus hand-off, blur and clear.
//!
//! On compact (mobile) widths the search field collapses to an icon. Clicking
//! the icon expands it and schedules a focus request after a short delay so
//! the width transition runs first. Blur collapses it again. On wider
//! viewports the field is always expanded and the icon does nothing.
//!
//! All operations are pure state transitions; outbound notifications are
//! returned as [`FieldEffect`]s for the owner to apply.

use crate::runtime::{TimerHandle, TimerQueue};
use std::time::Duration;
use tracing::{debug, trace};

/// Outbound notifications from the search field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEffect {
    /// `onChange(value, force)` to the page.
    Change {
        /// New field contents.
        value: String,
        /// Publish without waiting for the debounce window.
        force: bool,
    },
    /// `onUnFocus(newValue)` to the page. `Some` carries a replacement value.
    UnFocus(Option<String>),
    /// Ask the text input to take focus.
    FocusInput,
}

/// Observable phase of the affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpandPhase {
    /// Icon only.
    Collapsed,
    /// Expanded, focus request scheduled but not yet fired.
    Expanding,
    /// Expanded without input focus.
    Expanded,
    /// Expanded with input focus.
    Focused,
}

/// Visibility of the secondary "browse" affordance next to the search bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrowseVisibility {
    /// Rendered normally.
    Visible,
    /// Keeps its layout space but is not drawn.
    Invisible,
    /// Removed from layout.
    Hidden,
}

/// Browse affordance visibility: hidden while the bar is sticky.
///
/// Wide layouts keep the space (the bar must not shift sideways); compact
/// layouts stack it below the bar and drop it entirely.
pub fn browse_visibility(compact: bool, sticky: bool) -> BrowseVisibility {
    match (sticky, compact) {
        (false, _) => BrowseVisibility::Visible,
        (true, false) => BrowseVisibility::Invisible,
        (true, true) => BrowseVisibility::Hidden,
    }
}

/// Expanded/focused state plus the pending focus request.
#[derive(Debug, Clone)]
pub struct ExpandFocusController {
    expanded: bool,
    focused: bool,
    focus_request: Option<TimerHandle>,
    delay: Duration,
}

impl ExpandFocusController {
    /// Collapsed and unfocused, with the given focus hand-off delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            expanded: false,
            focused: false,
            focus_request: None,
            delay,
        }
    }

    /// Effective expansion: always true outside compact mode.
    pub fn is_expanded(&self, compact: bool) -> bool {
        !compact || self.expanded
    }

    /// Whether the input has focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Current phase.
    pub fn phase(&self, compact: bool) -> ExpandPhase {
        if !self.is_expanded(compact) {
            ExpandPhase::Collapsed
        } else if self.focused {
            ExpandPhase::Focused
        } else if self.focus_request.is_some() {
            ExpandPhase::Expanding
        } else {
            ExpandPhase::Expanded
        }
    }

    /// Search icon clicked.
    ///
    /// Compact only: flips expansion and, when expanding, schedules one focus
    /// request (replacing any older one). Returns whether a request was
    /// scheduled.
    pub fn toggle<K>(&mut self, compact: bool, timers: &mut TimerQueue<K>, tag: K) -> bool {
        if !compact {
            trace!("Search icon is inert outside compact mode");
            return false;
        }

        self.expanded = !self.expanded;
        debug!(expanded = self.expanded, "Compact search toggled");
        if !self.expanded {
            return false;
        }

        if let Some(old) = self.focus_request.take() {
            timers.cancel(old);
        }
        self.focus_request = Some(timers.schedule(self.delay, tag));
        true
    }

    /// Handle a fired focus request.
    ///
    /// Stale handles (superseded or after teardown) yield nothing.
    pub fn fire(&mut self, handle: TimerHandle) -> Option<FieldEffect> {
        if self.focus_request != Some(handle) {
            trace!(?handle, "Ignoring stale focus request");
            return None;
        }
        self.focus_request = None;
        Some(FieldEffect::FocusInput)
    }

    /// Input gained focus.
    pub fn on_focus(&mut self) {
        self.focused = true;
    }

    /// Input lost focus: clear focus, report upward and collapse, as one step.
    pub fn on_blur(&mut self) -> Vec<FieldEffect> {
        self.focused = false;
        self.expanded = false;
        debug!("Search field blurred");
        vec![FieldEffect::UnFocus(None)]
    }

    /// Clear button clicked: empty the field, collapse and return focus.
    pub fn clear(&mut self) -> Vec<FieldEffect> {
        self.expanded = false;
        debug!("Search cleared");
        vec![
            FieldEffect::UnFocus(Some(String::new())),
            FieldEffect::FocusInput,
        ]
    }

    /// Text typed into the field.
    pub fn on_input(&self, value: impl Into<String>) -> FieldEffect {
        FieldEffect::Change {
            value: value.into(),
            force: false,
        }
    }

    /// `/` pressed outside the field: focus it, expanding compact search.
    pub fn slash_focus(&mut self, compact: bool) -> Option<FieldEffect> {
        if self.focused {
            return None;
        }
        if compact {
            self.expanded = true;
        }
        Some(FieldEffect::FocusInput)
    }

    /// Clear button shown iff there is text and the field is visible wide.
    pub fn clear_visible(&self, value: &str, compact: bool) -> bool {
        !value.is_empty() && (self.expanded || !compact)
    }

    /// Cancel the focus request. Safe to call repeatedly.
    pub fn teardown<K>(&mut self, timers: &mut TimerQueue<K>) {
        if let Some(handle) = self.focus_request.take() {
            timers.cancel(handle);
        }
    }
}

#[cfg(test)]
#[path = "expand_focus_tests.rs"]
mod tests;
