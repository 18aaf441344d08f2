//! Page host: owns the clock, the global event sources and the mounted page.
//!
//! Plays the part of the browser for the page: it delivers resize and scroll
//! events to registered listeners, fires timers as time advances and focuses
//! the text input when asked to. After unmount nothing reaches the page; a
//! timer that somehow survives is dropped silently.

use crate::model::Px;
use crate::runtime::{EventSource, Listener, TimerQueue, TimerTag};
use crate::state::{HomePage, PageNotification, PageOptions, SurfaceEvent};
use std::time::Duration;
use tracing::trace;

/// Host for one home page at a time.
#[derive(Debug)]
pub struct Runtime {
    timers: TimerQueue<TimerTag>,
    resize: EventSource<Listener>,
    scroll: EventSource<Listener>,
    page: Option<HomePage>,
    notifications: Vec<PageNotification>,
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

impl Runtime {
    /// Empty host with the clock at zero.
    pub fn new() -> Self {
        Self {
            timers: TimerQueue::new(),
            resize: EventSource::new(),
            scroll: EventSource::new(),
            page: None,
            notifications: Vec::new(),
        }
    }

    /// Mount a page, unmounting any previous one first.
    pub fn mount(&mut self, options: PageOptions) {
        self.unmount();
        self.page = Some(HomePage::mount(&self.resize, &self.scroll, options));
    }

    /// Unmount the page: cancel its timers and release its listeners.
    ///
    /// Returns `false` when nothing was mounted.
    pub fn unmount(&mut self) -> bool {
        match self.page.take() {
            Some(page) => {
                page.teardown(&mut self.timers);
                true
            }
            None => false,
        }
    }

    /// Mounted page, if any.
    pub fn page(&self) -> Option<&HomePage> {
        self.page.as_ref()
    }

    /// Mounted page, mutable, for external data-source updates.
    pub fn page_mut(&mut self) -> Option<&mut HomePage> {
        self.page.as_mut()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// Earliest pending timer deadline.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// Number of pending timers.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Number of registered resize and scroll listeners.
    pub fn listener_count(&self) -> usize {
        self.resize.listener_count() + self.scroll.listener_count()
    }

    /// Deliver a field event to the mounted page.
    pub fn dispatch(&mut self, event: SurfaceEvent) {
        let Some(page) = self.page.as_mut() else {
            trace!(?event, "No page mounted; dropping field event");
            return;
        };
        let notes = page.handle(event, &mut self.timers);
        self.deliver(notes);
    }

    /// Window resized.
    pub fn resize(&mut self, width: Px) {
        for listener in self.resize.listeners() {
            let Some(page) = self.page.as_mut() else {
                return;
            };
            let notes = match listener {
                Listener::Viewport => page.on_resize(width, &mut self.timers),
                Listener::Sticky => Vec::new(),
            };
            self.deliver(notes);
        }
    }

    /// Page scrolled; `holder_top` is the hero region's natural top.
    pub fn scroll(&mut self, holder_top: i32) {
        for listener in self.scroll.listeners() {
            let Some(page) = self.page.as_mut() else {
                return;
            };
            let notes = match listener {
                Listener::Sticky => page.on_scroll(holder_top, &mut self.timers),
                Listener::Viewport => Vec::new(),
            };
            self.deliver(notes);
        }
    }

    /// External banner height changed.
    pub fn set_banner_height(&mut self, height: Px) {
        if let Some(page) = self.page.as_mut() {
            let notes = page.set_banner_height(height, &mut self.timers);
            self.deliver(notes);
        }
    }

    /// Move time forward by `by`, firing due timers in order.
    pub fn advance_by(&mut self, by: Duration) {
        let until = self.timers.now() + by;
        self.advance_to(until);
    }

    /// Move time forward to `until`, firing due timers in order.
    pub fn advance_to(&mut self, until: Duration) {
        while let Some(fired) = self.timers.pop_due(until) {
            let Some(page) = self.page.as_mut() else {
                trace!(handle = ?fired.handle, "Timer fired after unmount; ignoring");
                continue;
            };
            let notes = page.on_timer(fired, &mut self.timers);
            self.deliver(notes);
        }
        self.timers.advance_clock(until);
    }

    /// Drain notifications recorded since the last call.
    pub fn take_notifications(&mut self) -> Vec<PageNotification> {
        std::mem::take(&mut self.notifications)
    }

    fn deliver(&mut self, notes: Vec<PageNotification>) {
        for note in notes {
            let focus = note == PageNotification::FocusInput;
            self.notifications.push(note);

            // Focusing the input fires its focus event synchronously.
            if focus {
                let Some(page) = self.page.as_mut() else {
                    continue;
                };
                if !page.hero().is_focused() {
                    let follow_up = page.handle(SurfaceEvent::InputFocused, &mut self.timers);
                    self.notifications.extend(follow_up);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod tests;
