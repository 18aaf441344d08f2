//! Home page shell: owns the query and decides which content region to show.
//!
//! The page is the owner the hero region reports to. Field changes update the
//! query, which feeds the search tracker; sticky transitions toggle the page
//! background. Landing content availability comes from external data sources.

use crate::model::{LayoutConstants, Px, TimeOfDay, Timings};
use crate::runtime::{EventSource, Fired, Listener, TimerQueue, TimerTag};
use crate::state::expand_focus::FieldEffect;
use crate::state::hero::{HeroEffect, HeroSurface, HeroView, SurfaceEvent};
use crate::state::search_status::{SearchStatus, SearchTracker};
use tracing::{debug, trace};

/// Everything needed to mount the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    /// Timer delays.
    pub timings: Timings,
    /// Breakpoints and sticky offsets.
    pub layout: LayoutConstants,
    /// Viewport width at mount.
    pub viewport_width: Px,
    /// External banner height at mount.
    pub banner_height: Px,
    /// Query present at mount (for example from the address bar).
    pub initial_query: String,
    /// Hero title period.
    pub title: TimeOfDay,
}

/// Content region below the hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentRegion<'a> {
    /// Debounce window open.
    LoadingPlaceholder,
    /// Results for the query.
    Results {
        /// Query to render results for.
        query: &'a str,
    },
    /// Default landing content.
    Landing {
        /// Neither bookmarks nor watch history has items.
        show_empty_hint: bool,
    },
}

/// Observable page-level notifications, in the order they happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageNotification {
    /// The query changed.
    QueryChanged {
        /// New query.
        value: String,
        /// Debounce was bypassed.
        force: bool,
    },
    /// The field reported loss of focus.
    UnFocus(Option<String>),
    /// The search status changed.
    StatusChanged(SearchStatus),
    /// The hero region stuck or unstuck.
    StickyChanged(bool),
    /// The text input should take focus.
    FocusInput,
}

/// Mounted home page.
#[derive(Debug)]
pub struct HomePage {
    query: String,
    search: SearchTracker,
    hero: HeroSurface,
    show_background: bool,
    has_bookmarks: bool,
    has_watching: bool,
    title: TimeOfDay,
}

impl HomePage {
    /// Mount the page and its hero region.
    pub fn mount(
        resize: &EventSource<Listener>,
        scroll: &EventSource<Listener>,
        options: PageOptions,
    ) -> Self {
        let hero = HeroSurface::mount(
            resize,
            scroll,
            options.layout,
            options.timings,
            options.viewport_width,
            options.banner_height,
        );

        debug!(
            width = options.viewport_width,
            query = %options.initial_query,
            "Home page mounted"
        );

        Self {
            search: SearchTracker::new(options.initial_query.clone(), options.timings.debounce),
            query: options.initial_query,
            hero,
            show_background: false,
            has_bookmarks: false,
            has_watching: false,
            title: options.title,
        }
    }

    /// Raw query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Committed (debounced) query.
    pub fn debounced_query(&self) -> &str {
        self.search.debounced()
    }

    /// Current search status.
    pub fn status(&self) -> &SearchStatus {
        self.search.status()
    }

    /// `query != ""`.
    pub fn searching(&self) -> bool {
        self.search.status().searching()
    }

    /// Debounce window open for the current query.
    pub fn loading(&self) -> bool {
        self.search.status().loading()
    }

    /// Whether the page draws a background behind the stuck hero.
    pub fn show_background(&self) -> bool {
        self.show_background
    }

    /// Hero title period.
    pub fn title(&self) -> TimeOfDay {
        self.title
    }

    /// Hero region (read-only).
    pub fn hero(&self) -> &HeroSurface {
        &self.hero
    }

    /// Render snapshot of the hero region.
    pub fn hero_view(&self) -> HeroView {
        self.hero.view(&self.query)
    }

    /// Region to render below the hero.
    pub fn content(&self) -> ContentRegion<'_> {
        let status = self.search.status();
        if status.loading() {
            ContentRegion::LoadingPlaceholder
        } else if status.searching() {
            ContentRegion::Results { query: &self.query }
        } else {
            ContentRegion::Landing {
                show_empty_hint: !(self.has_bookmarks || self.has_watching),
            }
        }
    }

    /// Bookmark source reported whether it has items.
    pub fn set_bookmarks_present(&mut self, present: bool) {
        self.has_bookmarks = present;
    }

    /// Watch-history source reported whether it has items.
    pub fn set_watching_present(&mut self, present: bool) {
        self.has_watching = present;
    }

    /// Field event from the hero region.
    pub fn handle(
        &mut self,
        event: SurfaceEvent,
        timers: &mut TimerQueue<TimerTag>,
    ) -> Vec<PageNotification> {
        let effects = self.hero.handle(event, timers);
        self.apply(effects, timers)
    }

    /// Resize notification routed from the resize source.
    pub fn on_resize(
        &mut self,
        width: Px,
        timers: &mut TimerQueue<TimerTag>,
    ) -> Vec<PageNotification> {
        let effects = self.hero.on_resize(width);
        self.apply(effects, timers)
    }

    /// Scroll notification routed from the scroll source.
    pub fn on_scroll(
        &mut self,
        holder_top: i32,
        timers: &mut TimerQueue<TimerTag>,
    ) -> Vec<PageNotification> {
        let effects = self.hero.on_scroll(holder_top);
        self.apply(effects, timers)
    }

    /// External banner height changed.
    pub fn set_banner_height(
        &mut self,
        height: Px,
        timers: &mut TimerQueue<TimerTag>,
    ) -> Vec<PageNotification> {
        let effects = self.hero.set_banner_height(height);
        self.apply(effects, timers)
    }

    /// Route a fired timer to whichever component owns it.
    pub fn on_timer(
        &mut self,
        fired: Fired<TimerTag>,
        timers: &mut TimerQueue<TimerTag>,
    ) -> Vec<PageNotification> {
        match fired.payload {
            TimerTag::Debounce => self
                .search
                .on_timer(fired.handle)
                .map(PageNotification::StatusChanged)
                .into_iter()
                .collect(),
            TimerTag::FocusHandOff => {
                let effects = self.hero.on_timer(fired.handle);
                self.apply(effects, timers)
            }
        }
    }

    /// Cancel every pending timer. Listeners are released as `self` drops.
    pub fn teardown(mut self, timers: &mut TimerQueue<TimerTag>) {
        self.search.teardown(timers);
        self.hero.teardown(timers);
        trace!("Home page torn down");
    }

    fn apply(
        &mut self,
        effects: Vec<HeroEffect>,
        timers: &mut TimerQueue<TimerTag>,
    ) -> Vec<PageNotification> {
        let mut notes = Vec::new();
        for effect in effects {
            match effect {
                HeroEffect::Field(FieldEffect::Change { value, force }) => {
                    self.set_query(value, force, timers, &mut notes);
                }
                HeroEffect::Field(FieldEffect::UnFocus(replacement)) => {
                    notes.push(PageNotification::UnFocus(replacement.clone()));
                    if let Some(value) = replacement {
                        self.set_query(value, true, timers, &mut notes);
                    }
                }
                HeroEffect::Field(FieldEffect::FocusInput) => {
                    notes.push(PageNotification::FocusInput);
                }
                HeroEffect::SetSticky(sticky) => {
                    self.show_background = sticky;
                    notes.push(PageNotification::StickyChanged(sticky));
                }
            }
        }
        notes
    }

    fn set_query(
        &mut self,
        value: String,
        force: bool,
        timers: &mut TimerQueue<TimerTag>,
        notes: &mut Vec<PageNotification>,
    ) {
        if value == self.query && !force {
            return;
        }

        let status = self
            .search
            .on_query(&value, force, timers, TimerTag::Debounce);
        self.query = value.clone();

        notes.push(PageNotification::QueryChanged { value, force });
        notes.extend(status.map(PageNotification::StatusChanged));
    }
}

#[cfg(test)]
#[path = "page_tests.rs"]
mod tests;
