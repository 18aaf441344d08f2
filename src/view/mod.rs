//! TUI rendering and terminal management (impure shell)

pub mod constants;
pub mod content;
pub mod hero;
pub mod page;

pub use hero::{HeroBar, HeroBarLayout};
pub use page::{render_page, PageGeometry};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::{AppError, KeyAction, Px, TimeOfDay};
use crate::runtime::Runtime;
use crate::state::{PageOptions, SurfaceEvent};
use constants::{FALLBACK_BANNER_HEIGHT, IDLE_POLL};
use crossterm::{
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Position,
    Terminal,
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Shell settings resolved from config and CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellOptions {
    /// Fully resolved configuration.
    pub config: ResolvedConfig,
    /// Query present at startup (`--query`).
    pub initial_query: String,
    /// Fixed viewport width in pixels instead of one derived from columns (`--width`).
    pub fixed_width: Option<Px>,
    /// Bookmark source has items (`--bookmarks`).
    pub has_bookmarks: bool,
    /// Watch-history source has items (`--watching`).
    pub has_watching: bool,
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    runtime: Runtime,
    key_bindings: KeyBindings,
    config: ResolvedConfig,
    fixed_width: Option<Px>,
    scroll_rows: u16,
    banner_height: Px,
    /// Last rendered search bar regions (for mouse click detection)
    last_hero: Option<HeroBarLayout>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(options: ShellOptions) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(event::EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Self::with_terminal(terminal, options, TimeOfDay::now())
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits (q or Ctrl+C). Sleeps in `poll` until the
    /// next input event or the next timer deadline, whichever comes first.
    pub fn run(&mut self) -> Result<(), TuiError> {
        let started = Instant::now();
        self.draw()?;

        loop {
            let timeout = self
                .runtime
                .next_deadline()
                .map(|deadline| deadline.saturating_sub(started.elapsed()))
                .unwrap_or(IDLE_POLL);

            let ready = event::poll(timeout)?;
            // Fire due timers before the event so it lands at the right virtual time.
            self.advance_to(started.elapsed());

            if ready {
                let quit = match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                    Event::Mouse(mouse) => {
                        self.handle_mouse(mouse);
                        false
                    }
                    Event::Resize(width, _height) => {
                        self.handle_resize(width);
                        false
                    }
                    _ => false,
                };
                if quit {
                    return Ok(());
                }
            }

            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Mount the home page on an existing terminal.
    pub fn with_terminal(
        terminal: Terminal<B>,
        options: ShellOptions,
        title: TimeOfDay,
    ) -> Result<Self, TuiError> {
        let size = terminal.size()?;

        let mut app = Self {
            terminal,
            runtime: Runtime::new(),
            key_bindings: KeyBindings::default(),
            banner_height: options.config.banner_height,
            config: options.config,
            fixed_width: options.fixed_width,
            scroll_rows: 0,
            last_hero: None,
        };

        let (has_bookmarks, has_watching) = (options.has_bookmarks, options.has_watching);
        let viewport_width = app.viewport_width(size.width);
        info!(
            width = viewport_width,
            columns = size.width,
            "Mounting home page"
        );
        app.runtime.mount(PageOptions {
            timings: app.config.timings(),
            layout: app.config.layout(),
            viewport_width,
            banner_height: app.banner_height,
            initial_query: options.initial_query,
            title,
        });
        if let Some(page) = app.runtime.page_mut() {
            page.set_bookmarks_present(has_bookmarks);
            page.set_watching_present(has_watching);
        }
        app.report_scroll();

        Ok(app)
    }

    /// Viewport width in pixels for a terminal `columns` wide.
    fn viewport_width(&self, columns: u16) -> Px {
        self.fixed_width
            .unwrap_or_else(|| Px::from(columns).saturating_mul(self.config.px_per_column))
    }

    fn geometry(&self) -> PageGeometry {
        PageGeometry {
            px_per_row: self.config.px_per_row,
            scroll_rows: self.scroll_rows,
            banner_height: self.banner_height,
        }
    }

    fn field_focused(&self) -> bool {
        self.runtime
            .page()
            .is_some_and(|page| page.hero().is_focused())
    }

    fn dispatch(&mut self, event: SurfaceEvent) {
        self.runtime.dispatch(event);
        self.drain_notifications();
    }

    fn drain_notifications(&mut self) {
        for note in self.runtime.take_notifications() {
            debug!(?note, "Page notification");
        }
    }

    fn advance_to(&mut self, at: Duration) {
        self.runtime.advance_to(at);
        self.drain_notifications();
    }

    fn report_scroll(&mut self) {
        let holder_top = self.geometry().holder_top();
        self.runtime.scroll(holder_top);
        self.drain_notifications();
    }

    fn scroll_to(&mut self, rows: u16) {
        let max = self
            .runtime
            .page()
            .map(|page| page::document_height(page).saturating_sub(1))
            .unwrap_or(0);
        self.scroll_rows = rows.min(max);
        self.report_scroll();
    }

    fn scroll_by(&mut self, delta: i32) {
        let target = (i32::from(self.scroll_rows) + delta).clamp(0, i32::from(u16::MAX));
        self.scroll_to(u16::try_from(target).unwrap_or(0));
    }

    fn screen_rows(&self) -> u16 {
        let height = self.terminal.size().map(|size| size.height).unwrap_or(0);
        height.saturating_sub(self.geometry().banner_rows()).max(1)
    }

    fn toggle_banner(&mut self) {
        self.banner_height = if self.banner_height > 0 {
            0
        } else if self.config.banner_height > 0 {
            self.config.banner_height
        } else {
            FALLBACK_BANNER_HEIGHT
        };
        debug!(height = self.banner_height, "Banner toggled");
        self.runtime.set_banner_height(self.banner_height);
        self.report_scroll();
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even while typing.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.field_focused() {
            self.handle_field_key(key);
            return false;
        }

        match self.key_bindings.get(key) {
            Some(action) => self.apply_action(action),
            None => false,
        }
    }

    /// Keys while the search field has focus: text editing and field buttons.
    fn handle_field_key(&mut self, key: KeyEvent) {
        let Some(query) = self.runtime.page().map(|page| page.query().to_string()) else {
            return;
        };
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('u') if ctrl => self.dispatch(SurfaceEvent::ClearClicked),
            KeyCode::Char(ch) if !ctrl => {
                let mut value = query;
                value.push(ch);
                self.dispatch(SurfaceEvent::Input(value));
            }
            KeyCode::Backspace => {
                let mut value = query;
                if value.pop().is_some() {
                    self.dispatch(SurfaceEvent::Input(value));
                }
            }
            KeyCode::Tab => self.dispatch(SurfaceEvent::SearchIconClicked),
            KeyCode::Esc | KeyCode::Enter => self.dispatch(SurfaceEvent::InputBlurred),
            _ => {}
        }
    }

    /// Apply a bound action. Returns true if app should quit.
    fn apply_action(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::ScrollUp => self.scroll_by(-1),
            KeyAction::ScrollDown => self.scroll_by(1),
            KeyAction::PageUp => self.scroll_by(-i32::from(self.screen_rows())),
            KeyAction::PageDown => self.scroll_by(i32::from(self.screen_rows())),
            KeyAction::ScrollToTop => self.scroll_to(0),
            KeyAction::FocusSearch => self.dispatch(SurfaceEvent::SlashPressed),
            KeyAction::ToggleExpand => self.dispatch(SurfaceEvent::SearchIconClicked),
            KeyAction::ClearSearch => self.dispatch(SurfaceEvent::ClearClicked),
            KeyAction::ToggleBanner => self.toggle_banner(),
            KeyAction::Quit => return true,
        }
        false
    }

    /// Handle a single mouse event
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.scroll_by(1),
            MouseEventKind::ScrollUp => self.scroll_by(-1),
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_click(Position::new(mouse.column, mouse.row));
            }
            _ => {}
        }
    }

    fn handle_click(&mut self, at: Position) {
        let focused = self.field_focused();
        let Some(layout) = self.last_hero else {
            if focused {
                self.dispatch(SurfaceEvent::InputBlurred);
            }
            return;
        };

        if layout.clear.is_some_and(|clear| clear.contains(at)) {
            self.dispatch(SurfaceEvent::ClearClicked);
        } else if layout.input.is_some_and(|input| input.contains(at)) {
            if !focused {
                self.dispatch(SurfaceEvent::InputFocused);
            }
        } else if layout.icon.contains(at) {
            self.dispatch(SurfaceEvent::SearchIconClicked);
        } else if layout.browse.is_some_and(|browse| browse.contains(at)) {
            debug!("Browse requested");
        } else if focused {
            self.dispatch(SurfaceEvent::InputBlurred);
        }
    }

    fn handle_resize(&mut self, columns: u16) {
        let width = self.viewport_width(columns);
        debug!(columns, width, "Handling resize");
        self.runtime.resize(width);
        self.drain_notifications();
        // Re-clamp scroll; the document height may have changed.
        self.scroll_to(self.scroll_rows);
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let geometry = self.geometry();
        let runtime = &self.runtime;
        let mut hero = None;

        self.terminal.draw(|frame| {
            if let Some(page) = runtime.page() {
                hero = render_page(frame, page, &geometry);
            }
        })?;

        self.last_hero = hero;
        Ok(())
    }

    /// Unmount the page, releasing its timers and listeners.
    pub fn unmount(&mut self) -> bool {
        self.runtime.unmount()
    }
}

// ===== Test Helpers =====

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: Backend,
{
    pub(crate) fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent) {
        self.handle_mouse(mouse)
    }

    pub(crate) fn handle_resize_test(&mut self, columns: u16) {
        self.handle_resize(columns)
    }

    pub(crate) fn advance_by_test(&mut self, by: Duration) {
        let at = self.runtime.now() + by;
        self.advance_to(at);
    }

    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn last_hero(&self) -> Option<HeroBarLayout> {
        self.last_hero
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// on exit, including when the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_options(options: ShellOptions) -> Result<(), TuiError> {
    let mut app = TuiApp::new(options)?;

    let result = app.run();
    app.unmount();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
