//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
///
/// Bindings only apply while the search field is unfocused; a focused field
/// receives printable characters as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Page scrolling
    /// Scroll the page up by one row. Default: k/↑
    ScrollUp,
    /// Scroll the page down by one row. Default: j/↓
    ScrollDown,
    /// Scroll up by one screen. Default: Page Up
    PageUp,
    /// Scroll down by one screen. Default: Page Down
    PageDown,
    /// Jump back to the top of the page. Default: g/Home
    ScrollToTop,

    // Search affordance
    /// Move focus into the search field. Default: /
    FocusSearch,
    /// Click the search icon (expands or collapses compact search). Default: Tab
    ToggleExpand,
    /// Click the clear button. Default: Ctrl+u
    ClearSearch,

    // Page chrome
    /// Show or hide the external banner above the page. Default: b
    ToggleBanner,

    // Application
    /// Exit the application. Default: q
    Quit,
}
