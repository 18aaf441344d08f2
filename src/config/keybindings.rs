//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to page actions.
///
/// Only consulted while the search field is unfocused. A focused field takes
/// printable characters as text, so the shell handles its keys directly.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };

        // Vim-style scrolling
        keys.bind(KeyCode::Char('j'), KeyModifiers::NONE, KeyAction::ScrollDown);
        keys.bind(KeyCode::Char('k'), KeyModifiers::NONE, KeyAction::ScrollUp);
        keys.bind(KeyCode::Char('g'), KeyModifiers::NONE, KeyAction::ScrollToTop);

        // Arrow key scrolling
        keys.bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::ScrollDown);
        keys.bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::ScrollUp);
        keys.bind(KeyCode::Home, KeyModifiers::NONE, KeyAction::ScrollToTop);

        // Page navigation
        keys.bind(KeyCode::PageDown, KeyModifiers::NONE, KeyAction::PageDown);
        keys.bind(KeyCode::PageUp, KeyModifiers::NONE, KeyAction::PageUp);
        keys.bind(KeyCode::Char('d'), KeyModifiers::CONTROL, KeyAction::PageDown);

        // Search affordance
        keys.bind(KeyCode::Char('/'), KeyModifiers::NONE, KeyAction::FocusSearch);
        keys.bind(KeyCode::Tab, KeyModifiers::NONE, KeyAction::ToggleExpand);
        keys.bind(KeyCode::Char('u'), KeyModifiers::CONTROL, KeyAction::ClearSearch);

        // Page chrome
        keys.bind(KeyCode::Char('b'), KeyModifiers::NONE, KeyAction::ToggleBanner);

        // Application controls
        keys.bind(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit);
        keys.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        keys
    }
}
