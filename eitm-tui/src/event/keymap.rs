//! Key binding configuration.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A single key binding.
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// Whether a key event matches this binding.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// Default key bindings.
pub struct DefaultKeymap;

impl DefaultKeymap {
    // Global
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const CLEAR: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // Form
    pub const SUBMIT: KeyBinding = KeyBinding::key(KeyCode::Enter);
    pub const NEWLINE: KeyBinding = KeyBinding::alt(KeyCode::Enter);
    pub const NEXT_FIELD: KeyBinding = KeyBinding::key(KeyCode::Tab);
}
