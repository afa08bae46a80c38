//! Abstract input key event, independent of terminal library.
//!
//! drcrop-app never sees crossterm types; the TUI converts its key events
//! into [`InputKey`] at the boundary.

/// Abstract input key event.
/// Converted from crossterm::event::KeyEvent at the TUI boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, Ctrl+u, ...)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,
    Home,
    End,

    // Action keys
    Enter,
    Esc,
    Tab,
    /// Shift+Tab (BackTab)
    BackTab,
    Backspace,
    Delete,

    /// Function key (F1-F12)
    F(u8),
}

impl InputKey {
    /// Character that should be appended to a focused text field, if any
    pub fn typed_char(&self) -> Option<char> {
        match self {
            InputKey::Char(c) => Some(*c),
            _ => None,
        }
    }
}
