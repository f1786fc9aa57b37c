//! Terminal-independent key input.
//!
//! The app crate never sees crossterm types; the TUI converts its key events
//! into [`InputKey`] at the boundary, which also lets handler tests drive
//! the editor with plain values.

/// A key press as seen by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character, including shifted ones
    Char(char),
    /// Character with Ctrl held
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,

    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
    Delete,
}

impl InputKey {
    /// Key types text into the edit buffer
    pub fn as_text(self) -> Option<char> {
        match self {
            InputKey::Char(c) => Some(c),
            _ => None,
        }
    }
}
