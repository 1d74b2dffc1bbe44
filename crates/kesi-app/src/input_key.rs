//! Abstract input key event, independent of terminal library.
//!
//! Keyboard input is converted from `crossterm::event::KeyEvent` at the TUI
//! boundary, keeping this crate free of terminal-specific types.

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+b, Ctrl+c, etc.)
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
    /// Shift+Tab
    BackTab,
    Backspace,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_key_equality() {
        assert_eq!(InputKey::Char('a'), InputKey::Char('a'));
        assert_ne!(InputKey::Char('a'), InputKey::CharCtrl('a'));
        assert_ne!(InputKey::Tab, InputKey::BackTab);
    }

    #[test]
    fn test_input_key_is_copy() {
        let key = InputKey::Enter;
        let copy = key;
        assert_eq!(key, copy);
    }
}
