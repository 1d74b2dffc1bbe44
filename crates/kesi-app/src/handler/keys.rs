//! Key event to message mapping

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert a key event into a message.
///
/// The console has a single UI mode; every binding is available all the
/// time. Number keys address the active platform's menu directly, Tab
/// cycles platforms, and the arrow keys drive the sidebar cursor.
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Quit
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // ─────────────────────────────────────────────────────────
        // Platform switching
        // ─────────────────────────────────────────────────────────
        InputKey::Tab => Some(Message::NextPlatform),
        InputKey::BackTab => Some(Message::PreviousPlatform),

        // ─────────────────────────────────────────────────────────
        // Menu entry selection
        // ─────────────────────────────────────────────────────────
        // Number keys 1-9 select a menu entry by position
        InputKey::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            if index < state.active_menu().len() {
                Some(Message::SelectEntry { index })
            } else {
                None
            }
        }

        InputKey::Up | InputKey::Char('k') => Some(Message::CursorUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::CursorDown),
        InputKey::Enter => Some(Message::ActivateCursor),
        InputKey::Home => Some(Message::SelectEntry { index: 0 }),

        // ─────────────────────────────────────────────────────────
        // Sidebar and history
        // ─────────────────────────────────────────────────────────
        InputKey::Char('b') | InputKey::CharCtrl('b') => Some(Message::ToggleSidebar),
        InputKey::Char('[') | InputKey::Left => Some(Message::HistoryBack),
        InputKey::Char(']') | InputKey::Right => Some(Message::HistoryForward),

        _ => None,
    }
}
