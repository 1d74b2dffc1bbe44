//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use kesi_core::PlatformId;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic redraws
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Switch to a platform; lands on its first menu entry (no-op when the
    /// platform has an empty menu)
    SelectPlatform(PlatformId),

    /// Cycle to the next platform in display order
    NextPlatform,

    /// Cycle to the previous platform in display order
    PreviousPlatform,

    /// Select the active platform's menu entry at the given index
    SelectEntry { index: usize },

    /// Navigate to an explicit path
    Navigate { path: String },

    /// External path change (history back)
    HistoryBack,

    /// External path change (history forward)
    HistoryForward,

    // ─────────────────────────────────────────────────────────
    // Sidebar Messages
    // ─────────────────────────────────────────────────────────
    /// Collapse/expand the sidebar; never affects navigation
    ToggleSidebar,

    /// Move the sidebar cursor up one entry
    CursorUp,

    /// Move the sidebar cursor down one entry
    CursorDown,

    /// Navigate to the entry under the sidebar cursor
    ActivateCursor,
}
