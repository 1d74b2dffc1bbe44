//! Main update function - handles state transitions (TEA pattern)
//!
//! All transitions are synchronous, total functions over the state space:
//! nothing here can fail, block, or race.

use tracing::debug;

use crate::message::Message;
use crate::state::AppState;

use super::{keys::handle_key, UpdateResult};

/// Process a message and update state.
/// Returns an optional follow-up message.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectPlatform(platform) => {
            // Always land on the platform's first declared entry, never on a
            // remembered path. An empty menu means no navigation at all.
            let target = state
                .registry
                .menu_for(platform)
                .first()
                .map(|entry| entry.path.clone());
            if let Some(path) = target {
                debug!(%platform, %path, "platform selected");
                state.navigate(path);
            }
            UpdateResult::none()
        }

        Message::NextPlatform => match next_platform(state, 1) {
            Some(platform) => UpdateResult::message(Message::SelectPlatform(platform)),
            None => UpdateResult::none(),
        },

        Message::PreviousPlatform => match next_platform(state, -1) {
            Some(platform) => UpdateResult::message(Message::SelectPlatform(platform)),
            None => UpdateResult::none(),
        },

        Message::SelectEntry { index } => {
            let target = state.active_menu().get(index).map(|e| e.path.clone());
            if let Some(path) = target {
                state.navigate(path);
            }
            UpdateResult::none()
        }

        Message::Navigate { path } => {
            state.navigate(path);
            UpdateResult::none()
        }

        Message::HistoryBack => {
            state.history_back();
            UpdateResult::none()
        }

        Message::HistoryForward => {
            state.history_forward();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Sidebar Messages
        // ─────────────────────────────────────────────────────────
        Message::ToggleSidebar => {
            state.toggle_sidebar();
            UpdateResult::none()
        }

        Message::CursorUp => {
            state.cursor_up();
            UpdateResult::none()
        }

        Message::CursorDown => {
            state.cursor_down();
            UpdateResult::none()
        }

        Message::ActivateCursor => {
            if state.active_menu().is_empty() {
                UpdateResult::none()
            } else {
                UpdateResult::message(Message::SelectEntry {
                    index: state.sidebar_cursor,
                })
            }
        }
    }
}

/// Pick the platform `offset` steps away from the active one in display
/// order, wrapping around. Falls back to the first platform when no platform
/// is active (e.g., on an unknown path).
fn next_platform(state: &AppState, offset: isize) -> Option<kesi_core::PlatformId> {
    let platforms = state.registry.platforms();
    if platforms.is_empty() {
        return None;
    }

    let current = state
        .active_platform()
        .and_then(|id| platforms.iter().position(|p| p.id == id));

    let index = match current {
        Some(i) => (i as isize + offset).rem_euclid(platforms.len() as isize) as usize,
        None => 0,
    };
    Some(platforms[index].id)
}
