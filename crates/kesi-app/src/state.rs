//! Application state (Model in TEA pattern)
//!
//! Only three things are stored: the current path (plus its linear history),
//! the sidebar flag, and the quit flag. The active platform and active menu
//! entry are recomputed from the path on every read, so they can never go
//! stale.

use kesi_core::{redirect, resolve, MenuEntry, PlatformId, Registry, Resolution};

use crate::config::Settings;

/// Navigation shell state.
#[derive(Debug)]
pub struct AppState {
    /// Immutable platform/menu catalog, injected at construction.
    pub registry: Registry,

    /// Loaded settings (icon mode, viewport threshold, start path).
    pub settings: Settings,

    /// Current absolute route path.
    path: String,

    /// Linear navigation history; `history[history_index]` == `path`.
    history: Vec<String>,
    history_index: usize,

    /// Whether the sidebar shows full label rows (true) or icons only.
    /// Defaulted once from the viewport width at mount; only the user's
    /// toggle changes it afterwards.
    pub sidebar_open: bool,

    /// Highlighted sidebar row for keyboard navigation.
    pub sidebar_cursor: usize,

    /// Set when the user asked to quit; the run loop exits on the next turn.
    pub should_quit: bool,
}

impl AppState {
    /// Build the initial state.
    ///
    /// `viewport_width` is the terminal width at mount, used once to pick
    /// the sidebar default. `start_path` overrides the configured start
    /// path; both fall back to the registry's default landing path.
    pub fn new(
        registry: Registry,
        settings: Settings,
        viewport_width: u16,
        start_path: Option<&str>,
    ) -> Self {
        let sidebar_open = viewport_width >= settings.ui.narrow_viewport_cols;

        let requested = start_path
            .map(String::from)
            .or_else(|| settings.ui.start_path.clone())
            .unwrap_or_else(|| "/".to_string());
        let path = redirect(&registry, &requested).unwrap_or(requested);

        let mut state = Self {
            registry,
            settings,
            history: vec![path.clone()],
            history_index: 0,
            path,
            sidebar_open,
            sidebar_cursor: 0,
            should_quit: false,
        };
        state.sync_cursor();
        state
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Resolve the current path. Derived, never cached.
    pub fn resolution(&self) -> Resolution<'_> {
        resolve(&self.registry, &self.path)
    }

    pub fn active_platform(&self) -> Option<PlatformId> {
        self.resolution().platform
    }

    pub fn active_entry(&self) -> Option<&MenuEntry> {
        self.resolution().entry
    }

    /// Menu of the active platform; empty when no platform is active.
    pub fn active_menu(&self) -> &[MenuEntry] {
        match self.active_platform() {
            Some(id) => self.registry.menu_for(id),
            None => &[],
        }
    }

    /// Navigate to a path, recording it in the history.
    ///
    /// Root and platform-root paths are rewritten by the redirect rules
    /// first. Re-navigating to the current path is a no-op (idempotent).
    pub fn navigate(&mut self, path: impl Into<String>) {
        let requested = path.into();
        let target = redirect(&self.registry, &requested).unwrap_or(requested);

        if target != self.path {
            self.history.truncate(self.history_index + 1);
            self.history.push(target.clone());
            self.history_index = self.history.len() - 1;
            self.path = target;
        }
        self.sync_cursor();
    }

    /// External path change: step back in history. Re-resolves only, no
    /// forward navigation is recorded.
    pub fn history_back(&mut self) {
        if self.history_index > 0 {
            self.history_index -= 1;
            self.path = self.history[self.history_index].clone();
            self.sync_cursor();
        }
    }

    /// External path change: step forward in history.
    pub fn history_forward(&mut self) {
        if self.history_index + 1 < self.history.len() {
            self.history_index += 1;
            self.path = self.history[self.history_index].clone();
            self.sync_cursor();
        }
    }

    /// Flip the sidebar. Independent of platform state, never navigates.
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn cursor_up(&mut self) {
        self.sidebar_cursor = self.sidebar_cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        let len = self.active_menu().len();
        if self.sidebar_cursor + 1 < len {
            self.sidebar_cursor += 1;
        }
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Keep the sidebar cursor on the active entry after navigation, or on
    /// the first row when nothing matches exactly.
    fn sync_cursor(&mut self) {
        let index = match self.resolution().entry {
            Some(entry) => self
                .active_menu()
                .iter()
                .position(|e| e.path == entry.path)
                .unwrap_or(0),
            None => 0,
        };
        self.sidebar_cursor = index;
    }
}
