//! Sidebar menu widget
//!
//! Renders the active platform's ordered menu. Open mode shows numbered
//! icon + label rows; collapsed mode shows an icon rail. The entry whose
//! path exactly equals the current path is highlighted -- deeper sub-routes
//! highlight nothing.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use kesi_app::AppState;

use crate::theme::{icons::IconSet, palette, styles};

/// Collapsible menu for the active platform
pub struct Sidebar<'a> {
    state: &'a AppState,
    icons: IconSet,
}

impl<'a> Sidebar<'a> {
    pub fn new(state: &'a AppState, icons: IconSet) -> Self {
        Self { state, icons }
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(platform_id) = self.state.active_platform() else {
            return;
        };

        let open = self.state.sidebar_open;
        let title = if open {
            let name = self
                .state
                .registry
                .platform(platform_id)
                .map(|p| p.name.as_str())
                .unwrap_or_else(|| platform_id.as_str());
            format!(" {} {} ", name, self.icons.chevron_left())
        } else {
            format!(" {} ", self.icons.chevron_right())
        };

        let block = styles::glass_block(false)
            .title(title)
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let active_path = self.state.active_entry().map(|e| e.path.as_str());

        for (i, entry) in self
            .state
            .active_menu()
            .iter()
            .enumerate()
            .take(inner.height as usize)
        {
            let is_active = active_path == Some(entry.path.as_str());
            let is_cursor = i == self.state.sidebar_cursor;

            let style = if is_cursor {
                styles::focused_selected()
            } else if is_active {
                styles::accent_bold()
            } else {
                styles::text_secondary()
            };

            let icon = self.icons.menu_icon(entry.icon);
            let line = if open {
                Line::from(vec![
                    Span::styled(format!(" {} ", i + 1), styles::text_muted()),
                    Span::styled(format!("{} {}", icon, entry.label), style),
                ])
            } else {
                Line::from(Span::styled(format!("  {icon}"), style))
            };

            buf.set_line(inner.x, inner.y + i as u16, &line, inner.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use kesi_app::{IconMode, Message, Settings};
    use kesi_core::Registry;

    fn state() -> AppState {
        AppState::new(Registry::standard(), Settings::default(), 120, None)
    }

    fn icons() -> IconSet {
        IconSet::new(IconMode::Unicode)
    }

    fn dispatch(state: &mut AppState, message: Message) {
        let mut next = Some(message);
        while let Some(msg) = next.take() {
            next = kesi_app::update(state, msg).message;
        }
    }

    #[test]
    fn test_sidebar_lists_menu_entries() {
        let state = state();
        let mut term = TestTerminal::new();
        term.render_widget(Sidebar::new(&state, icons()), term.area());

        for label in ["Dashboard", "Devices", "Alarms", "Data Push"] {
            assert!(term.buffer_contains(label), "missing entry {label}");
        }
    }

    #[test]
    fn test_sidebar_title_shows_platform_name() {
        let mut state = state();
        dispatch(
            &mut state,
            Message::Navigate {
                path: "/video/streams".into(),
            },
        );
        let mut term = TestTerminal::new();
        term.render_widget(Sidebar::new(&state, icons()), term.area());

        assert!(term.buffer_contains("Video"));
        assert!(term.buffer_contains("Streams"));
    }

    #[test]
    fn test_collapsed_sidebar_hides_labels() {
        let mut state = state();
        dispatch(&mut state, Message::ToggleSidebar);
        let mut term = TestTerminal::new();
        let area = Rect::new(0, 0, crate::layout::SIDEBAR_COLLAPSED_WIDTH, 20);
        term.render_widget(Sidebar::new(&state, icons()), area);

        assert!(!term.buffer_contains("Dashboard"));
    }

    #[test]
    fn test_sidebar_absent_without_platform() {
        let mut state = state();
        dispatch(
            &mut state,
            Message::Navigate {
                path: "/unknown/foo".into(),
            },
        );
        let mut term = TestTerminal::new();
        term.render_widget(Sidebar::new(&state, icons()), term.area());

        // Nothing rendered at all, not even a border
        assert_eq!(term.content().trim(), "");
    }

    #[test]
    fn test_sidebar_renders_entry_numbers() {
        let state = state();
        let mut term = TestTerminal::new();
        term.render_widget(Sidebar::new(&state, icons()), term.area());

        assert!(term.buffer_contains(" 1 "));
        assert!(term.buffer_contains(" 8 "));
    }
}
