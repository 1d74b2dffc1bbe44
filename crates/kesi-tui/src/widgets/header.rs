//! Header bar widget
//!
//! Renders the brand, the platform switcher (highlighting the active
//! platform), and the global shortcut hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use kesi_app::AppState;

use crate::theme::{icons::IconSet, palette, styles};

/// Main header with brand and platform switcher
pub struct MainHeader<'a> {
    state: &'a AppState,
    icons: IconSet,
}

impl<'a> MainHeader<'a> {
    pub fn new(state: &'a AppState, icons: IconSet) -> Self {
        Self { state, icons }
    }

    fn switcher_line(&self) -> Line<'static> {
        let active = self.state.active_platform();

        let mut spans = vec![
            Span::raw(" "),
            Span::styled("KESI", styles::accent_bold()),
            Span::raw("  "),
        ];

        for platform in self.state.registry.platforms() {
            let selected = active == Some(platform.id);
            let style = if selected {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(
                format!(
                    " {} {} ",
                    self.icons.menu_icon(platform.icon),
                    platform.name
                ),
                style,
            ));
            spans.push(Span::raw(" "));
        }

        Line::from(spans)
    }

    fn shortcuts_line(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled("[", styles::text_muted()),
            Span::styled("Tab", styles::keybinding()),
            Span::styled("] Platform  ", styles::text_muted()),
            Span::styled("[", styles::text_muted()),
            Span::styled("b", styles::keybinding()),
            Span::styled("] Sidebar  ", styles::text_muted()),
            Span::styled("[", styles::text_muted()),
            Span::styled("q", styles::keybinding()),
            Span::styled("] Quit ", styles::text_muted()),
        ])
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let switcher = self.switcher_line();
        let switcher_width = switcher.width() as u16;
        buf.set_line(inner.x, inner.y, &switcher, inner.width);

        // Right-align the shortcut hints when they fit
        let shortcuts = self.shortcuts_line();
        let shortcuts_width = shortcuts.width() as u16;
        if switcher_width + shortcuts_width + 2 <= inner.width {
            let x = inner.x + inner.width - shortcuts_width;
            buf.set_line(x, inner.y, &shortcuts, shortcuts_width);
        }
    }
}
