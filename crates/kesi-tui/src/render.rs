//! Main render/view function (View in TEA pattern)

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use kesi_app::AppState;

use crate::theme::{icons::IconSet, palette};
use crate::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// Pure rendering over the application state; never modifies it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(
        area,
        state.active_platform().is_some(),
        state.sidebar_open,
    );

    let icons = IconSet::new(state.settings.ui.icons);

    frame.render_widget(widgets::MainHeader::new(state, icons), areas.header);

    if let Some(sidebar_area) = areas.sidebar {
        frame.render_widget(widgets::Sidebar::new(state, icons), sidebar_area);
    }

    frame.render_widget(widgets::ContentView::new(state, icons), areas.content);
}
