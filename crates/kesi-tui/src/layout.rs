//! Screen layout definitions for the TUI
//!
//! Splits the screen into the header bar (brand + platform switcher), an
//! optional sidebar column, and the content area.

use ratatui::layout::{Constraint, Layout, Rect};

/// Sidebar width when expanded (icon + label rows)
pub const SIDEBAR_OPEN_WIDTH: u16 = 26;

/// Sidebar width when collapsed (icon rail)
pub const SIDEBAR_COLLAPSED_WIDTH: u16 = 6;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header bar (brand + platform switcher + shortcuts)
    pub header: Rect,

    /// Sidebar menu column; absent when no platform is active
    pub sidebar: Option<Rect>,

    /// Main content area (active view)
    pub content: Rect,
}

/// Create the main screen layout.
///
/// The sidebar column only exists while a platform is active; its width
/// depends on the open/collapsed flag.
pub fn create(area: Rect, has_platform: bool, sidebar_open: bool) -> ScreenAreas {
    let vertical = Layout::vertical([
        Constraint::Length(3), // Header (bordered)
        Constraint::Min(3),    // Body
    ])
    .split(area);

    let header = vertical[0];
    let body = vertical[1];

    if !has_platform {
        return ScreenAreas {
            header,
            sidebar: None,
            content: body,
        };
    }

    let sidebar_width = if sidebar_open {
        SIDEBAR_OPEN_WIDTH
    } else {
        SIDEBAR_COLLAPSED_WIDTH
    };

    let horizontal =
        Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(10)]).split(body);

    ScreenAreas {
        header,
        sidebar: Some(horizontal[0]),
        content: horizontal[1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_without_platform_has_no_sidebar() {
        let area = Rect::new(0, 0, 120, 40);
        let areas = create(area, false, true);

        assert!(areas.sidebar.is_none());
        assert_eq!(areas.header.height, 3);
        assert_eq!(areas.content.width, area.width);
        assert_eq!(areas.content.height, 37);
    }

    #[test]
    fn test_layout_with_open_sidebar() {
        let area = Rect::new(0, 0, 120, 40);
        let areas = create(area, true, true);

        let sidebar = areas.sidebar.unwrap();
        assert_eq!(sidebar.width, SIDEBAR_OPEN_WIDTH);
        assert_eq!(areas.content.width, 120 - SIDEBAR_OPEN_WIDTH);
    }

    #[test]
    fn test_layout_with_collapsed_sidebar() {
        let area = Rect::new(0, 0, 120, 40);
        let areas = create(area, true, false);

        let sidebar = areas.sidebar.unwrap();
        assert_eq!(sidebar.width, SIDEBAR_COLLAPSED_WIDTH);
        assert_eq!(areas.content.width, 120 - SIDEBAR_COLLAPSED_WIDTH);
    }

    #[test]
    fn test_layout_areas_contiguous() {
        let area = Rect::new(0, 0, 100, 30);
        let areas = create(area, true, true);

        let sidebar = areas.sidebar.unwrap();
        assert_eq!(areas.header.height + sidebar.height, area.height);
        assert_eq!(sidebar.width + areas.content.width, area.width);
        assert_eq!(areas.content.y, areas.header.height);
    }
}
