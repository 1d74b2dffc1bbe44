//! Content area: maps the current path to a rendered view.
//!
//! Known paths render a concrete view over the sample fleet data. A path
//! under a known platform without a concrete view renders a placeholder,
//! and a path outside every platform renders the fallback screen. Every
//! path renders something.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::{Cell, Paragraph, Row, Table, Widget},
};

use kesi_app::AppState;
use kesi_core::fleet::{
    sample_ai_agents, sample_alarms, sample_business_metrics, sample_iot_devices,
    sample_video_devices, sample_visualization_projects, DeviceStatus,
};

use crate::theme::{icons::IconSet, palette, styles};

/// The main content view, selected by the current path.
pub struct ContentView<'a> {
    state: &'a AppState,
    icons: IconSet,
}

impl<'a> ContentView<'a> {
    pub fn new(state: &'a AppState, icons: IconSet) -> Self {
        Self { state, icons }
    }
}

impl Widget for ContentView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let path = self.state.path().to_string();
        let title = match self.state.active_entry() {
            Some(entry) => format!(" {} {} ", self.icons.menu_icon(entry.icon), entry.label),
            None => format!(" {path} "),
        };

        let block = styles::glass_block(true)
            .title(title)
            .style(Style::default().bg(palette::DEEPEST_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        match path.as_str() {
            "/iot/dashboard" => render_iot_dashboard(inner, buf),
            "/iot/devices" => render_iot_devices(inner, buf),
            "/iot/alarms" => render_alarms(inner, buf),
            "/business/dashboard" | "/business/data" | "/business/analysis" => {
                render_business_metrics(inner, buf)
            }
            "/video/dashboard" | "/video/devices" | "/video/gb28181" | "/video/streams" => {
                render_video_devices(inner, buf)
            }
            "/ai/agents" => render_ai_agents(inner, buf),
            "/visualization/projects" => render_projects(inner, buf),
            _ => {
                if self.state.active_platform().is_some() {
                    render_placeholder(&path, inner, buf);
                } else {
                    render_fallback(&path, inner, buf);
                }
            }
        }
    }
}

fn render_iot_dashboard(area: Rect, buf: &mut Buffer) {
    let devices = sample_iot_devices();
    let online = devices
        .iter()
        .filter(|d| d.status == DeviceStatus::Online)
        .count();
    let alarms = sample_alarms();
    let open_alarms = alarms.iter().filter(|a| !a.handled).count();

    let lines = vec![
        Line::default(),
        Line::from(vec![
            Span::styled("  Devices      ", styles::text_secondary()),
            Span::styled(format!("{}", devices.len()), styles::accent_bold()),
            Span::styled(format!("  ({online} online)"), styles::text_muted()),
        ]),
        Line::from(vec![
            Span::styled("  Open alarms  ", styles::text_secondary()),
            Span::styled(format!("{open_alarms}"), styles::accent_bold()),
        ]),
        Line::from(vec![
            Span::styled("  Alarms total ", styles::text_secondary()),
            Span::styled(format!("{}", alarms.len()), styles::accent_bold()),
        ]),
    ];
    Paragraph::new(Text::from(lines)).render(area, buf);
}

fn render_iot_devices(area: Rect, buf: &mut Buffer) {
    let devices = sample_iot_devices();
    let rows: Vec<Row> = devices
        .iter()
        .map(|device| {
            let (icon, style) = styles::device_status_indicator(device.status);
            Row::new(vec![
                Cell::from(Span::styled(icon, style)),
                Cell::from(Span::styled(device.name, styles::text_primary())),
                Cell::from(Span::styled(device.kind, styles::text_secondary())),
                Cell::from(Span::styled(device.location, styles::text_secondary())),
                Cell::from(Span::styled(device.status.label(), style)),
            ])
        })
        .collect();

    Table::new(
        rows,
        [
            Constraint::Length(2),
            Constraint::Min(24),
            Constraint::Length(12),
            Constraint::Length(14),
            Constraint::Length(8),
        ],
    )
    .header(table_header(&["", "Name", "Kind", "Location", "Status"]))
    .render(area, buf);
}

fn render_alarms(area: Rect, buf: &mut Buffer) {
    let alarms = sample_alarms();
    let rows: Vec<Row> = alarms
        .iter()
        .map(|alarm| {
            let level_style = styles::alarm_level_style(alarm.level);
            let handled = if alarm.handled { "handled" } else { "open" };
            Row::new(vec![
                Cell::from(Span::styled(alarm.level.label(), level_style)),
                Cell::from(Span::styled(alarm.device_name, styles::text_primary())),
                Cell::from(Span::styled(alarm.message, styles::text_secondary())),
                Cell::from(Span::styled(handled, styles::text_muted())),
                Cell::from(Span::styled(
                    alarm.time.format("%H:%M").to_string(),
                    styles::text_muted(),
                )),
            ])
        })
        .collect();

    Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Min(20),
            Constraint::Min(24),
            Constraint::Length(8),
            Constraint::Length(6),
        ],
    )
    .header(table_header(&["Level", "Device", "Message", "State", "Time"]))
    .render(area, buf);
}

fn render_business_metrics(area: Rect, buf: &mut Buffer) {
    let metrics = sample_business_metrics();
    let rows: Vec<Row> = metrics
        .iter()
        .map(|metric| {
            Row::new(vec![
                Cell::from(Span::styled(metric.name, styles::text_primary())),
                Cell::from(Span::styled(
                    format!("{:.1} {}", metric.value, metric.unit),
                    styles::accent(),
                )),
                Cell::from(Span::styled(metric.trend.arrow(), styles::text_secondary())),
            ])
        })
        .collect();

    Table::new(
        rows,
        [
            Constraint::Min(24),
            Constraint::Length(16),
            Constraint::Length(4),
        ],
    )
    .header(table_header(&["Metric", "Value", "Trend"]))
    .render(area, buf);
}

fn render_video_devices(area: Rect, buf: &mut Buffer) {
    let devices = sample_video_devices();
    let rows: Vec<Row> = devices
        .iter()
        .map(|device| {
            let (icon, style) = styles::device_status_indicator(device.status);
            let ai = if device.has_ai { "yes" } else { "no" };
            Row::new(vec![
                Cell::from(Span::styled(icon, style)),
                Cell::from(Span::styled(device.name, styles::text_primary())),
                Cell::from(Span::styled(device.ip, styles::text_secondary())),
                Cell::from(Span::styled(
                    format!("{}", device.channels),
                    styles::text_secondary(),
                )),
                Cell::from(Span::styled(ai, styles::text_muted())),
            ])
        })
        .collect();

    Table::new(
        rows,
        [
            Constraint::Length(2),
            Constraint::Min(16),
            Constraint::Length(16),
            Constraint::Length(9),
            Constraint::Length(4),
        ],
    )
    .header(table_header(&["", "Name", "Address", "Channels", "AI"]))
    .render(area, buf);
}

fn render_ai_agents(area: Rect, buf: &mut Buffer) {
    let agents = sample_ai_agents();
    let rows: Vec<Row> = agents
        .iter()
        .map(|agent| {
            let (icon, style) = styles::agent_status_indicator(agent.status);
            Row::new(vec![
                Cell::from(Span::styled(icon, style)),
                Cell::from(Span::styled(agent.name, styles::text_primary())),
                Cell::from(Span::styled(agent.kind, styles::text_secondary())),
                Cell::from(Span::styled(agent.status.label(), style)),
                Cell::from(Span::styled(agent.description, styles::text_muted())),
            ])
        })
        .collect();

    Table::new(
        rows,
        [
            Constraint::Length(2),
            Constraint::Min(18),
            Constraint::Length(12),
            Constraint::Length(9),
            Constraint::Min(24),
        ],
    )
    .header(table_header(&["", "Agent", "Kind", "State", "Description"]))
    .render(area, buf);
}

fn render_projects(area: Rect, buf: &mut Buffer) {
    let projects = sample_visualization_projects();
    let rows: Vec<Row> = projects
        .iter()
        .map(|project| {
            let published = if project.published {
                Span::styled("published", styles::accent())
            } else {
                Span::styled("draft", styles::text_muted())
            };
            Row::new(vec![
                Cell::from(Span::styled(project.name, styles::text_primary())),
                Cell::from(Span::styled(project.kind, styles::text_secondary())),
                Cell::from(published),
            ])
        })
        .collect();

    Table::new(
        rows,
        [
            Constraint::Min(24),
            Constraint::Length(14),
            Constraint::Length(10),
        ],
    )
    .header(table_header(&["Project", "Kind", "State"]))
    .render(area, buf);
}

fn render_placeholder(path: &str, area: Rect, buf: &mut Buffer) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            format!("  {path}"),
            styles::accent_bold(),
        )),
        Line::default(),
        Line::from(Span::styled(
            "  This view is not available yet.",
            styles::text_secondary(),
        )),
    ];
    Paragraph::new(Text::from(lines)).render(area, buf);
}

fn render_fallback(path: &str, area: Rect, buf: &mut Buffer) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            format!("  Nothing here: {path}"),
            styles::text_secondary(),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("  Press ", styles::text_muted()),
            Span::styled("[Tab]", styles::keybinding()),
            Span::styled(" to choose a platform.", styles::text_muted()),
        ]),
    ];
    Paragraph::new(Text::from(lines)).render(area, buf);
}

fn table_header(titles: &[&'static str]) -> Row<'static> {
    Row::new(
        titles
            .iter()
            .map(|t| Cell::from(Span::styled(*t, styles::text_muted())))
            .collect::<Vec<_>>(),
    )
    .bottom_margin(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use kesi_app::{IconMode, Message, Settings};
    use kesi_core::Registry;

    fn state_at(path: &str) -> AppState {
        let mut state = AppState::new(Registry::standard(), Settings::default(), 120, None);
        kesi_app::update(
            &mut state,
            Message::Navigate {
                path: path.to_string(),
            },
        );
        state
    }

    fn icons() -> IconSet {
        IconSet::new(IconMode::Unicode)
    }

    #[test]
    fn test_device_table_renders_rows() {
        let state = state_at("/iot/devices");
        let mut term = TestTerminal::new();
        term.render_widget(ContentView::new(&state, icons()), term.area());

        assert!(term.buffer_contains("Temperature Sensor 01"));
        assert!(term.buffer_contains("PLC Controller 02"));
        assert!(term.buffer_contains("Location"));
    }

    #[test]
    fn test_alarm_table_renders_levels() {
        let state = state_at("/iot/alarms");
        let mut term = TestTerminal::new();
        term.render_widget(ContentView::new(&state, icons()), term.area());

        assert!(term.buffer_contains("critical"));
        assert!(term.buffer_contains("Humidity out of range"));
    }

    #[test]
    fn test_dashboard_shows_counts() {
        let state = state_at("/iot/dashboard");
        let mut term = TestTerminal::new();
        term.render_widget(ContentView::new(&state, icons()), term.area());

        assert!(term.buffer_contains("Devices"));
        assert!(term.buffer_contains("Open alarms"));
    }

    #[test]
    fn test_business_metrics_view() {
        let state = state_at("/business/dashboard");
        let mut term = TestTerminal::new();
        term.render_widget(ContentView::new(&state, icons()), term.area());

        assert!(term.buffer_contains("Equipment efficiency"));
        assert!(term.buffer_contains("kWh"));
    }

    #[test]
    fn test_ai_agents_view() {
        let state = state_at("/ai/agents");
        let mut term = TestTerminal::new();
        term.render_widget(ContentView::new(&state, icons()), term.area());

        assert!(term.buffer_contains("Inspection Agent"));
        assert!(term.buffer_contains("running"));
    }

    #[test]
    fn test_placeholder_for_known_platform_without_view() {
        let state = state_at("/iot/models");
        let mut term = TestTerminal::new();
        term.render_widget(ContentView::new(&state, icons()), term.area());

        assert!(term.buffer_contains("not available yet"));
    }

    #[test]
    fn test_fallback_for_unknown_path() {
        let state = state_at("/nowhere/at/all");
        let mut term = TestTerminal::new();
        term.render_widget(ContentView::new(&state, icons()), term.area());

        assert!(term.buffer_contains("Nothing here: /nowhere/at/all"));
        assert!(term.buffer_contains("[Tab]"));
    }

    #[test]
    fn test_title_shows_entry_label() {
        let state = state_at("/video/streams");
        let mut term = TestTerminal::new();
        term.render_widget(ContentView::new(&state, icons()), term.area());

        assert!(term.buffer_contains("Streams"));
    }
}
