//! Semantic style builders for the console theme.

use kesi_core::{AgentStatus, AlarmLevel, DeviceStatus};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// "Black on Cyan" - used for the selected platform tab and the sidebar
/// cursor row
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

// --- Status indicator mappings ---

/// Indicator for a device's connectivity state.
///
/// Returns `(icon_char, Style)`.
pub fn device_status_indicator(status: DeviceStatus) -> (&'static str, Style) {
    match status {
        DeviceStatus::Online => (
            "●",
            Style::default()
                .fg(palette::STATUS_GREEN)
                .add_modifier(Modifier::BOLD),
        ),
        DeviceStatus::Offline => ("○", Style::default().fg(palette::TEXT_MUTED)),
        DeviceStatus::Warning => (
            "⚠",
            Style::default()
                .fg(palette::STATUS_YELLOW)
                .add_modifier(Modifier::BOLD),
        ),
    }
}

/// Style for an alarm severity label.
pub fn alarm_level_style(level: AlarmLevel) -> Style {
    match level {
        AlarmLevel::Info => Style::default().fg(palette::STATUS_BLUE),
        AlarmLevel::Warning => Style::default().fg(palette::STATUS_YELLOW),
        AlarmLevel::Critical => Style::default()
            .fg(palette::STATUS_RED)
            .add_modifier(Modifier::BOLD),
    }
}

/// Indicator for an AI agent's run state.
pub fn agent_status_indicator(status: AgentStatus) -> (&'static str, Style) {
    match status {
        AgentStatus::Running => ("●", Style::default().fg(palette::STATUS_GREEN)),
        AgentStatus::Stopped => ("○", Style::default().fg(palette::TEXT_MUTED)),
        AgentStatus::Error => ("✗", Style::default().fg(palette::STATUS_RED)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_styles_have_correct_colors() {
        assert_eq!(text_primary().fg, Some(palette::TEXT_PRIMARY));
        assert_eq!(text_secondary().fg, Some(palette::TEXT_SECONDARY));
        assert_eq!(text_muted().fg, Some(palette::TEXT_MUTED));
    }

    #[test]
    fn test_border_styles_have_correct_colors() {
        assert_eq!(border_inactive().fg, Some(palette::BORDER_DIM));
        assert_eq!(border_active().fg, Some(palette::BORDER_ACTIVE));
    }

    #[test]
    fn test_accent_bold_has_modifier() {
        let style = accent_bold();
        assert_eq!(style.fg, Some(palette::ACCENT));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_focused_selected_uses_black_on_cyan() {
        let style = focused_selected();
        assert_eq!(style.fg, Some(palette::CONTRAST_FG));
        assert_eq!(style.bg, Some(palette::ACCENT));
    }

    #[test]
    fn test_device_status_indicators() {
        let (icon, style) = device_status_indicator(DeviceStatus::Online);
        assert_eq!(icon, "●");
        assert_eq!(style.fg, Some(palette::STATUS_GREEN));

        let (icon, _) = device_status_indicator(DeviceStatus::Offline);
        assert_eq!(icon, "○");

        let (icon, style) = device_status_indicator(DeviceStatus::Warning);
        assert_eq!(icon, "⚠");
        assert_eq!(style.fg, Some(palette::STATUS_YELLOW));
    }

    #[test]
    fn test_alarm_level_styles() {
        assert_eq!(
            alarm_level_style(AlarmLevel::Critical).fg,
            Some(palette::STATUS_RED)
        );
        assert_eq!(
            alarm_level_style(AlarmLevel::Info).fg,
            Some(palette::STATUS_BLUE)
        );
    }

    #[test]
    fn test_agent_status_indicators() {
        let (icon, _) = agent_status_indicator(AgentStatus::Error);
        assert_eq!(icon, "✗");
        let (icon, _) = agent_status_indicator(AgentStatus::Running);
        assert_eq!(icon, "●");
    }
}
