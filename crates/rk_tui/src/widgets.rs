//! Reusable widgets for the TUI
//!
//! Common UI components used across multiple screens, plus the glyph
//! lookup tables for enum-tagged data.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use rk_alert::{HazardKind, Severity};
use rk_comms::MessageKind;
use rk_prepare::ResourceIcon;

use crate::theme::Theme;

/// Render an online/offline indicator
pub fn status_indicator(online: bool, theme: &Theme) -> Line<'static> {
    let color = theme.connectivity_color(online);
    let label = if online { "Online" } else { "Offline" };
    Line::from(vec![
        Span::styled("● ", Style::default().fg(color)),
        Span::styled(label, Style::default().fg(color)),
    ])
}

/// Render a severity indicator glyph
pub fn severity_indicator(severity: Severity, theme: &Theme) -> (Span<'static>, ratatui::style::Color) {
    let color = theme.severity_color(severity);
    let glyph = match severity {
        Severity::Critical | Severity::High => "!",
        Severity::Medium => "⚠",
        Severity::Low => "·",
    };
    (Span::styled(glyph, Style::default().fg(color)), color)
}

/// Glyph for a hazard kind
pub fn hazard_glyph(kind: HazardKind) -> &'static str {
    match kind {
        HazardKind::Earthquake => "⌁",
        HazardKind::Flood => "≋",
        HazardKind::Fire => "♨",
        HazardKind::Storm => "☈",
        HazardKind::Other => "⚠",
    }
}

/// Glyph for a resource icon tag
pub fn resource_glyph(icon: ResourceIcon) -> &'static str {
    match icon {
        ResourceIcon::Document => "▤",
        ResourceIcon::Map => "⌖",
        ResourceIcon::Phone => "✆",
        ResourceIcon::People => "⚇",
    }
}

/// Glyph for a message kind
pub fn message_glyph(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Emergency => "⚠",
        MessageKind::Response => "✓",
        MessageKind::Status => "ℹ",
        MessageKind::Info => "·",
    }
}

/// Format bytes to human readable string
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1}GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1}MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1}KB", bytes as f64 / KB as f64)
    } else {
        format!("{}B", bytes)
    }
}

/// Format an age in seconds to a relative label
pub fn format_age(secs: u64) -> String {
    if secs < 60 {
        "just now".to_string()
    } else if secs < 3600 {
        format!("{}m ago", secs / 60)
    } else if secs < 86400 {
        format!("{}h ago", secs / 3600)
    } else {
        format!("{}d ago", secs / 86400)
    }
}

/// Centered sub-rectangle, sized as percentages of the outer area
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Render a modal confirmation dialog over the current screen
pub fn confirm_dialog(f: &mut Frame, title: &str, body: &str, theme: &Theme) {
    let area = centered_rect(60, 30, f.area());
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(body.to_string(), Style::default().fg(theme.text))),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(theme.accent)),
            Span::styled(" Confirm   ", Style::default().fg(theme.muted)),
            Span::styled("[Esc]", Style::default().fg(theme.accent)),
            Span::styled(" Cancel", Style::default().fg(theme.muted)),
        ]),
    ];

    let dialog = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {} ", title),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent)),
        )
        .style(Style::default().bg(theme.bg_secondary));

    f.render_widget(dialog, area);
}

/// Build the standard footer line from key/action pairs
pub fn footer_line(shortcuts: &[(&'static str, &'static str)], theme: &Theme) -> Line<'static> {
    let spans: Vec<Span> = shortcuts
        .iter()
        .flat_map(|(key, action)| {
            vec![
                Span::styled(*key, Style::default().fg(theme.accent)),
                Span::styled(*action, Style::default().fg(theme.muted)),
                Span::raw(" "),
            ]
        })
        .collect();
    Line::from(spans)
}
