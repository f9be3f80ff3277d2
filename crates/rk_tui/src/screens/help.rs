//! Help screen implementation

use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::theme::Theme;

/// Render the help screen
pub fn render_help(f: &mut Frame, theme: &Theme) {
    let bindings: &[(&str, &str)] = &[
        ("a", "Alerts screen"),
        ("p", "Prepare screen"),
        ("c", "Communicate screen"),
        ("Tab", "Cycle screens"),
        ("?", "This help"),
        ("↑ ↓", "Move selection"),
        ("Space / Enter", "Toggle selected item"),
        ("s", "SOS (on Communicate)"),
        ("i", "Compose message (on Communicate)"),
        ("q / Ctrl-C", "Quit"),
    ];

    let mut lines = vec![Line::from("")];
    for (key, action) in bindings {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<16}", key),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(*action, Style::default().fg(theme.text)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  All state is in-memory and resets when the app exits.",
        Style::default().fg(theme.muted),
    )));

    let help = Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(
                " HELP ",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.muted)),
    );

    f.render_widget(help, f.area());
}
