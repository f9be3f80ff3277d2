//! Communicate screen implementation
//!
//! Mesh status header, the SOS control, the community message log, and the
//! compose row with quick actions.

use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use rk_comms::{ConversationLog, MeshStatus, QuickAction, SosController, DRAFT_MAX_CHARS};

use crate::theme::Theme;
use crate::widgets::{format_age, message_glyph};

/// State backing the communicate screen
#[derive(Debug, Clone)]
pub struct CommsState {
    pub log: ConversationLog,
    pub sos: SosController,
    pub mesh: MeshStatus,
    pub composing: bool,
}

impl CommsState {
    pub fn new() -> Self {
        Self {
            log: ConversationLog::demo(),
            sos: SosController::new(),
            mesh: MeshStatus::demo(),
            composing: false,
        }
    }

    /// Keys handled while the screen itself has focus
    ///
    /// Compose-mode and SOS-prompt input is captured earlier, by the app
    /// dispatcher.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('s') => {
                self.sos.press();
            }
            KeyCode::Char('i') => self.composing = true,
            KeyCode::Char('1') => self.log.set_draft(QuickAction::ImSafe.preset()),
            KeyCode::Char('2') => self.log.set_draft(QuickAction::NeedHelp.preset()),
            KeyCode::Char('3') => self.log.set_draft(QuickAction::HazardReport.preset()),
            _ => {}
        }
    }
}

impl Default for CommsState {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the communicate screen
pub fn render_communicate(f: &mut Frame, state: &CommsState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header with mesh status
            Constraint::Length(6), // SOS section
            Constraint::Min(8),    // Messages
            Constraint::Length(3), // Compose input
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    render_header(f, chunks[0], state, theme);
    render_sos(f, chunks[1], state, theme);
    render_messages(f, chunks[2], state, theme);
    render_compose(f, chunks[3], state, theme);
    render_footer(f, chunks[4], state, theme);
}

fn render_header(f: &mut Frame, area: Rect, state: &CommsState, theme: &Theme) {
    let title = Line::from(vec![
        Span::styled(
            "  E M E R G E N C Y   C O M M U N I C A T I O N  ",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            state.mesh.status_label(),
            Style::default().fg(theme.connectivity_color(state.mesh.online)),
        ),
    ]);

    let mesh_line = Line::from(vec![
        Span::styled("  ᛒ ", Style::default().fg(theme.mesh)),
        Span::styled(state.mesh.summary(), Style::default().fg(theme.mesh)),
        Span::raw("   "),
        Span::styled(state.mesh.range_hint(), Style::default().fg(theme.muted)),
    ]);

    let header = Paragraph::new(vec![title, mesh_line])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.muted)),
        )
        .style(Style::default().bg(theme.bg_secondary));

    f.render_widget(header, area);
}

fn render_sos(f: &mut Frame, area: Rect, state: &CommsState, theme: &Theme) {
    let active = state.sos.is_active();

    let button_style = if active {
        Style::default()
            .fg(theme.text)
            .bg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD)
    };

    let mut lines = vec![Line::from(vec![
        Span::raw("  "),
        Span::styled(if active { "⚡ " } else { "⚠ " }, button_style),
        Span::styled(format!(" {} ", state.sos.button_label()), button_style),
        Span::styled("  [s]", Style::default().fg(theme.muted)),
    ])];

    if let Some(status) = state.sos.status_line() {
        lines.push(Line::from(vec![
            Span::styled("  ● ", Style::default().fg(theme.accent)),
            Span::styled(status, Style::default().fg(theme.text)),
        ]));
    }
    if let Some(hint) = state.sos.hint() {
        lines.push(Line::from(Span::styled(
            format!("  {}", hint),
            Style::default().fg(theme.muted),
        )));
    }
    lines.push(Line::from(Span::styled(
        "  SOS broadcasts your location to all nearby devices",
        Style::default().fg(theme.warning),
    )));

    let sos = Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(
                " SOS ",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if active { theme.accent } else { theme.muted })),
    );

    f.render_widget(sos, area);
}

fn render_messages(f: &mut Frame, area: Rect, state: &CommsState, theme: &Theme) {
    let now = Utc::now();

    let items: Vec<ListItem> = if state.log.messages().is_empty() {
        vec![ListItem::new(Span::styled(
            "  No community updates yet",
            Style::default().fg(theme.muted),
        ))]
    } else {
        state
            .log
            .messages()
            .iter()
            .flat_map(|msg| {
                let color = theme.message_color(msg.kind);
                let sender_color = if msg.is_own { theme.accent } else { theme.text };
                let age_secs = (now - msg.sent_at).num_seconds().max(0) as u64;

                let mut sender_line = vec![
                    Span::raw("  "),
                    Span::styled(message_glyph(msg.kind), Style::default().fg(color)),
                    Span::raw(" "),
                    Span::styled(
                        msg.sender.clone(),
                        Style::default()
                            .fg(sender_color)
                            .add_modifier(Modifier::BOLD),
                    ),
                ];
                if msg.is_verified {
                    sender_line.push(Span::styled(" ✓", Style::default().fg(theme.healthy)));
                }
                if msg.kind.is_emergency() {
                    sender_line.push(Span::styled(
                        " [EMERGENCY]",
                        Style::default()
                            .fg(theme.danger)
                            .add_modifier(Modifier::BOLD),
                    ));
                }
                sender_line.push(Span::styled(
                    format!("  {}", format_age(age_secs)),
                    Style::default().fg(theme.muted),
                ));

                vec![
                    ListItem::new(Line::from(sender_line)),
                    ListItem::new(Line::from(vec![
                        Span::raw("    "),
                        Span::styled(msg.content.clone(), Style::default().fg(theme.text)),
                    ])),
                ]
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(Span::styled(
                " COMMUNITY UPDATES ",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.muted)),
    );

    f.render_widget(list, area);
}

fn render_compose(f: &mut Frame, area: Rect, state: &CommsState, theme: &Theme) {
    let draft = state.log.draft();
    let remaining = DRAFT_MAX_CHARS.saturating_sub(draft.chars().count());

    let content = if draft.is_empty() && !state.composing {
        Line::from(Span::styled(
            "Share updates or request help...",
            Style::default().fg(theme.muted),
        ))
    } else {
        let cursor = if state.composing { "▏" } else { "" };
        Line::from(vec![
            Span::styled(draft.to_string(), Style::default().fg(theme.text)),
            Span::styled(cursor, Style::default().fg(theme.accent)),
        ])
    };

    let border_color = if state.composing { theme.accent } else { theme.muted };
    let compose = Paragraph::new(content).block(
        Block::default()
            .title(Span::styled(
                format!(" COMPOSE ({remaining} left) "),
                Style::default().fg(border_color),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );

    f.render_widget(compose, area);
}

fn render_footer(f: &mut Frame, area: Rect, state: &CommsState, theme: &Theme) {
    let mut spans = crate::widgets::footer_line(
        &[
            ("[s]", "SOS"),
            ("[i]", "Compose"),
            ("[1]", QuickAction::ImSafe.label()),
            ("[2]", QuickAction::NeedHelp.label()),
            ("[3]", QuickAction::HazardReport.label()),
        ],
        theme,
    )
    .spans;
    spans.push(Span::styled(
        format!("  {}", state.mesh.relay_line()),
        Style::default().fg(theme.warning),
    ));

    let footer = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.muted)),
        )
        .style(Style::default().bg(theme.bg_secondary));

    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use rk_comms::SosState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_sos_key_opens_prompt() {
        let mut state = CommsState::new();
        state.handle_key(key(KeyCode::Char('s')));
        assert_eq!(state.sos.state(), SosState::Confirming);
    }

    #[test]
    fn test_compose_key_enters_compose_mode() {
        let mut state = CommsState::new();
        assert!(!state.composing);
        state.handle_key(key(KeyCode::Char('i')));
        assert!(state.composing);
    }

    #[test]
    fn test_quick_actions_fill_draft() {
        let mut state = CommsState::new();
        state.handle_key(key(KeyCode::Char('2')));
        assert_eq!(state.log.draft(), "Need help at my location");
        state.handle_key(key(KeyCode::Char('1')));
        assert_eq!(state.log.draft(), "I'm safe and accounted for");
    }

    #[test]
    fn test_demo_state() {
        let state = CommsState::new();
        assert_eq!(state.log.messages().len(), 4);
        assert_eq!(state.mesh.connections, 3);
        assert!(!state.mesh.online);
        assert!(!state.sos.is_active());
    }
}
