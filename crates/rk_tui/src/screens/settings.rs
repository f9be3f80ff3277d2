//! Settings screen implementation
//!
//! Toggle rows for the volatile settings store, the system information
//! grid, and the stub maintenance actions.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use rk_config::{SettingKey, SettingsStore};

use crate::theme::Theme;
use crate::widgets::{format_bytes, status_indicator};

/// Cache size reported by the clear-cache row
pub const CACHE_SIZE_BYTES: u64 = 47_395_635;

/// State backing the settings screen
#[derive(Debug, Clone)]
pub struct SettingsState {
    pub store: SettingsStore,
    pub selected: usize,
    pub online: bool,
}

impl SettingsState {
    pub fn new() -> Self {
        Self {
            store: SettingsStore::new(),
            selected: 0,
            online: true,
        }
    }

    pub fn selected_key(&self) -> SettingKey {
        SettingKey::all()[self.selected.min(SettingKey::all().len() - 1)]
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.selected + 1 < SettingKey::all().len() {
                    self.selected += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.store.toggle(self.selected_key());
            }
            KeyCode::Char('x') => {
                // Cache eviction would go here
                tracing::debug!("clear cache requested (stub)");
            }
            KeyCode::Char('e') => {
                // Data export would go here
                tracing::debug!("export data requested (stub)");
            }
            _ => {}
        }
    }
}

impl Default for SettingsState {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the settings screen
pub fn render_settings(f: &mut Frame, state: &SettingsState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Toggle rows
            Constraint::Length(4),  // System information
            Constraint::Length(5),  // Actions
            Constraint::Length(3),  // Footer
        ])
        .split(f.area());

    render_header(f, chunks[0], state, theme);
    render_toggles(f, chunks[1], state, theme);
    render_system_info(f, chunks[2], theme);
    render_actions(f, chunks[3], theme);
    render_footer(f, chunks[4], theme);
}

fn render_header(f: &mut Frame, area: Rect, state: &SettingsState, theme: &Theme) {
    let mut spans = vec![
        Span::styled(
            "  S E T T I N G S  ",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];
    spans.extend(status_indicator(state.online, theme).spans);

    let header = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.muted)),
        )
        .style(Style::default().bg(theme.bg_secondary));

    f.render_widget(header, area);
}

fn render_toggles(f: &mut Frame, area: Rect, state: &SettingsState, theme: &Theme) {
    let items: Vec<ListItem> = SettingKey::all()
        .iter()
        .enumerate()
        .flat_map(|(idx, key)| {
            let value = state.store.get(*key);
            let selected = idx == state.selected;
            let marker = if selected { "▸ " } else { "  " };

            let switch = if value {
                Span::styled("[on] ", Style::default().fg(theme.healthy))
            } else {
                Span::styled("[off]", Style::default().fg(theme.muted))
            };

            let mut title_style = Style::default().fg(theme.text);
            if selected {
                title_style = title_style.add_modifier(Modifier::BOLD);
            }

            vec![
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(theme.accent)),
                    switch,
                    Span::raw(" "),
                    Span::styled(key.label(), title_style),
                ])),
                ListItem::new(Line::from(vec![
                    Span::raw("        "),
                    Span::styled(key.description(), Style::default().fg(theme.muted)),
                ])),
            ]
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(Span::styled(
                " CONNECTION, ACCESSIBILITY & STORAGE ",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.muted)),
    );

    f.render_widget(list, area);
}

fn render_system_info(f: &mut Frame, area: Rect, theme: &Theme) {
    let cell = |value: String, label: &'static str| {
        vec![
            Span::styled(value, Style::default().fg(theme.text).add_modifier(Modifier::BOLD)),
            Span::styled(format!(" {}   ", label), Style::default().fg(theme.muted)),
        ]
    };

    let mut spans = vec![Span::raw("  ")];
    spans.extend(cell(env!("CARGO_PKG_VERSION").to_string(), "App Version"));
    spans.extend(cell(format_bytes(CACHE_SIZE_BYTES), "Storage Used"));
    spans.extend(cell("3 days".to_string(), "Offline Data"));
    spans.extend(cell("Active".to_string(), "Mesh Status"));

    let info = Paragraph::new(vec![Line::from(""), Line::from(spans)]).block(
        Block::default()
            .title(Span::styled(
                " SYSTEM INFORMATION ",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.muted)),
    );

    f.render_widget(info, area);
}

fn render_actions(f: &mut Frame, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::from(vec![
            Span::styled("  [x] ", Style::default().fg(theme.accent)),
            Span::styled("Clear Cache", Style::default().fg(theme.text)),
            Span::styled(
                format!("  Free up {} of storage", format_bytes(CACHE_SIZE_BYTES)),
                Style::default().fg(theme.muted),
            ),
        ]),
        Line::from(vec![
            Span::styled("  [e] ", Style::default().fg(theme.accent)),
            Span::styled("Export Data", Style::default().fg(theme.text)),
        ]),
        Line::from(vec![
            Span::styled("  Language ", Style::default().fg(theme.text)),
            Span::styled("English (US)", Style::default().fg(theme.muted)),
        ]),
    ];

    let actions = Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(
                " DATA & SUPPORT ",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.muted)),
    );

    f.render_widget(actions, area);
}

fn render_footer(f: &mut Frame, area: Rect, theme: &Theme) {
    let footer = Paragraph::new(crate::widgets::footer_line(
        &[
            ("[↑↓]", "Select"),
            ("[Space]", "Toggle"),
            ("[x]", "Clear Cache"),
            ("[Tab]", "Next"),
            ("[q]", "Quit"),
        ],
        theme,
    ))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.muted)),
    )
    .style(Style::default().bg(theme.bg_secondary));

    f.render_widget(footer, area);
}
