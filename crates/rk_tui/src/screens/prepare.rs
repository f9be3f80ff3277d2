//! Prepare screen implementation
//!
//! Emergency checklist with completion tracking, the resource catalog,
//! and the Learn & Practice topics.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
};
use rk_prepare::{education_topics, Checklist, ChecklistState, EducationTopic, ResourceCatalog};

use crate::theme::Theme;
use crate::widgets::{format_bytes, resource_glyph, status_indicator};

/// State backing the prepare screen
#[derive(Debug, Clone)]
pub struct PrepareState {
    pub checklist: Checklist,
    pub completed: ChecklistState,
    pub resources: ResourceCatalog,
    pub topics: Vec<EducationTopic>,
    pub selected: usize,
    pub online: bool,
}

impl PrepareState {
    pub fn new() -> Self {
        Self {
            checklist: Checklist::builtin(),
            completed: ChecklistState::new(),
            resources: ResourceCatalog::builtin(),
            topics: education_topics(),
            selected: 0,
            online: true,
        }
    }

    /// Progress over the builtin checklist
    pub fn progress_pct(&self) -> f64 {
        self.completed.progress_pct(self.checklist.len())
    }

    /// Toggle completion of the selected row
    pub fn toggle_selected(&mut self) {
        if let Some(item) = self.checklist.items().get(self.selected) {
            let id = item.id.clone();
            self.completed.toggle(&id);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.selected + 1 < self.checklist.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Char(c @ '1'..='9') => {
                // Download request is a stub; the flag never changes
                self.resources.request_download(&c.to_string());
            }
            _ => {}
        }
    }
}

impl Default for PrepareState {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the prepare screen
pub fn render_prepare(f: &mut Frame, state: &PrepareState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),  // Header with progress
            Constraint::Min(10),    // Checklist
            Constraint::Length(6),  // Resources
            Constraint::Length(5),  // Learn & Practice
            Constraint::Length(3),  // Footer
        ])
        .split(f.area());

    render_header(f, chunks[0], state, theme);
    render_checklist(f, chunks[1], state, theme);
    render_resources(f, chunks[2], state, theme);
    render_topics(f, chunks[3], state, theme);
    render_footer(f, chunks[4], theme);
}

fn render_header(f: &mut Frame, area: Rect, state: &PrepareState, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.muted))
        .style(Style::default().bg(theme.bg_secondary));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let mut title_spans = vec![
        Span::styled(
            " D I S A S T E R   P R E P A R E D N E S S ",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];
    title_spans.extend(status_indicator(state.online, theme).spans);
    f.render_widget(Paragraph::new(Line::from(title_spans)), rows[0]);

    let completed = state.completed.completed_count();
    let total = state.checklist.len();
    f.render_widget(
        Paragraph::new(Span::styled(
            format!(" {} of {} items completed", completed, total),
            Style::default().fg(theme.muted),
        )),
        rows[1],
    );

    let gauge = Gauge::default()
        .ratio((state.progress_pct() / 100.0).clamp(0.0, 1.0))
        .label(format!("{:.0}%", state.progress_pct()))
        .gauge_style(Style::default().fg(theme.healthy).bg(theme.bg_primary));
    f.render_widget(gauge, rows[2]);
}

fn render_checklist(f: &mut Frame, area: Rect, state: &PrepareState, theme: &Theme) {
    let items: Vec<ListItem> = state
        .checklist
        .items()
        .iter()
        .enumerate()
        .flat_map(|(idx, item)| {
            let checked = state.completed.is_complete(&item.id);
            let selected = idx == state.selected;
            let marker = if selected { "▸ " } else { "  " };

            let checkbox = if checked {
                Span::styled("✓", Style::default().fg(theme.healthy))
            } else {
                Span::styled("○", Style::default().fg(theme.muted))
            };

            let mut title_style = Style::default().fg(if checked { theme.muted } else { theme.text });
            if checked {
                title_style = title_style.add_modifier(Modifier::CROSSED_OUT);
            }
            if selected {
                title_style = title_style.add_modifier(Modifier::BOLD);
            }

            vec![
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(theme.accent)),
                    checkbox,
                    Span::raw(" "),
                    Span::styled(item.title.clone(), title_style),
                ])),
                ListItem::new(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(item.description.clone(), Style::default().fg(theme.muted)),
                    Span::styled(
                        format!("  ● {}", item.category.tag()),
                        Style::default().fg(theme.category_color(item.category)),
                    ),
                ])),
            ]
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(Span::styled(
                " EMERGENCY PREPAREDNESS CHECKLIST ",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.muted)),
    );

    f.render_widget(list, area);
}

fn render_resources(f: &mut Frame, area: Rect, state: &PrepareState, theme: &Theme) {
    let items: Vec<ListItem> = state
        .resources
        .resources()
        .iter()
        .map(|resource| {
            let action = if resource.downloaded {
                Span::styled("✓ downloaded", Style::default().fg(theme.healthy))
            } else {
                Span::styled(
                    format!("[{}] download", resource.id),
                    Style::default().fg(theme.info),
                )
            };

            ListItem::new(Line::from(vec![
                Span::raw("  "),
                Span::styled(resource_glyph(resource.icon), Style::default().fg(theme.info)),
                Span::raw(" "),
                Span::styled(
                    format!("{:<32}", resource.title),
                    Style::default().fg(theme.text),
                ),
                Span::styled(
                    format!("{:>8}  ", format_bytes(resource.size_bytes)),
                    Style::default().fg(theme.muted),
                ),
                action,
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(Span::styled(
                " ESSENTIAL RESOURCES ",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.muted)),
    );

    f.render_widget(list, area);
}

fn render_topics(f: &mut Frame, area: Rect, state: &PrepareState, theme: &Theme) {
    let items: Vec<ListItem> = state
        .topics
        .iter()
        .map(|topic| {
            ListItem::new(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("{:<20}", topic.title),
                    Style::default().fg(theme.text),
                ),
                Span::styled(topic.summary.clone(), Style::default().fg(theme.muted)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(Span::styled(
                " LEARN & PRACTICE ",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.muted)),
    );

    f.render_widget(list, area);
}

fn render_footer(f: &mut Frame, area: Rect, theme: &Theme) {
    let footer = Paragraph::new(crate::widgets::footer_line(
        &[
            ("[↑↓]", "Select"),
            ("[Space]", "Toggle"),
            ("[1-4]", "Download"),
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
