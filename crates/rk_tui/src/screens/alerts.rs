//! Alerts screen implementation
//!
//! Active alerts for the user's area, a schematic disaster map, and the
//! emergency action row.

use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use rk_alert::{Alert, AlertFeed, Coordinates};
use rk_config::RkConfig;

use crate::theme::Theme;
use crate::widgets::{format_age, hazard_glyph, severity_indicator, status_indicator};

/// State backing the alerts screen
#[derive(Debug, Clone)]
pub struct AlertsState {
    pub feed: AlertFeed,
    pub selected: usize,
    pub online: bool,
}

impl AlertsState {
    /// Demo feed, re-homed to the configured area
    pub fn new(config: &RkConfig) -> Self {
        let mut feed = AlertFeed::demo();
        feed.location_name = config.general.location_name.clone();
        feed.user_location = Coordinates {
            lat: config.general.latitude,
            lng: config.general.longitude,
        };
        Self {
            feed,
            selected: 0,
            online: true,
        }
    }

    pub fn selected_alert(&self) -> Option<&Alert> {
        self.feed.alerts.get(self.selected)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.selected + 1 < self.feed.alerts.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Char('1') => {
                // Platform dialer integration would go here
                tracing::debug!("call 911 requested (stub)");
            }
            KeyCode::Char('2') => {
                // Shelter navigation would go here
                tracing::debug!("find shelter requested (stub)");
            }
            _ => {}
        }
    }
}

/// Render the alerts screen
pub fn render_alerts(f: &mut Frame, state: &AlertsState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),  // Header
            Constraint::Length(11), // Map
            Constraint::Min(8),     // Alert list
            Constraint::Length(3),  // Emergency actions
            Constraint::Length(3),  // Footer
        ])
        .split(f.area());

    render_header(f, chunks[0], state, theme);
    render_map(f, chunks[1], state, theme);
    render_alert_list(f, chunks[2], state, theme);
    render_actions(f, chunks[3], theme);
    render_footer(f, chunks[4], state, theme);
}

fn render_header(f: &mut Frame, area: Rect, state: &AlertsState, theme: &Theme) {
    let mut title_spans = vec![
        Span::styled(
            "  R A K S H A K   A L E R T S  ",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("[{} active]", state.feed.active_count()),
            Style::default().fg(theme.accent),
        ),
        Span::raw("  "),
    ];
    title_spans.extend(status_indicator(state.online, theme).spans);

    let location = Line::from(vec![
        Span::styled("  ⌖ ", Style::default().fg(theme.muted)),
        Span::styled(
            state.feed.location_name.clone(),
            Style::default().fg(theme.muted),
        ),
    ]);

    let header = Paragraph::new(vec![Line::from(title_spans), location])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.muted)),
        )
        .style(Style::default().bg(theme.bg_secondary));

    f.render_widget(header, area);
}

/// Plot user and alert markers into a character grid
///
/// Purely schematic: offsets from the user's location are scaled to fill
/// the panel, not projected.
fn render_map(f: &mut Frame, area: Rect, state: &AlertsState, theme: &Theme) {
    let inner_width = area.width.saturating_sub(2).max(1) as usize;
    let inner_height = area.height.saturating_sub(3).max(1) as usize;

    let mut grid: Vec<Vec<(char, ratatui::style::Color)>> =
        vec![vec![(' ', theme.muted); inner_width]; inner_height];

    // Sparse dot texture
    for (row, cells) in grid.iter_mut().enumerate() {
        for (col, cell) in cells.iter_mut().enumerate() {
            if row % 2 == 1 && col % 6 == 3 {
                *cell = ('·', theme.bg_secondary);
            }
        }
    }

    let user = state.feed.user_location;
    let max_delta = state
        .feed
        .alerts
        .iter()
        .flat_map(|a| {
            [
                (a.coordinates.lat - user.lat).abs(),
                (a.coordinates.lng - user.lng).abs(),
            ]
        })
        .fold(0.0_f64, f64::max)
        .max(1e-6);

    let center_row = inner_height / 2;
    let center_col = inner_width / 2;
    let row_scale = (inner_height as f64 / 2.0 - 1.0) / max_delta;
    let col_scale = (inner_width as f64 / 2.0 - 2.0) / max_delta;

    for alert in &state.feed.alerts {
        let d_lat = user.lat - alert.coordinates.lat;
        let d_lng = alert.coordinates.lng - user.lng;
        let row = (center_row as f64 + d_lat * row_scale).round();
        let col = (center_col as f64 + d_lng * col_scale).round();
        let row = row.clamp(0.0, inner_height as f64 - 1.0) as usize;
        let col = col.clamp(0.0, inner_width as f64 - 1.0) as usize;
        grid[row][col] = ('!', theme.severity_color(alert.severity));
    }

    // User marker drawn last so it wins overlaps
    grid[center_row][center_col] = ('⊙', theme.info);

    let mut lines: Vec<Line> = grid
        .into_iter()
        .map(|cells| {
            Line::from(
                cells
                    .into_iter()
                    .map(|(c, color)| Span::styled(c.to_string(), Style::default().fg(color)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    lines.push(Line::from(vec![
        Span::styled(" ⊙ You", Style::default().fg(theme.info)),
        Span::styled("   ! High", Style::default().fg(theme.danger)),
        Span::styled("   ! Medium", Style::default().fg(theme.warning)),
    ]));

    let map = Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(
                " LIVE DISASTER MAP ",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.muted)),
    );

    f.render_widget(map, area);
}

fn render_alert_list(f: &mut Frame, area: Rect, state: &AlertsState, theme: &Theme) {
    let now = Utc::now();

    let items: Vec<ListItem> = if state.feed.alerts.is_empty() {
        vec![ListItem::new(Span::styled(
            "  No active alerts for your area",
            Style::default().fg(theme.muted),
        ))]
    } else {
        state
            .feed
            .alerts
            .iter()
            .enumerate()
            .flat_map(|(idx, alert)| {
                let selected = idx == state.selected;
                let marker = if selected { "▸ " } else { "  " };
                let (indicator, color) = severity_indicator(alert.severity, theme);

                let age_secs = (now - alert.issued_at).num_seconds().max(0) as u64;

                vec![
                    ListItem::new(Line::from(vec![
                        Span::styled(marker, Style::default().fg(theme.accent)),
                        indicator,
                        Span::raw(" "),
                        Span::styled(hazard_glyph(alert.kind), Style::default().fg(color)),
                        Span::raw(" "),
                        Span::styled(
                            alert.title.clone(),
                            Style::default().fg(color).add_modifier(Modifier::BOLD),
                        ),
                        Span::raw("  "),
                        Span::styled(
                            format!("[{}]", alert.severity.badge()),
                            Style::default().fg(color),
                        ),
                    ])),
                    ListItem::new(Line::from(vec![
                        Span::raw("    "),
                        Span::styled(alert.description.clone(), Style::default().fg(theme.text)),
                    ])),
                    ListItem::new(Line::from(vec![
                        Span::raw("    "),
                        Span::styled(
                            format!("{:.0}km away", alert.distance_km),
                            Style::default().fg(theme.muted),
                        ),
                        Span::styled(
                            format!("  {}", format_age(age_secs)),
                            Style::default().fg(theme.muted),
                        ),
                        Span::styled("  ✓ ", Style::default().fg(theme.healthy)),
                        Span::styled(alert.source.clone(), Style::default().fg(theme.muted)),
                    ])),
                ]
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(Span::styled(
                " ACTIVE ALERTS ",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.muted)),
    );

    f.render_widget(list, area);
}

fn render_actions(f: &mut Frame, area: Rect, theme: &Theme) {
    let actions = Paragraph::new(Line::from(vec![
        Span::styled("  [1] ", Style::default().fg(theme.accent)),
        Span::styled(
            "Call 911",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        Span::styled("[2] ", Style::default().fg(theme.accent)),
        Span::styled("Find Shelter", Style::default().fg(theme.text)),
    ]))
    .block(
        Block::default()
            .title(Span::styled(
                " EMERGENCY ACTIONS ",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.muted)),
    );

    f.render_widget(actions, area);
}

fn render_footer(f: &mut Frame, area: Rect, state: &AlertsState, theme: &Theme) {
    let line = if state.online {
        crate::widgets::footer_line(
            &[
                ("[↑↓]", "Select"),
                ("[p]", "Prepare"),
                ("[c]", "Communicate"),
                ("[Tab]", "Next"),
                ("[?]", "Help"),
                ("[q]", "Quit"),
            ],
            theme,
        )
    } else {
        Line::from(Span::styled(
            "  Operating in offline mode. Some features may be limited.",
            Style::default().fg(theme.warning),
        ))
    };

    let footer = Paragraph::new(line)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.muted)),
        )
        .style(Style::default().bg(theme.bg_secondary));

    f.render_widget(footer, area);
}
