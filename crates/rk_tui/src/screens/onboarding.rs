//! Onboarding flow implementation
//!
//! Five-step intro sequence with per-step permission grants. Granting is a
//! stub that records the answer; no platform permission is requested.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::theme::Theme;
use crate::widgets::centered_rect;

/// Permissions requested during onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionKind {
    Location,
    Notifications,
    Bluetooth,
    Storage,
}

/// One onboarding step
#[derive(Debug, Clone)]
pub struct OnboardingStep {
    pub title: &'static str,
    pub description: &'static str,
    pub glyph: &'static str,
    pub permission: Option<PermissionKind>,
}

fn steps() -> Vec<OnboardingStep> {
    vec![
        OnboardingStep {
            title: "Welcome to Rakshak",
            description: "Your comprehensive disaster management companion that works online and offline to keep you safe.",
            glyph: "⛨",
            permission: None,
        },
        OnboardingStep {
            title: "Location Access",
            description: "We need access to your location to provide accurate disaster alerts and emergency services for your area.",
            glyph: "⌖",
            permission: Some(PermissionKind::Location),
        },
        OnboardingStep {
            title: "Push Notifications",
            description: "Enable notifications to receive real-time disaster alerts and emergency updates even when the app is closed.",
            glyph: "◎",
            permission: Some(PermissionKind::Notifications),
        },
        OnboardingStep {
            title: "Bluetooth Mesh Network",
            description: "Enable Bluetooth to communicate with other Rakshak users nearby when internet is unavailable.",
            glyph: "ᛒ",
            permission: Some(PermissionKind::Bluetooth),
        },
        OnboardingStep {
            title: "Offline Storage",
            description: "Allow storage access to download emergency maps, guides, and resources for offline use.",
            glyph: "▣",
            permission: Some(PermissionKind::Storage),
        },
    ]
}

/// Recorded permission answers
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissionGrants {
    pub location: bool,
    pub notifications: bool,
    pub bluetooth: bool,
    pub storage: bool,
}

impl PermissionGrants {
    /// Record a grant; the platform request would happen here
    pub fn grant(&mut self, kind: PermissionKind) {
        match kind {
            PermissionKind::Location => self.location = true,
            PermissionKind::Notifications => self.notifications = true,
            PermissionKind::Bluetooth => self.bluetooth = true,
            PermissionKind::Storage => self.storage = true,
        }
        tracing::debug!(?kind, "permission granted (stub)");
    }

    pub fn is_granted(&self, kind: PermissionKind) -> bool {
        match kind {
            PermissionKind::Location => self.location,
            PermissionKind::Notifications => self.notifications,
            PermissionKind::Bluetooth => self.bluetooth,
            PermissionKind::Storage => self.storage,
        }
    }
}

/// Onboarding sequence state
#[derive(Debug, Clone)]
pub struct OnboardingFlow {
    steps: Vec<OnboardingStep>,
    step: usize,
    pub grants: PermissionGrants,
}

impl OnboardingFlow {
    pub fn new() -> Self {
        Self {
            steps: steps(),
            step: 0,
            grants: PermissionGrants::default(),
        }
    }

    pub fn current(&self) -> &OnboardingStep {
        &self.steps[self.step]
    }

    pub fn step_index(&self) -> usize {
        self.step
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn is_last(&self) -> bool {
        self.step + 1 == self.steps.len()
    }

    /// Skip is offered after the first step
    pub fn can_skip(&self) -> bool {
        self.step > 0
    }

    /// Grant the current step's permission, if it has one
    pub fn grant_current(&mut self) {
        if let Some(kind) = self.current().permission {
            self.grants.grant(kind);
        }
    }

    /// Move to the next step; returns true when the flow is finished
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            true
        } else {
            self.step += 1;
            false
        }
    }
}

impl Default for OnboardingFlow {
    fn default() -> Self {
        Self::new()
    }
}

fn step_accent(step: &OnboardingStep, theme: &Theme) -> ratatui::style::Color {
    match step.permission {
        None => theme.info,
        Some(PermissionKind::Location) => theme.healthy,
        Some(PermissionKind::Notifications) => theme.warning,
        Some(PermissionKind::Bluetooth) => theme.mesh,
        Some(PermissionKind::Storage) => theme.planning,
    }
}

/// Render the onboarding flow
pub fn render_onboarding(f: &mut Frame, flow: &OnboardingFlow, theme: &Theme) {
    let area = centered_rect(70, 70, f.area());
    let step = flow.current();
    let accent = step_accent(step, theme);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(theme.bg_secondary));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Progress dots
            Constraint::Length(2), // Glyph
            Constraint::Length(2), // Title
            Constraint::Min(3),    // Description
            Constraint::Length(2), // Permission row
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    let dots: Vec<Span> = (0..flow.len())
        .map(|i| {
            if i <= flow.step_index() {
                Span::styled(" ● ", Style::default().fg(accent))
            } else {
                Span::styled(" ○ ", Style::default().fg(theme.muted))
            }
        })
        .collect();
    f.render_widget(Paragraph::new(Line::from(dots)).centered(), rows[0]);

    f.render_widget(
        Paragraph::new(Span::styled(
            step.glyph,
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ))
        .centered(),
        rows[1],
    );

    f.render_widget(
        Paragraph::new(Span::styled(
            step.title,
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ))
        .centered(),
        rows[2],
    );

    f.render_widget(
        Paragraph::new(Span::styled(
            step.description,
            Style::default().fg(theme.muted),
        ))
        .wrap(Wrap { trim: true })
        .centered(),
        rows[3],
    );

    if let Some(kind) = step.permission {
        let granted = flow.grants.is_granted(kind);
        let line = if granted {
            Line::from(Span::styled(
                "✓ Permission granted",
                Style::default().fg(theme.healthy),
            ))
        } else {
            Line::from(vec![
                Span::styled("[g] ", Style::default().fg(accent)),
                Span::styled("Grant permission", Style::default().fg(theme.text)),
            ])
        };
        f.render_widget(Paragraph::new(line).centered(), rows[4]);
    }

    let mut hints = vec![
        Span::styled("[Enter] ", Style::default().fg(accent)),
        Span::styled(
            if flow.is_last() { "Get Started" } else { "Next" },
            Style::default().fg(theme.muted),
        ),
    ];
    if flow.can_skip() {
        hints.push(Span::styled("   [s] ", Style::default().fg(accent)));
        hints.push(Span::styled("Skip", Style::default().fg(theme.muted)));
    }
    f.render_widget(Paragraph::new(Line::from(hints)).centered(), rows[5]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_steps() {
        let flow = OnboardingFlow::new();
        assert_eq!(flow.len(), 5);
        assert_eq!(flow.current().title, "Welcome to Rakshak");
        assert!(flow.current().permission.is_none());
    }

    #[test]
    fn test_bluetooth_step_keeps_last_description() {
        let flow = OnboardingFlow::new();
        let bluetooth = &flow.steps[3];
        assert_eq!(bluetooth.permission, Some(PermissionKind::Bluetooth));
        assert!(bluetooth.description.contains("other Rakshak users"));
    }

    #[test]
    fn test_advance_finishes_on_last_step() {
        let mut flow = OnboardingFlow::new();
        for _ in 0..4 {
            assert!(!flow.advance());
        }
        assert!(flow.is_last());
        assert!(flow.advance());
    }

    #[test]
    fn test_skip_offered_after_first_step() {
        let mut flow = OnboardingFlow::new();
        assert!(!flow.can_skip());
        flow.advance();
        assert!(flow.can_skip());
    }

    #[test]
    fn test_grant_current() {
        let mut flow = OnboardingFlow::new();
        // Welcome step has no permission; granting is a no-op
        flow.grant_current();
        assert!(!flow.grants.location);

        flow.advance();
        flow.grant_current();
        assert!(flow.grants.location);
        assert!(!flow.grants.bluetooth);
    }
}
