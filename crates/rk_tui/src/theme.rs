//! Theme and color definitions for the TUI
//!
//! Provides a consistent color scheme across all screens. The palette is
//! lifted from the app's brand colors.

use ratatui::style::Color;
use rk_alert::Severity;
use rk_comms::MessageKind;
use rk_prepare::Category;

/// TUI color theme
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary background color
    pub bg_primary: Color,
    /// Secondary background color
    pub bg_secondary: Color,
    /// Text color
    pub text: Color,
    /// Muted/dim text color
    pub muted: Color,
    /// Accent color for highlights and the SOS control
    pub accent: Color,
    /// Safe/ok status color
    pub healthy: Color,
    /// Caution status color
    pub warning: Color,
    /// Danger status color
    pub danger: Color,
    /// Highest-urgency color
    pub crisis: Color,
    /// Informational blue
    pub info: Color,
    /// Mesh/bluetooth indigo
    pub mesh: Color,
    /// Planning purple
    pub planning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg_primary: Color::Rgb(17, 24, 39),
            bg_secondary: Color::Rgb(31, 41, 55),
            text: Color::Rgb(229, 231, 235),
            muted: Color::Rgb(107, 114, 128),
            accent: Color::Rgb(220, 38, 38),
            healthy: Color::Rgb(5, 150, 105),
            warning: Color::Rgb(245, 158, 11),
            danger: Color::Rgb(220, 38, 38),
            crisis: Color::Rgb(248, 113, 113),
            info: Color::Rgb(59, 130, 246),
            mesh: Color::Rgb(99, 102, 241),
            planning: Color::Rgb(124, 58, 237),
        }
    }
}

impl Theme {
    /// Color for an alert severity
    pub fn severity_color(&self, severity: Severity) -> Color {
        match severity {
            Severity::Low => self.healthy,
            Severity::Medium => self.warning,
            Severity::High => self.danger,
            Severity::Critical => self.crisis,
        }
    }

    /// Color for a checklist category dot
    pub fn category_color(&self, category: Category) -> Color {
        match category {
            Category::Supplies => self.healthy,
            Category::Documents => self.info,
            Category::Planning => self.planning,
            Category::Communication => self.warning,
            Category::Safety => self.danger,
        }
    }

    /// Color for a message kind
    pub fn message_color(&self, kind: MessageKind) -> Color {
        match kind {
            MessageKind::Emergency => self.danger,
            MessageKind::Response => self.healthy,
            MessageKind::Status => self.info,
            MessageKind::Info => self.muted,
        }
    }

    /// Color for the online/offline indicator
    pub fn connectivity_color(&self, online: bool) -> Color {
        if online {
            self.healthy
        } else {
            self.warning
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_default() {
        let theme = Theme::default();
        assert_eq!(theme.healthy, Color::Rgb(5, 150, 105));
        assert_eq!(theme.accent, Color::Rgb(220, 38, 38));
    }

    #[test]
    fn test_severity_colors_distinct() {
        let theme = Theme::default();
        assert_eq!(theme.severity_color(Severity::Low), theme.healthy);
        assert_eq!(theme.severity_color(Severity::Medium), theme.warning);
        assert_eq!(theme.severity_color(Severity::High), theme.danger);
        assert_eq!(theme.severity_color(Severity::Critical), theme.crisis);
    }

    #[test]
    fn test_category_colors() {
        let theme = Theme::default();
        assert_eq!(theme.category_color(Category::Supplies), theme.healthy);
        assert_eq!(theme.category_color(Category::Safety), theme.danger);
    }

    #[test]
    fn test_message_colors() {
        let theme = Theme::default();
        assert_eq!(theme.message_color(MessageKind::Emergency), theme.danger);
        assert_eq!(theme.message_color(MessageKind::Response), theme.healthy);
    }

    #[test]
    fn test_connectivity_color() {
        let theme = Theme::default();
        assert_eq!(theme.connectivity_color(true), theme.healthy);
        assert_eq!(theme.connectivity_color(false), theme.warning);
    }
}
