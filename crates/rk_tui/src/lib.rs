//! rk_tui - Terminal UI for Rakshak
//!
//! This crate provides:
//! - ratatui-based terminal interface
//! - Four tab screens (alerts, prepare, communicate, settings) plus help
//! - The onboarding flow shown on first launch
//! - Keyboard navigation

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use rk_config::RkConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod screens;
pub mod theme;
pub mod widgets;

use screens::{AlertsState, CommsState, OnboardingFlow, PrepareState, SettingsState};
use theme::Theme;

/// TUI errors
#[derive(Error, Debug)]
pub enum TuiError {
    #[error("Terminal error: {0}")]
    TerminalError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Available screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Alerts,
    Prepare,
    Communicate,
    Settings,
    Help,
}

impl Screen {
    /// Get screen title
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Alerts => "Alerts",
            Screen::Prepare => "Prepare",
            Screen::Communicate => "Communicate",
            Screen::Settings => "Settings",
            Screen::Help => "Help",
        }
    }

    /// Get keyboard shortcut
    pub fn shortcut(&self) -> Option<char> {
        match self {
            Screen::Alerts => Some('a'),
            Screen::Prepare => Some('p'),
            Screen::Communicate => Some('c'),
            Screen::Settings => None,
            Screen::Help => Some('?'),
        }
    }

    /// All screens in tab order
    pub fn all() -> &'static [Screen] {
        &[
            Screen::Alerts,
            Screen::Prepare,
            Screen::Communicate,
            Screen::Settings,
            Screen::Help,
        ]
    }
}

/// Application state
pub struct App {
    pub current_screen: Screen,
    pub should_quit: bool,
    pub tick_ms: u64,
    pub theme: Theme,
    /// Active until finished or skipped
    pub onboarding: Option<OnboardingFlow>,
    pub alerts: AlertsState,
    pub prepare: PrepareState,
    pub comms: CommsState,
    pub settings: SettingsState,
}

impl App {
    /// Create a new app instance from loaded config
    pub fn new(config: &RkConfig) -> Self {
        Self {
            current_screen: Screen::Alerts,
            should_quit: false,
            tick_ms: config.ui.tick_ms,
            theme: Theme::default(),
            onboarding: config.ui.show_onboarding.then(OnboardingFlow::new),
            alerts: AlertsState::new(config),
            prepare: PrepareState::new(),
            comms: CommsState::new(),
            settings: SettingsState::new(),
        }
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global shortcuts
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => {
                    self.should_quit = true;
                    return;
                }
                _ => {}
            }
        }

        // Onboarding captures input until finished or skipped
        if let Some(flow) = self.onboarding.as_mut() {
            match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('g') => flow.grant_current(),
                KeyCode::Char('s') if flow.can_skip() => self.onboarding = None,
                KeyCode::Enter | KeyCode::Char(' ') => {
                    if flow.advance() {
                        self.onboarding = None;
                    }
                }
                _ => {}
            }
            return;
        }

        // The SOS confirmation prompt is modal
        if self.comms.sos.is_confirming() {
            match key.code {
                KeyCode::Enter | KeyCode::Char('y') => {
                    self.comms.sos.confirm();
                }
                KeyCode::Esc | KeyCode::Char('n') => {
                    self.comms.sos.cancel();
                }
                _ => {}
            }
            return;
        }

        // Compose mode captures text input
        if self.current_screen == Screen::Communicate && self.comms.composing {
            match key.code {
                KeyCode::Esc => self.comms.composing = false,
                KeyCode::Enter => {
                    self.comms.log.send();
                    self.comms.composing = false;
                }
                KeyCode::Backspace => self.comms.log.pop_char(),
                KeyCode::Char(c) => self.comms.log.push_char(c),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                // Cycle to next screen
                let screens = Screen::all();
                let current_idx = screens
                    .iter()
                    .position(|s| *s == self.current_screen)
                    .unwrap_or(0);
                let next_idx = (current_idx + 1) % screens.len();
                self.current_screen = screens[next_idx];
                return;
            }
            KeyCode::Char(c) => {
                // Check screen shortcuts
                for screen in Screen::all() {
                    if screen.shortcut() == Some(c) {
                        self.current_screen = *screen;
                        return;
                    }
                }
            }
            _ => {}
        }

        // Screen-specific input
        match self.current_screen {
            Screen::Alerts => self.alerts.handle_key(key),
            Screen::Prepare => self.prepare.handle_key(key),
            Screen::Communicate => self.comms.handle_key(key),
            Screen::Settings => self.settings.handle_key(key),
            Screen::Help => {}
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&RkConfig::default())
    }
}

/// Draw the current frame
pub fn render(f: &mut Frame, app: &App) {
    if let Some(flow) = &app.onboarding {
        screens::render_onboarding(f, flow, &app.theme);
        return;
    }

    match app.current_screen {
        Screen::Alerts => screens::render_alerts(f, &app.alerts, &app.theme),
        Screen::Prepare => screens::render_prepare(f, &app.prepare, &app.theme),
        Screen::Communicate => screens::render_communicate(f, &app.comms, &app.theme),
        Screen::Settings => screens::render_settings(f, &app.settings, &app.theme),
        Screen::Help => screens::render_help(f, &app.theme),
    }

    if app.comms.sos.is_confirming() {
        widgets::confirm_dialog(
            f,
            rk_comms::SOS_CONFIRM_TITLE,
            rk_comms::SOS_CONFIRM_BODY,
            &app.theme,
        );
    }
}

/// Run the TUI until the user quits
pub fn run(app: &mut App) -> Result<(), TuiError> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, app);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut ratatui::DefaultTerminal, app: &mut App) -> Result<(), TuiError> {
    let tick = Duration::from_millis(app.tick_ms.max(50));
    tracing::debug!(tick_ms = tick.as_millis() as u64, "entering event loop");

    while !app.should_quit {
        terminal.draw(|f| render(f, app))?;

        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }

    tracing::debug!("event loop finished");
    Ok(())
}
