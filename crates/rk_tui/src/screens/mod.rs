//! Screen implementations for the TUI
//!
//! Each screen module provides:
//! - A state struct owned by the app
//! - A render function that draws the screen
//! - Input handling for screen-specific actions

pub mod alerts;
pub mod communicate;
pub mod help;
pub mod onboarding;
pub mod prepare;
pub mod settings;

pub use alerts::{render_alerts, AlertsState};
pub use communicate::{render_communicate, CommsState};
pub use help::render_help;
pub use onboarding::{
    render_onboarding, OnboardingFlow, OnboardingStep, PermissionGrants, PermissionKind,
};
pub use prepare::{render_prepare, PrepareState};
pub use settings::{render_settings, SettingsState, CACHE_SIZE_BYTES};
