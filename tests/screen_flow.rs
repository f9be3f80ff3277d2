//! End-to-end state flow tests
//!
//! Drive the app through keyboard events the way a user would and assert
//! the resulting screen state.

mod common;

use common::init_tracing;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rk_comms::SosState;
use rk_config::{RkConfig, SettingKey};
use rk_tui::{App, Screen};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn fresh_app() -> App {
    let mut config = RkConfig::default();
    config.ui.show_onboarding = false;
    App::new(&config)
}

/// Launch with onboarding, grant two permissions, finish, land on Alerts
#[test]
fn test_onboarding_to_alerts() {
    init_tracing();

    let mut app = App::new(&RkConfig::default());
    assert!(app.onboarding.is_some());

    app.handle_key(key(KeyCode::Enter)); // welcome -> location
    app.handle_key(key(KeyCode::Char('g')));
    app.handle_key(key(KeyCode::Enter)); // -> notifications
    app.handle_key(key(KeyCode::Char('g')));
    app.handle_key(key(KeyCode::Enter)); // -> bluetooth
    app.handle_key(key(KeyCode::Enter)); // -> storage
    app.handle_key(key(KeyCode::Enter)); // finish

    assert!(app.onboarding.is_none());
    assert_eq!(app.current_screen, Screen::Alerts);
    assert_eq!(app.alerts.feed.active_count(), 2);
}

/// The checklist walkthrough: 0% -> 20% -> 0% -> 80%
#[test]
fn test_checklist_progress_walkthrough() {
    init_tracing();

    let mut app = fresh_app();
    app.handle_key(key(KeyCode::Char('p')));
    assert_eq!(app.current_screen, Screen::Prepare);

    // Toggle id 3 on and off again
    app.handle_key(key(KeyCode::Down));
    app.handle_key(key(KeyCode::Down));
    app.handle_key(key(KeyCode::Char(' ')));
    assert!((app.prepare.progress_pct() - 20.0).abs() < f64::EPSILON);
    app.handle_key(key(KeyCode::Char(' ')));
    assert!((app.prepare.progress_pct() - 0.0).abs() < f64::EPSILON);

    // Toggle 1, 2, 4, 5
    app.handle_key(key(KeyCode::Up));
    app.handle_key(key(KeyCode::Up));
    app.handle_key(key(KeyCode::Char(' '))); // 1
    app.handle_key(key(KeyCode::Down));
    app.handle_key(key(KeyCode::Char(' '))); // 2
    app.handle_key(key(KeyCode::Down));
    app.handle_key(key(KeyCode::Down));
    app.handle_key(key(KeyCode::Char(' '))); // 4
    app.handle_key(key(KeyCode::Down));
    app.handle_key(key(KeyCode::Char(' '))); // 5

    assert_eq!(app.prepare.completed.completed_count(), 4);
    assert!(!app.prepare.completed.is_complete("3"));
    assert!((app.prepare.progress_pct() - 80.0).abs() < f64::EPSILON);
}

/// SOS activation round trip, including the cancel path
#[test]
fn test_sos_round_trip() {
    init_tracing();

    let mut app = fresh_app();
    app.handle_key(key(KeyCode::Char('c')));

    // Cancel path leaves it idle
    app.handle_key(key(KeyCode::Char('s')));
    assert_eq!(app.comms.sos.state(), SosState::Confirming);
    app.handle_key(key(KeyCode::Esc));
    assert_eq!(app.comms.sos.state(), SosState::Idle);

    // Confirm path activates; second press deactivates without a prompt
    app.handle_key(key(KeyCode::Char('s')));
    app.handle_key(key(KeyCode::Char('y')));
    assert!(app.comms.sos.is_active());
    app.handle_key(key(KeyCode::Char('s')));
    assert_eq!(app.comms.sos.state(), SosState::Idle);
}

/// Compose, send, and verify nothing lands in the log
#[test]
fn test_compose_send_is_a_stub() {
    init_tracing();

    let mut app = fresh_app();
    app.handle_key(key(KeyCode::Char('c')));
    let before = app.comms.log.messages().len();

    app.handle_key(key(KeyCode::Char('i')));
    for c in "Shelter open on 3rd".chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
    assert_eq!(app.comms.log.draft(), "Shelter open on 3rd");

    app.handle_key(key(KeyCode::Enter));
    assert!(app.comms.log.draft().is_empty());
    assert_eq!(app.comms.log.messages().len(), before);
}

/// Settings double toggle restores the original value
#[test]
fn test_settings_double_toggle() {
    init_tracing();

    let mut app = fresh_app();
    for _ in 0..3 {
        app.handle_key(key(KeyCode::Tab));
    }
    assert_eq!(app.current_screen, Screen::Settings);

    let original = app.settings.store.get(SettingKey::PushNotifications);
    app.handle_key(key(KeyCode::Char(' ')));
    assert_eq!(
        app.settings.store.get(SettingKey::PushNotifications),
        !original
    );
    app.handle_key(key(KeyCode::Char(' ')));
    assert_eq!(
        app.settings.store.get(SettingKey::PushNotifications),
        original
    );
}
