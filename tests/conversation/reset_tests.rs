//! Terminal reset and the chrome actions around it

use intelterm_core::application::{GatePhase, MenuAction, MenuOutcome};
use intelterm_core::{AppConfig, QueryReply, Submission, TerminalSession, ThemeName};
use std::time::{Duration, Instant};

fn unlocked_session(t0: Instant) -> TerminalSession {
    let mut session = TerminalSession::new(&AppConfig::default());
    session.auth.code.set("IMF-1996");
    session.authenticate(t0);
    session.tick(t0 + Duration::from_millis(1200));
    assert!(session.is_authenticated());
    session
}

#[test]
fn test_reset_clears_everything_unconditionally() {
    let t0 = Instant::now();
    let mut session = unlocked_session(t0);
    let id_before = session.session_id.clone();

    session.conversation.input.set("first");
    let Submission::Accepted(first) = session.submit() else {
        panic!("should accept");
    };
    session.resolve(QueryReply::answered(first.request_id, "answer"), t0);
    session.conversation.input.set("second");
    let Submission::Accepted(second) = session.submit() else {
        panic!("should accept");
    };
    session.conversation.input.set("half typed");
    session.toggle_menu();

    session.reset();

    assert!(session.conversation.messages().is_empty());
    assert!(session.conversation.input.is_empty());
    assert!(session.conversation.history.is_empty());
    assert!(!session.conversation.in_flight());
    assert!(session.reveals.is_idle());
    assert!(!session.is_authenticated());
    assert_eq!(session.auth.phase(), &GatePhase::Locked);
    assert!(session.auth.code.is_empty());
    assert!(!session.chrome.menu_open());
    assert_eq!(session.session_id, id_before);

    // The reply that was in flight arrives after the reset and is dropped
    assert!(
        session
            .resolve(QueryReply::answered(second.request_id, "late"), t0)
            .is_none()
    );
    assert!(session.conversation.messages().is_empty());
}

#[test]
fn test_reset_on_a_fresh_session_is_harmless() {
    let mut session = TerminalSession::new(&AppConfig::default());
    session.reset();
    assert!(session.conversation.messages().is_empty());
    assert!(!session.is_authenticated());
}

#[test]
fn test_cycle_theme_announces_change() {
    let t0 = Instant::now();
    let mut session = unlocked_session(t0);
    let before = session.conversation.messages().len();

    session.cycle_theme(t0);
    assert_eq!(session.chrome.theme, ThemeName::Blue);
    let last = session.conversation.messages().last().unwrap();
    assert_eq!(last.content, "Terminal theme updated to blue");
    assert_eq!(session.conversation.messages().len(), before + 1);

    session.cycle_theme(t0);
    session.cycle_theme(t0);
    assert_eq!(session.chrome.theme, ThemeName::Green);
}

#[test]
fn test_menu_change_theme_then_exit() {
    let t0 = Instant::now();
    let mut session = unlocked_session(t0);

    session.toggle_menu();
    assert_eq!(
        session.chrome.selected_action(),
        Some(MenuAction::ChangeTheme)
    );
    assert_eq!(
        session.activate_menu(t0),
        MenuOutcome::ThemeChanged(ThemeName::Blue)
    );
    assert!(!session.chrome.menu_open());

    session.toggle_menu();
    session.chrome.menu_next();
    assert_eq!(session.activate_menu(t0), MenuOutcome::LoggedOut);
    assert!(!session.is_authenticated());
    // Theme survives a reset
    assert_eq!(session.chrome.theme, ThemeName::Blue);
}

#[test]
fn test_activate_with_closed_menu_does_nothing() {
    let t0 = Instant::now();
    let mut session = unlocked_session(t0);
    assert_eq!(session.activate_menu(t0), MenuOutcome::Nothing);
    assert!(session.is_authenticated());
}
