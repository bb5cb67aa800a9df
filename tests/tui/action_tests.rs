//! Console action dispatch

use intelterm_cli::tui::screens::console::ConsoleAction;
use intelterm_cli::tui::{Flow, apply_console_action};
use intelterm_core::{AppConfig, MessageKind, QueryRequest, TerminalSession, ThemeName};
use std::time::{Duration, Instant};

fn unlocked() -> TerminalSession {
    let mut session = TerminalSession::new(&AppConfig::default());
    session.auth.code.set("IMF-1996");
    let start = Instant::now();
    session.authenticate(start);
    session.tick(start + Duration::from_secs(2));
    assert!(session.is_authenticated());
    session
}

fn apply(session: &mut TerminalSession, action: ConsoleAction) -> (Flow, Vec<QueryRequest>) {
    let mut sent = Vec::new();
    let flow = apply_console_action(session, action, 0, Instant::now(), |request| {
        sent.push(request)
    });
    (flow, sent)
}

#[test]
fn test_submit_hands_request_to_sender() {
    let mut session = unlocked();
    session.conversation.input.set("  status report  ");

    let (flow, sent) = apply(&mut session, ConsoleAction::Submit);
    assert_eq!(flow, Flow::Continue);
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].query, "status report");

    let kinds: Vec<MessageKind> = session
        .conversation
        .messages()
        .iter()
        .map(|m| m.kind)
        .collect();
    assert!(kinds.ends_with(&[MessageKind::User, MessageKind::Processing]));
}

#[test]
fn test_empty_submit_sends_nothing() {
    let mut session = unlocked();
    let before = session.conversation.messages().len();
    session.conversation.input.set("   ");

    let (_, sent) = apply(&mut session, ConsoleAction::Submit);
    assert!(sent.is_empty());
    assert_eq!(session.conversation.messages().len(), before);
}

#[test]
fn test_quit_stops_the_loop() {
    let mut session = unlocked();
    let (flow, _) = apply(&mut session, ConsoleAction::Quit);
    assert_eq!(flow, Flow::Quit);
}

#[test]
fn test_logout_returns_to_gate() {
    let mut session = unlocked();
    let (flow, _) = apply(&mut session, ConsoleAction::Logout);
    assert_eq!(flow, Flow::Continue);
    assert!(!session.is_authenticated());
    assert!(session.conversation.messages().is_empty());
}

#[test]
fn test_history_actions_fill_input() {
    let mut session = unlocked();
    for query in ["alpha", "beta"] {
        session.conversation.input.set(query);
        let (_, sent) = apply(&mut session, ConsoleAction::Submit);
        let request = sent.into_iter().next().expect("request sent");
        session.resolve(
            intelterm_core::QueryReply::answered(request.request_id, "ok"),
            Instant::now(),
        );
    }

    apply(&mut session, ConsoleAction::HistoryPrevious);
    assert_eq!(session.conversation.input.value(), "beta");
    apply(&mut session, ConsoleAction::HistoryPrevious);
    assert_eq!(session.conversation.input.value(), "alpha");
    apply(&mut session, ConsoleAction::HistoryNext);
    assert_eq!(session.conversation.input.value(), "beta");
}

#[test]
fn test_menu_change_theme() {
    let mut session = unlocked();
    assert_eq!(session.chrome.theme, ThemeName::Green);

    apply(&mut session, ConsoleAction::ToggleMenu);
    assert!(session.chrome.menu_open());
    apply(&mut session, ConsoleAction::MenuSelect);

    assert!(!session.chrome.menu_open());
    assert_eq!(session.chrome.theme, ThemeName::Blue);
    let last = session.conversation.messages().last().expect("theme message");
    assert_eq!(last.kind, MessageKind::System);
    assert_eq!(last.content, "Terminal theme updated to blue");
}

#[test]
fn test_menu_exit_terminal() {
    let mut session = unlocked();
    apply(&mut session, ConsoleAction::ToggleMenu);
    apply(&mut session, ConsoleAction::MenuDown);
    let (flow, _) = apply(&mut session, ConsoleAction::MenuSelect);

    assert_eq!(flow, Flow::Continue);
    assert!(!session.is_authenticated());
    assert!(!session.chrome.menu_open());
}

#[test]
fn test_cycle_theme_and_dark_mode() {
    let mut session = unlocked();
    let dark = session.chrome.dark_mode;

    apply(&mut session, ConsoleAction::CycleTheme);
    apply(&mut session, ConsoleAction::CycleTheme);
    assert_eq!(session.chrome.theme, ThemeName::Amber);

    apply(&mut session, ConsoleAction::ToggleDarkMode);
    assert_eq!(session.chrome.dark_mode, !dark);
}

#[test]
fn test_scrolling_is_clamped() {
    let mut session = unlocked();
    let mut sent = Vec::new();
    let now = Instant::now();

    session.conversation.scroll_offset = u16::MAX;
    apply_console_action(&mut session, ConsoleAction::ScrollUp, 12, now, |r| sent.push(r));
    assert_eq!(session.conversation.scroll_offset, 7);

    apply_console_action(&mut session, ConsoleAction::ScrollTop, 12, now, |r| sent.push(r));
    assert_eq!(session.conversation.scroll_offset, 0);

    apply_console_action(&mut session, ConsoleAction::ScrollDown, 12, now, |r| sent.push(r));
    assert_eq!(session.conversation.scroll_offset, 5);

    // Reaching the end re-pins to the bottom so new messages stay visible
    apply_console_action(&mut session, ConsoleAction::ScrollDown, 8, now, |r| sent.push(r));
    assert_eq!(session.conversation.scroll_offset, u16::MAX);
    assert!(sent.is_empty());
}
