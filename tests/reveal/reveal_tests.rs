//! Text reveal across concurrent messages

use intelterm_core::application::RevealBoard;
use intelterm_core::{AppConfig, MessageId, MessageKind, TerminalSession};
use std::time::{Duration, Instant};

const STEP: Duration = Duration::from_millis(15);

#[test]
fn test_concurrent_reveals_progress_independently() {
    let t0 = Instant::now();
    let mut board = RevealBoard::new(STEP);
    board.start(MessageId(1), "short", t0);
    board.start(MessageId(2), "a much longer line", t0 + STEP * 2);

    board.tick(t0 + STEP * 4);
    assert_eq!(board.visible(MessageId(1)), Some("shor"));
    assert_eq!(board.visible(MessageId(2)), Some("a "));

    board.tick(t0 + STEP * 5);
    assert_eq!(board.visible(MessageId(1)), None);
    assert!(board.is_animating(MessageId(2)));
    assert_eq!(board.active_count(), 1);

    board.tick(t0 + STEP * 100);
    assert!(board.is_idle());
}

#[test]
fn test_unknown_message_is_not_animating() {
    let board = RevealBoard::new(STEP);
    assert_eq!(board.visible(MessageId(42)), None);
    assert!(!board.is_animating(MessageId(42)));
}

#[test]
fn test_session_only_animates_system_and_response() {
    let t0 = Instant::now();
    let mut session = TerminalSession::new(&AppConfig::default());

    let system = session.announce(MessageKind::System, "online", t0);
    let user = session.announce(MessageKind::User, "hello", t0);
    let error = session.announce(MessageKind::Error, "broken", t0);
    let response = session.announce(MessageKind::Response, "answer", t0);

    assert!(session.reveals.is_animating(system));
    assert!(session.reveals.is_animating(response));
    assert!(!session.reveals.is_animating(user));
    assert!(!session.reveals.is_animating(error));
}

#[test]
fn test_session_tick_finishes_reveals() {
    let t0 = Instant::now();
    let mut session = TerminalSession::new(&AppConfig::default());
    let id = session.system_message("ok", t0);

    session.tick(t0 + STEP);
    assert_eq!(session.reveals.visible(id), Some("o"));
    session.tick(t0 + STEP * 2);
    assert_eq!(session.reveals.visible(id), None);
    assert_eq!(session.conversation.messages()[0].content, "ok");
}
