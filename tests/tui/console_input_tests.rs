//! Console key handling

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use intelterm_cli::tui::screens::console::{ConsoleAction, handle_input};
use intelterm_core::{AppConfig, TerminalSession};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn session() -> TerminalSession {
    TerminalSession::new(&AppConfig::default())
}

fn type_text(session: &mut TerminalSession, text: &str) {
    for c in text.chars() {
        handle_input(session, key(KeyCode::Char(c)));
    }
}

#[test]
fn test_editing_keys() {
    let mut session = session();
    type_text(&mut session, "Helo");
    handle_input(&mut session, key(KeyCode::Left));
    type_text(&mut session, "l");
    assert_eq!(session.conversation.input.value(), "Hello");

    handle_input(&mut session, key(KeyCode::Home));
    handle_input(&mut session, key(KeyCode::Delete));
    assert_eq!(session.conversation.input.value(), "ello");

    handle_input(&mut session, key(KeyCode::End));
    assert_eq!(session.conversation.input.cursor(), 4);

    handle_input(&mut session, key(KeyCode::Esc));
    assert!(session.conversation.input.is_empty());
}

#[test]
fn test_navigation_keys_map_to_actions() {
    let mut session = session();
    assert_eq!(handle_input(&mut session, key(KeyCode::Enter)), ConsoleAction::Submit);
    assert_eq!(
        handle_input(&mut session, key(KeyCode::Up)),
        ConsoleAction::HistoryPrevious
    );
    assert_eq!(
        handle_input(&mut session, key(KeyCode::Down)),
        ConsoleAction::HistoryNext
    );
    assert_eq!(
        handle_input(&mut session, key(KeyCode::PageUp)),
        ConsoleAction::ScrollUp
    );
    assert_eq!(
        handle_input(&mut session, key(KeyCode::PageDown)),
        ConsoleAction::ScrollDown
    );
}

#[test]
fn test_control_shortcuts() {
    let mut session = session();
    assert_eq!(handle_input(&mut session, ctrl('q')), ConsoleAction::Quit);
    assert_eq!(handle_input(&mut session, ctrl('l')), ConsoleAction::Logout);
    assert_eq!(handle_input(&mut session, ctrl('t')), ConsoleAction::CycleTheme);
    assert_eq!(
        handle_input(&mut session, ctrl('d')),
        ConsoleAction::ToggleDarkMode
    );
    assert_eq!(
        handle_input(&mut session, key(KeyCode::F(2))),
        ConsoleAction::ToggleMenu
    );
}

#[test]
fn test_input_disabled_while_in_flight() {
    let mut session = session();
    session.conversation.input.set("first");
    session.submit();
    assert!(session.conversation.in_flight());

    type_text(&mut session, "abc");
    assert!(session.conversation.input.is_empty());
    assert_eq!(handle_input(&mut session, key(KeyCode::Enter)), ConsoleAction::None);
    assert_eq!(handle_input(&mut session, key(KeyCode::Up)), ConsoleAction::None);

    // Quitting and scrolling still work
    assert_eq!(handle_input(&mut session, ctrl('q')), ConsoleAction::Quit);
    assert_eq!(
        handle_input(&mut session, key(KeyCode::PageUp)),
        ConsoleAction::ScrollUp
    );
}

#[test]
fn test_open_menu_captures_arrows() {
    let mut session = session();
    session.toggle_menu();

    assert_eq!(handle_input(&mut session, key(KeyCode::Up)), ConsoleAction::MenuUp);
    assert_eq!(
        handle_input(&mut session, key(KeyCode::Down)),
        ConsoleAction::MenuDown
    );
    assert_eq!(
        handle_input(&mut session, key(KeyCode::Enter)),
        ConsoleAction::MenuSelect
    );
    assert_eq!(
        handle_input(&mut session, key(KeyCode::Esc)),
        ConsoleAction::ToggleMenu
    );

    type_text(&mut session, "x");
    assert!(session.conversation.input.is_empty());
}
