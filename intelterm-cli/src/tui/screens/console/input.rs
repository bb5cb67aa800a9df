//! Console input handling

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use intelterm_core::TerminalSession;

/// Input action result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleAction {
    /// No action needed
    None,
    /// Submit the current input
    Submit,
    /// Quit the application
    Quit,
    /// Exit the terminal back to the access gate
    Logout,
    HistoryPrevious,
    HistoryNext,
    ScrollUp,
    ScrollDown,
    ScrollTop,
    ScrollBottom,
    ToggleMenu,
    MenuUp,
    MenuDown,
    MenuSelect,
    CycleTheme,
    ToggleDarkMode,
}

/// Handle keyboard input; editing keys update the input line directly
pub fn handle_input(session: &mut TerminalSession, event: Event) -> ConsoleAction {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(session, key),
        _ => ConsoleAction::None,
    }
}

fn handle_key(session: &mut TerminalSession, key: KeyEvent) -> ConsoleAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl {
        match key.code {
            KeyCode::Char('q') => return ConsoleAction::Quit,
            KeyCode::Char('l') => return ConsoleAction::Logout,
            KeyCode::Char('t') => return ConsoleAction::CycleTheme,
            KeyCode::Char('d') => return ConsoleAction::ToggleDarkMode,
            KeyCode::Home => return ConsoleAction::ScrollTop,
            KeyCode::End => return ConsoleAction::ScrollBottom,
            _ => {}
        }
    }

    if key.code == KeyCode::F(2) {
        return ConsoleAction::ToggleMenu;
    }

    if session.chrome.menu_open() {
        return match key.code {
            KeyCode::Up => ConsoleAction::MenuUp,
            KeyCode::Down => ConsoleAction::MenuDown,
            KeyCode::Enter => ConsoleAction::MenuSelect,
            KeyCode::Esc => ConsoleAction::ToggleMenu,
            _ => ConsoleAction::None,
        };
    }

    match key.code {
        KeyCode::PageUp => return ConsoleAction::ScrollUp,
        KeyCode::PageDown => return ConsoleAction::ScrollDown,
        _ => {}
    }

    // Input is disabled while a query is in flight
    if session.conversation.in_flight() {
        return ConsoleAction::None;
    }

    let input = &mut session.conversation.input;
    match key.code {
        KeyCode::Enter => return ConsoleAction::Submit,
        KeyCode::Up => return ConsoleAction::HistoryPrevious,
        KeyCode::Down => return ConsoleAction::HistoryNext,
        KeyCode::Esc => input.clear(),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        KeyCode::Char('c') if ctrl => input.clear(),
        KeyCode::Char('u') if ctrl => input.clear(),
        KeyCode::Char(c) if !ctrl => input.insert(c),
        KeyCode::Tab => {
            input.insert(' ');
            input.insert(' ');
        }
        _ => {}
    }
    ConsoleAction::None
}
