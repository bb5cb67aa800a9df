//! Login input handling

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use intelterm_core::application::AuthState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginAction {
    None,
    Authenticate,
    Quit,
}

/// Handle keyboard input on the access gate and update the code field
pub fn handle_input(auth: &mut AuthState, event: Event) -> LoginAction {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(auth, key),
        _ => LoginAction::None,
    }
}

fn handle_key(auth: &mut AuthState, key: KeyEvent) -> LoginAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('q') {
        return LoginAction::Quit;
    }
    if key.code == KeyCode::Esc {
        return LoginAction::Quit;
    }
    // Field is disabled while the code is being checked
    if auth.is_verifying() {
        return LoginAction::None;
    }

    let code = &mut auth.code;
    match key.code {
        KeyCode::Enter => return LoginAction::Authenticate,
        KeyCode::Backspace => code.backspace(),
        KeyCode::Delete => code.delete(),
        KeyCode::Left => code.move_left(),
        KeyCode::Right => code.move_right(),
        KeyCode::Home => code.move_home(),
        KeyCode::End => code.move_end(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => code.clear(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => code.insert(c),
        _ => {}
    }
    LoginAction::None
}
