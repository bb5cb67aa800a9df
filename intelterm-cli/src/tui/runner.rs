//! Terminal runner - main event loop coordinator

use super::screens::console::{self, ConsoleAction, ConsoleUI};
use super::screens::login::{self, LoginAction, LoginUI};
use super::terminal::{Tui, init_terminal, install_panic_hook, restore_terminal};
use crossterm::event;
use intelterm_core::application::MenuOutcome;
use intelterm_core::{QueryReply, QueryTransport, Submission, TerminalSession, dispatch};
use std::error::Error;
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Redraw cadence while something is animating
const ANIMATION_FRAME: Duration = Duration::from_millis(15);
/// Redraw cadence while idle (keeps the clock ticking)
const IDLE_FRAME: Duration = Duration::from_millis(250);
const SPINNER_FRAME: Duration = Duration::from_millis(120);
const SCROLL_STEP: u16 = 5;

/// Whether the loop should keep going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Run the terminal UI until the user quits
pub async fn run_terminal(
    mut session: TerminalSession,
    transport: Arc<dyn QueryTransport>,
) -> Result<(), Box<dyn Error>> {
    install_panic_hook();
    let mut terminal = init_terminal()?;
    let result = run_loop(&mut terminal, &mut session, transport).await;
    settle(result, restore_terminal())
}

/// Combine the loop outcome with the terminal restore; the loop's error wins
fn settle(
    result: Result<(), Box<dyn Error>>,
    restored: io::Result<()>,
) -> Result<(), Box<dyn Error>> {
    match (result, restored) {
        (Err(err), Err(restore_err)) => {
            warn!(error = %restore_err, "Failed to restore terminal");
            Err(err)
        }
        (Err(err), Ok(())) => Err(err),
        (Ok(()), restored) => restored.map_err(Into::into),
    }
}

async fn run_loop(
    terminal: &mut Tui,
    session: &mut TerminalSession,
    transport: Arc<dyn QueryTransport>,
) -> Result<(), Box<dyn Error>> {
    let (reply_tx, mut reply_rx) = mpsc::channel::<QueryReply>(4);
    let started = Instant::now();
    let mut max_scroll: u16 = 0;

    loop {
        let now = Instant::now();
        for event in session.tick(now) {
            debug!(?event, "Gate event");
        }
        while let Ok(reply) = reply_rx.try_recv() {
            session.resolve(reply, Instant::now());
        }

        let spinner = (started.elapsed().as_millis() / SPINNER_FRAME.as_millis()) as usize;
        terminal.draw(|frame| {
            if session.is_authenticated() {
                max_scroll = ConsoleUI::render(frame, session, spinner);
            } else {
                LoginUI::render(frame, session, spinner);
            }
        })?;

        let animating = !session.reveals.is_idle()
            || session.auth.next_deadline().is_some()
            || session.conversation.in_flight();
        let timeout = if animating { ANIMATION_FRAME } else { IDLE_FRAME };

        if !event::poll(timeout)? {
            continue;
        }
        let event = event::read()?;
        let now = Instant::now();

        let flow = if session.is_authenticated() {
            let action = console::handle_input(session, event);
            apply_console_action(session, action, max_scroll, now, |request| {
                let transport = transport.clone();
                let tx = reply_tx.clone();
                tokio::spawn(async move {
                    let reply = dispatch(transport.as_ref(), request).await;
                    let _ = tx.send(reply).await;
                });
            })
        } else {
            match login::handle_input(&mut session.auth, event) {
                LoginAction::Authenticate => {
                    session.authenticate(now);
                    Flow::Continue
                }
                LoginAction::Quit => Flow::Quit,
                LoginAction::None => Flow::Continue,
            }
        };

        if flow == Flow::Quit {
            info!("Quit requested");
            return Ok(());
        }
    }
}

/// Apply a console action to the session. Accepted queries are handed to
/// `send`, which owns getting the reply back.
pub fn apply_console_action<F>(
    session: &mut TerminalSession,
    action: ConsoleAction,
    max_scroll: u16,
    now: Instant,
    send: F,
) -> Flow
where
    F: FnOnce(intelterm_core::QueryRequest),
{
    match action {
        ConsoleAction::None => {}
        ConsoleAction::Quit => return Flow::Quit,
        ConsoleAction::Submit => match session.submit() {
            Submission::Accepted(request) => {
                info!(request_id = %request.request_id, "Dispatching query");
                send(request);
            }
            Submission::Busy => debug!("Submission ignored, query in flight"),
            Submission::Empty => {}
        },
        ConsoleAction::Logout => session.reset(),
        ConsoleAction::HistoryPrevious => session.recall_previous(),
        ConsoleAction::HistoryNext => session.recall_next(),
        ConsoleAction::ScrollUp => {
            let conversation = &mut session.conversation;
            conversation.scroll_offset = conversation.scroll_offset.min(max_scroll);
            conversation.scroll_up(SCROLL_STEP);
        }
        ConsoleAction::ScrollDown => {
            let conversation = &mut session.conversation;
            conversation.scroll_down(SCROLL_STEP, max_scroll);
            if conversation.scroll_offset >= max_scroll {
                conversation.scroll_to_bottom();
            }
        }
        ConsoleAction::ScrollTop => session.conversation.scroll_offset = 0,
        ConsoleAction::ScrollBottom => session.conversation.scroll_to_bottom(),
        ConsoleAction::ToggleMenu => session.toggle_menu(),
        ConsoleAction::MenuUp => session.chrome.menu_previous(),
        ConsoleAction::MenuDown => session.chrome.menu_next(),
        ConsoleAction::MenuSelect => {
            if let MenuOutcome::LoggedOut = session.activate_menu(now) {
                info!("Exited terminal from menu");
            }
        }
        ConsoleAction::CycleTheme => session.cycle_theme(now),
        ConsoleAction::ToggleDarkMode => session.chrome.toggle_dark_mode(),
    }
    Flow::Continue
}
