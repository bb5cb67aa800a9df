//! Terminal session: the one owner of all mutable UI state
//!
//! Three named records (authentication, conversation, chrome) plus the
//! running reveals. Every user-visible transition goes through a method here
//! so the rule "system and response messages are typed out" lives in one place.

use super::chrome::{ChromeState, MenuAction};
use super::conversation::{Conversation, Submission};
use super::gate::{AuthState, GateEvent};
use super::reveal::RevealBoard;
use crate::config::AppConfig;
use crate::constants::{AUTH_WELCOME, CLEARANCE};
use crate::domain::{MessageId, MessageKind, SessionId, ThemeName};
use crate::infrastructure::query::QueryReply;
use chrono::Local;
use std::time::Instant;
use tracing::info;

/// What the caller should do after a menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    Nothing,
    ThemeChanged(ThemeName),
    LoggedOut,
}

pub struct TerminalSession {
    pub session_id: SessionId,
    pub auth: AuthState,
    pub conversation: Conversation,
    pub chrome: ChromeState,
    pub reveals: RevealBoard,
}

impl TerminalSession {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_session_id(config, SessionId::generate())
    }

    pub fn with_session_id(config: &AppConfig, session_id: SessionId) -> Self {
        Self {
            session_id,
            auth: AuthState::new(config.timing.verify_delay, config.timing.escalation_delay),
            conversation: Conversation::new(),
            chrome: ChromeState::new(config.theme),
            reveals: RevealBoard::new(config.timing.reveal_interval),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_granted()
    }

    /// Append a message, starting its reveal if the kind is animated
    pub fn announce(&mut self, kind: MessageKind, content: &str, now: Instant) -> MessageId {
        let id = self.conversation.push(kind, content);
        if kind.is_animated() {
            self.reveals.start(id, content, now);
        }
        id
    }

    pub fn system_message(&mut self, content: &str, now: Instant) -> MessageId {
        self.announce(MessageKind::System, content, now)
    }

    pub fn authenticate(&mut self, now: Instant) {
        self.auth.authenticate(now);
    }

    /// Advance gate timers and reveals. Returns gate events for logging/tests.
    pub fn tick(&mut self, now: Instant) -> Vec<GateEvent> {
        let events = self.auth.tick(now);
        if events.contains(&GateEvent::Granted) {
            self.on_granted(now);
        }
        self.reveals.tick(now);
        events
    }

    fn on_granted(&mut self, now: Instant) {
        info!(session = %self.session_id, "Terminal unlocked");
        self.auth.code.clear();
        self.system_message(AUTH_WELCOME, now);
        let stamp = Local::now().format("%b %-d, %Y, %H:%M");
        let info = format!(
            "IMF INTELLIGENCE TERMINAL INITIALIZED: {stamp} | SESSION ID: {} | CLEARANCE: {CLEARANCE}",
            self.session_id
        );
        self.system_message(&info, now);
    }

    /// Submit the input line as a query
    pub fn submit(&mut self) -> Submission {
        self.conversation.submit()
    }

    /// Apply a reply; stale replies are dropped
    pub fn resolve(&mut self, reply: QueryReply, now: Instant) -> Option<MessageId> {
        let (id, kind) = self.conversation.resolve(reply)?;
        if kind.is_animated() {
            if let Some(message) = self.conversation.messages().last() {
                let content = message.content.clone();
                self.reveals.start(id, &content, now);
            }
        }
        Some(id)
    }

    pub fn recall_previous(&mut self) {
        if let Some(entry) = self.conversation.history.previous() {
            let entry = entry.to_string();
            self.conversation.input.set(entry);
        }
    }

    pub fn recall_next(&mut self) {
        if let Some(entry) = self.conversation.history.next() {
            let entry = entry.to_string();
            self.conversation.input.set(entry);
        }
    }

    pub fn change_theme(&mut self, theme: ThemeName, now: Instant) {
        self.chrome.theme = theme;
        info!(theme = theme.as_str(), "Theme changed");
        self.system_message(&format!("Terminal theme updated to {theme}"), now);
    }

    pub fn cycle_theme(&mut self, now: Instant) {
        self.change_theme(self.chrome.theme.next(), now);
    }

    pub fn toggle_menu(&mut self) {
        self.chrome.toggle_menu();
    }

    /// Run the highlighted menu entry and close the menu
    pub fn activate_menu(&mut self, now: Instant) -> MenuOutcome {
        let Some(action) = self.chrome.selected_action() else {
            return MenuOutcome::Nothing;
        };
        self.chrome.close_menu();
        match action {
            MenuAction::ChangeTheme => {
                self.cycle_theme(now);
                MenuOutcome::ThemeChanged(self.chrome.theme)
            }
            MenuAction::ExitTerminal => {
                self.reset();
                MenuOutcome::LoggedOut
            }
        }
    }

    /// Back to the access gate with nothing remembered
    pub fn reset(&mut self) {
        info!(session = %self.session_id, "Terminal reset");
        self.auth.reset();
        self.conversation.clear();
        self.reveals.clear();
        self.chrome.close_menu();
    }
}
