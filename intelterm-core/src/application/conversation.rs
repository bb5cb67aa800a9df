//! Conversation state: message log, input line, history and the in-flight query

use super::history::CommandHistory;
use crate::constants::PROCESSING_TEXT;
use crate::domain::{InputLine, Message, MessageId, MessageIdGen, MessageKind};
use crate::infrastructure::query::{QueryReply, QueryRequest};
use tracing::{debug, warn};
use uuid::Uuid;

/// A submitted query waiting for its reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingQuery {
    pub request_id: Uuid,
    /// The "Processing query..." placeholder to drop on resolution
    pub placeholder: MessageId,
}

/// Result of trying to submit the input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Nothing but whitespace was typed
    Empty,
    /// Another query is still in flight
    Busy,
    Accepted(QueryRequest),
}

#[derive(Debug, Default)]
pub struct Conversation {
    messages: Vec<Message>,
    pub input: InputLine,
    pub history: CommandHistory,
    pending: Option<PendingQuery>,
    ids: MessageIdGen,
    /// Scroll offset for messages; `u16::MAX` pins the view to the bottom
    pub scroll_offset: u16,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn pending(&self) -> Option<&PendingQuery> {
        self.pending.as_ref()
    }

    /// Submission guard: true while a query is outstanding
    pub fn in_flight(&self) -> bool {
        self.pending.is_some()
    }

    /// Append a message to the log
    pub fn push(&mut self, kind: MessageKind, content: impl Into<String>) -> MessageId {
        let id = self.ids.next_id();
        self.messages.push(Message::new(id, kind, content));
        self.scroll_to_bottom();
        id
    }

    /// Turn the input line into a query, if it holds one and nothing is in flight
    pub fn submit(&mut self) -> Submission {
        if self.input.value().trim().is_empty() {
            return Submission::Empty;
        }
        if self.in_flight() {
            return Submission::Busy;
        }

        let query = self.input.take().trim().to_string();
        self.push(MessageKind::User, query.clone());
        self.history.record(&query);

        let request_id = Uuid::new_v4();
        let placeholder = self.push(MessageKind::Processing, PROCESSING_TEXT);
        self.pending = Some(PendingQuery {
            request_id,
            placeholder,
        });
        debug!(%request_id, "Query accepted");

        Submission::Accepted(QueryRequest { request_id, query })
    }

    /// Settle the pending query. Returns the id and kind of the message that
    /// replaced the placeholder, or `None` if the reply is stale.
    pub fn resolve(&mut self, reply: QueryReply) -> Option<(MessageId, MessageKind)> {
        let pending = match self.pending {
            Some(p) if p.request_id == reply.request_id => p,
            _ => {
                warn!(request_id = %reply.request_id, "Dropping reply for unknown request");
                return None;
            }
        };

        self.pending = None;
        self.messages.retain(|m| m.id != pending.placeholder);

        let (kind, content) = match reply.outcome {
            Ok(answer) => (MessageKind::Response, answer),
            Err(err) => (MessageKind::Error, err.user_message()),
        };
        Some((self.push(kind, content), kind))
    }

    /// Scroll messages up
    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    /// Scroll messages down
    pub fn scroll_down(&mut self, lines: u16, max_scroll: u16) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines).min(max_scroll);
    }

    /// Will be clamped during render based on content height
    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = u16::MAX;
    }

    /// Forget everything. Message ids keep counting so stale ids never collide.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.input.clear();
        self.history.clear();
        self.pending = None;
        self.scroll_offset = 0;
    }
}
