//! Terminal messages

use chrono::{DateTime, Local};
use std::fmt;

/// Unique, monotonically increasing message identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    User,
    System,
    Response,
    Error,
    Processing,
}

impl MessageKind {
    /// Whether new messages of this kind are typed out character by character
    pub fn is_animated(self) -> bool {
        matches!(self, MessageKind::System | MessageKind::Response)
    }
}

/// A single line item in the terminal log
#[derive(Debug, Clone)]
pub struct Message {
    pub id: MessageId,
    pub content: String,
    pub kind: MessageKind,
    pub timestamp: DateTime<Local>,
}

impl Message {
    pub fn new(id: MessageId, kind: MessageKind, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            kind,
            timestamp: Local::now(),
        }
    }
}

/// Hands out message ids for one session
#[derive(Debug, Default)]
pub struct MessageIdGen {
    next: u64,
}

impl MessageIdGen {
    pub fn next_id(&mut self) -> MessageId {
        self.next += 1;
        MessageId(self.next)
    }
}
