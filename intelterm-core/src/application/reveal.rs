//! Typewriter-style text reveal
//!
//! Each reveal is keyed by the message it belongs to, so any number can run
//! side by side. Progress is a pure function of elapsed time: the UI loop
//! calls [`RevealBoard::tick`] with the current instant and finished reveals
//! drop out on their own.

use crate::domain::MessageId;
use std::collections::HashMap;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Reveal {
    text: String,
    /// Total characters in `text`
    total: usize,
    /// Characters currently shown
    shown: usize,
    /// Byte length of the shown prefix
    shown_bytes: usize,
    started: Instant,
}

impl Reveal {
    fn advance(&mut self, now: Instant, interval: Duration) {
        let elapsed = now.saturating_duration_since(self.started);
        let due = (elapsed.as_nanos() / interval.as_nanos().max(1)) as usize;
        let target = due.min(self.total);
        if target > self.shown {
            self.shown_bytes = self
                .text
                .char_indices()
                .nth(target)
                .map(|(i, _)| i)
                .unwrap_or(self.text.len());
            self.shown = target;
        }
    }

    fn is_done(&self) -> bool {
        self.shown >= self.total
    }
}

/// All reveals currently in progress
#[derive(Debug, Clone)]
pub struct RevealBoard {
    interval: Duration,
    active: HashMap<MessageId, Reveal>,
}

impl RevealBoard {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            active: HashMap::new(),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Begin revealing `text` for message `id`. Empty text finishes immediately.
    pub fn start(&mut self, id: MessageId, text: &str, now: Instant) {
        if text.is_empty() {
            return;
        }
        self.active.insert(
            id,
            Reveal {
                text: text.to_string(),
                total: text.chars().count(),
                shown: 0,
                shown_bytes: 0,
                started: now,
            },
        );
    }

    /// Advance every reveal to `now` and drop the finished ones
    pub fn tick(&mut self, now: Instant) {
        let interval = self.interval;
        for reveal in self.active.values_mut() {
            reveal.advance(now, interval);
        }
        self.active.retain(|_, r| !r.is_done());
    }

    /// The revealed prefix while animating, `None` once the text is complete
    pub fn visible(&self, id: MessageId) -> Option<&str> {
        self.active.get(&id).map(|r| &r.text[..r.shown_bytes])
    }

    pub fn is_animating(&self, id: MessageId) -> bool {
        self.active.contains_key(&id)
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    /// Teardown: stop every reveal without finishing it
    pub fn clear(&mut self) {
        self.active.clear();
    }
}
