//! Access gate in front of the console
//!
//! Compares the typed code against a fixed allow-list after a short
//! "verifying" pause. This is flavour text, not authentication: the codes are
//! compiled into the binary and nothing downstream trusts the result.

use crate::constants::{ACCESS_CODES, AUTH_DENIED, AUTH_ESCALATED};
use crate::domain::InputLine;
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatePhase {
    /// Waiting for a code
    Locked,
    /// A code was submitted and is "being checked"
    Verifying { attempt: String, ready_at: Instant },
    /// The last attempt failed; the second warning fires at `escalate_at`
    Rejected { escalate_at: Option<Instant> },
    Granted,
}

/// Observable outcomes of the gate, in the order they happen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateEvent {
    Granted,
    Denied(&'static str),
    Escalated(&'static str),
}

/// Authentication state record
#[derive(Debug, Clone)]
pub struct AuthState {
    pub code: InputLine,
    phase: GatePhase,
    error: Option<&'static str>,
    verify_delay: Duration,
    escalation_delay: Duration,
}

pub fn is_valid_code(code: &str) -> bool {
    ACCESS_CODES.contains(&code)
}

impl AuthState {
    pub fn new(verify_delay: Duration, escalation_delay: Duration) -> Self {
        Self {
            code: InputLine::new(),
            phase: GatePhase::Locked,
            error: None,
            verify_delay,
            escalation_delay,
        }
    }

    pub fn phase(&self) -> &GatePhase {
        &self.phase
    }

    /// Warning currently displayed under the code field
    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn is_verifying(&self) -> bool {
        matches!(self.phase, GatePhase::Verifying { .. })
    }

    pub fn is_granted(&self) -> bool {
        self.phase == GatePhase::Granted
    }

    /// Submit the typed code. Ignored while a check is running or once granted.
    pub fn authenticate(&mut self, now: Instant) {
        if self.is_verifying() || self.is_granted() {
            return;
        }
        debug!("Access code submitted");
        self.error = None;
        self.phase = GatePhase::Verifying {
            attempt: self.code.value().to_string(),
            ready_at: now + self.verify_delay,
        };
    }

    /// Advance the gate's timers, returning whatever became visible
    pub fn tick(&mut self, now: Instant) -> Vec<GateEvent> {
        let mut events = Vec::new();

        let verdict = match &self.phase {
            GatePhase::Verifying { attempt, ready_at } if now >= *ready_at => {
                Some((is_valid_code(attempt), *ready_at))
            }
            _ => None,
        };

        match verdict {
            Some((true, _)) => {
                info!("Access granted");
                self.phase = GatePhase::Granted;
                events.push(GateEvent::Granted);
            }
            Some((false, ready_at)) => {
                info!("Access denied");
                self.phase = GatePhase::Rejected {
                    escalate_at: Some(ready_at + self.escalation_delay),
                };
                self.error = Some(AUTH_DENIED);
                events.push(GateEvent::Denied(AUTH_DENIED));
            }
            None => {}
        }

        if let GatePhase::Rejected {
            escalate_at: Some(at),
        } = self.phase
        {
            if now >= at {
                self.phase = GatePhase::Rejected { escalate_at: None };
                self.error = Some(AUTH_ESCALATED);
                events.push(GateEvent::Escalated(AUTH_ESCALATED));
            }
        }

        events
    }

    /// Next instant at which [`tick`](Self::tick) can change something
    pub fn next_deadline(&self) -> Option<Instant> {
        match &self.phase {
            GatePhase::Verifying { ready_at, .. } => Some(*ready_at),
            GatePhase::Rejected { escalate_at } => *escalate_at,
            _ => None,
        }
    }

    /// Back to a locked gate with an empty field
    pub fn reset(&mut self) {
        self.code.clear();
        self.phase = GatePhase::Locked;
        self.error = None;
    }
}
