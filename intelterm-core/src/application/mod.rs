//! Application layer: the state records and their transitions
//!
//! - gate.rs: access gate
//! - conversation.rs: message log and the pending → resolved query cycle
//! - history.rs: command recall
//! - reveal.rs: typewriter animation
//! - chrome.rs: theme, menu and status panel
//! - session.rs: coordinates the above

pub mod chrome;
pub mod conversation;
pub mod gate;
pub mod history;
pub mod reveal;
pub mod session;

pub use chrome::{ChromeState, MenuAction, StatusPanel};
pub use conversation::{Conversation, PendingQuery, Submission};
pub use gate::{AuthState, GateEvent, GatePhase, is_valid_code};
pub use history::CommandHistory;
pub use reveal::RevealBoard;
pub use session::{MenuOutcome, TerminalSession};
