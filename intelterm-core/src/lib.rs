//! Core of the intelligence terminal
//!
//! Holds every piece of state the terminal UI draws and every transition it
//! can make, without touching the terminal itself. The UI crate feeds key
//! presses and clock ticks in; the query transport talks to `POST /query`.

pub mod application;
pub mod config;
pub mod constants;
pub mod domain;
pub mod infrastructure;

pub use application::{Submission, TerminalSession};
pub use config::{AppConfig, ConfigError, Timing};
pub use domain::{Message, MessageId, MessageKind, SessionId, ThemeName};
pub use infrastructure::query::{
    HttpQueryClient, QueryError, QueryReply, QueryRequest, QueryTransport, dispatch,
};
