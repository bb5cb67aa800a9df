//! TUI module for the terminal user interface using Ratatui
//!
//! - runner.rs: event loop tying the session, screens and query task together
//! - screens/: access gate and console
//! - markdown.rs: rich text for system and response messages
//! - theme.rs: palettes per theme

pub mod markdown;
mod runner;
pub mod screens;
mod terminal;
pub mod theme;
mod widgets;

pub use runner::{Flow, apply_console_action, run_terminal};
pub use terminal::{Tui, restore_terminal};
