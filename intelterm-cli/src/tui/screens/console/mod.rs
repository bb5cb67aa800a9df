//! Console screen: the authenticated chat view
//!
//! - input.rs: key handling
//! - ui.rs: rendering

mod input;
mod ui;

pub use input::{ConsoleAction, handle_input};
pub use ui::{ConsoleUI, lines_to_string, message_lines};
