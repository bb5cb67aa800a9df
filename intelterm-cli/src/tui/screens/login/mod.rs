//! Access gate screen
//!
//! - input.rs: key handling for the code field
//! - ui.rs: rendering

mod input;
mod ui;

pub use input::{LoginAction, handle_input};
pub use ui::{LoginUI, SPINNER};
