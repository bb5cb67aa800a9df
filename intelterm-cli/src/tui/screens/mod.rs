//! TUI screens: the access gate and the console

pub mod console;
pub mod login;
