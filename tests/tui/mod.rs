//! TUI tests module

mod action_tests;
mod console_input_tests;
