//! Reusable TUI widgets

mod menu;

pub use menu::{MenuOverlay, centered};
