pub mod app;
pub mod error;
pub mod loader;

pub use crate::constants::CONFIG_PATH;
pub use app::{AppConfig, Timing};
pub use error::ConfigError;
pub use loader::parse_config;
