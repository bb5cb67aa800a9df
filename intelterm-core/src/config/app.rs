use super::error::ConfigError;
use crate::constants::{
    DEFAULT_ENDPOINT, DEFAULT_ESCALATION_DELAY_MS, DEFAULT_REVEAL_INTERVAL_MS,
    DEFAULT_VERIFY_DELAY_MS,
};
use crate::domain::ThemeName;
use std::path::Path;
use std::time::Duration;

/// Delays driving the cosmetic animations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Time between revealed characters
    pub reveal_interval: Duration,
    /// Pause before the access gate answers
    pub verify_delay: Duration,
    /// Pause between the first and second rejection message
    pub escalation_delay: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            reveal_interval: Duration::from_millis(DEFAULT_REVEAL_INTERVAL_MS),
            verify_delay: Duration::from_millis(DEFAULT_VERIFY_DELAY_MS),
            escalation_delay: Duration::from_millis(DEFAULT_ESCALATION_DELAY_MS),
        }
    }
}

/// Application configuration loaded from intelterm.toml
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the answering service; `/query` is appended
    pub endpoint: String,
    pub theme: ThemeName,
    pub timing: Timing,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            theme: ThemeName::default(),
            timing: Timing::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a file path (or default path if None)
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_config(path)
    }

    /// Apply an endpoint override, validating it the same way as the file value
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Result<Self, ConfigError> {
        self.endpoint = super::loader::validate_endpoint(endpoint.into())?;
        Ok(self)
    }

    pub fn with_theme(mut self, theme: ThemeName) -> Self {
        self.theme = theme;
        self
    }
}
