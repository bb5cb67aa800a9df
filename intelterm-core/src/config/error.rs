use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found at {path:?}")]
    NotFound { path: PathBuf },

    #[error("failed to read config from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config from {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown theme '{theme}' (expected green, blue or amber)")]
    InvalidTheme { theme: String },

    #[error("endpoint '{endpoint}' must be an http:// or https:// URL")]
    InvalidEndpoint { endpoint: String },

    #[error("timing value '{field}' must be greater than zero")]
    ZeroTiming { field: &'static str },
}
