use super::error::ConfigError;
use super::{AppConfig, Timing};
use crate::constants::{CONFIG_PATH, ENDPOINT_ENV, ENV_PATH};
use crate::domain::ThemeName;
use dotenvy::from_filename;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Once;
use std::time::Duration;
use tracing::{debug, info};

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
pub(super) struct RawConfig {
    pub endpoint: Option<String>,
    pub theme: Option<String>,
    #[serde(default)]
    pub timing: RawTiming,
}

#[derive(Debug, Deserialize, Default)]
pub(super) struct RawTiming {
    pub reveal_interval_ms: Option<u64>,
    pub verify_delay_ms: Option<u64>,
    pub escalation_delay_ms: Option<u64>,
}

/// Ensures environment variables are loaded from config/.env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename(ENV_PATH);
    });
}

/// Load and validate configuration.
///
/// An explicit path must exist. The default path is optional and falls back
/// to built-in defaults. `INTELTERM_ENDPOINT` overrides the file's endpoint.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    ensure_env_loaded();

    let raw = match path {
        Some(path) => read_config(path)?,
        None => match read_config(Path::new(CONFIG_PATH)) {
            Err(ConfigError::NotFound { .. }) => {
                debug!(path = CONFIG_PATH, "No configuration file, using defaults");
                RawConfig::default()
            }
            other => other?,
        },
    };

    let mut config = validate_and_build(raw)?;
    if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
        info!(env = ENDPOINT_ENV, "Endpoint overridden from environment");
        config.endpoint = validate_endpoint(endpoint)?;
    }
    Ok(config)
}

/// Parse configuration from a TOML string without touching the filesystem
pub fn parse_config(content: &str, origin: &Path) -> Result<AppConfig, ConfigError> {
    let parsed: RawConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: origin.to_path_buf(),
        source,
    })?;
    validate_and_build(parsed)
}

fn read_config(path: &Path) -> Result<RawConfig, ConfigError> {
    debug!(path = %path.display(), "Reading terminal configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn validate_and_build(parsed: RawConfig) -> Result<AppConfig, ConfigError> {
    let defaults = AppConfig::default();

    let endpoint = match parsed.endpoint {
        Some(endpoint) => validate_endpoint(endpoint)?,
        None => defaults.endpoint,
    };

    let theme = match parsed.theme {
        Some(theme) => theme
            .parse::<ThemeName>()
            .map_err(|theme| ConfigError::InvalidTheme { theme })?,
        None => defaults.theme,
    };

    let timing = Timing {
        reveal_interval: millis(
            parsed.timing.reveal_interval_ms,
            "reveal_interval_ms",
            defaults.timing.reveal_interval,
        )?,
        verify_delay: millis(
            parsed.timing.verify_delay_ms,
            "verify_delay_ms",
            defaults.timing.verify_delay,
        )?,
        escalation_delay: millis(
            parsed.timing.escalation_delay_ms,
            "escalation_delay_ms",
            defaults.timing.escalation_delay,
        )?,
    };

    Ok(AppConfig {
        endpoint,
        theme,
        timing,
    })
}

pub(super) fn validate_endpoint(endpoint: String) -> Result<String, ConfigError> {
    let trimmed = endpoint.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.trim_end_matches('/').to_string())
    } else {
        Err(ConfigError::InvalidEndpoint { endpoint })
    }
}

fn millis(
    value: Option<u64>,
    field: &'static str,
    default: Duration,
) -> Result<Duration, ConfigError> {
    match value {
        Some(0) => Err(ConfigError::ZeroTiming { field }),
        Some(ms) => Ok(Duration::from_millis(ms)),
        None => Ok(default),
    }
}
