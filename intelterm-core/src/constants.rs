//! Application constants
//!
//! Single source of truth for paths, canned terminal text and timing defaults.

/// Default configuration file path
pub const CONFIG_PATH: &str = "config/intelterm.toml";

/// Default environment file path
pub const ENV_PATH: &str = "config/.env";

/// Environment variable overriding the query endpoint
pub const ENDPOINT_ENV: &str = "INTELTERM_ENDPOINT";

/// Default base URL of the answering service
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000";

/// Path of the query route, relative to the endpoint
pub const QUERY_PATH: &str = "/query";

pub const DEFAULT_REVEAL_INTERVAL_MS: u64 = 15;
pub const DEFAULT_VERIFY_DELAY_MS: u64 = 1200;
pub const DEFAULT_ESCALATION_DELAY_MS: u64 = 1000;

/// Codes accepted by the access gate. Cosmetic, not a credential store.
pub const ACCESS_CODES: [&str; 2] = ["IMF-1996", "4815162342"];

/// Alphabet for session ids (no I, O, 0 or 1)
pub const SESSION_ID_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
pub const SESSION_ID_LEN: usize = 8;

pub const AUTH_DENIED: &str = "Authentication failed. Security protocol engaged.";
pub const AUTH_ESCALATED: &str = "Access denied. Countermeasures active.";
pub const AUTH_WELCOME: &str = "Authentication successful. Welcome to IMF Intelligence Terminal.";

pub const PROCESSING_TEXT: &str = "Processing query...";
pub const TRANSMISSION_ERROR_PREFIX: &str = "Mission Transmission Error: Secure Channel Compromised.";
pub const CONNECTION_FAILURE: &str =
    "Error: Connection failure. Terminal security may be compromised.";

pub const CLEARANCE: &str = "SAP/LEVEL 5";
