use std::{env, time::Duration};

const DEFAULT_DATABASE_PATH: &str = "items.db";
const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 10;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to SQLite database file (default: "items.db")
    pub database_path: String,
    /// Seconds before an in-flight request is answered with 408 (default: 10)
    pub request_timeout_seconds: u64,
    /// Largest accepted request body in bytes, `None` for no limit (default: None)
    pub max_body_bytes: Option<usize>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ITEMS_DATABASE_PATH` - SQLite database path (default: "items.db")
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout in seconds (default: 10)
    /// - `MAX_BODY_BYTES` - Request body limit in bytes (default: unlimited)
    pub fn from_env() -> Self {
        Self {
            database_path: env::var("ITEMS_DATABASE_PATH")
                .unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string()),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECONDS),
            max_body_bytes: env::var("MAX_BODY_BYTES")
                .ok()
                .and_then(|v| v.parse().ok()),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: DEFAULT_DATABASE_PATH.to_string(),
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
            max_body_bytes: None,
        }
    }
}
