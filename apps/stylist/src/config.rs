use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed numbers fail at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub backend_url: String,
    pub port: u16,
    /// How long a notification stays on screen.
    pub notification_ttl: Duration,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            backend_url: std::env::var("BACKEND_URL")
                .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            notification_ttl: Duration::from_secs(
                std::env::var("NOTIFICATION_SECS")
                    .unwrap_or_else(|_| "6".to_string())
                    .parse::<u64>()
                    .context("NOTIFICATION_SECS must be a whole number of seconds")?,
            ),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            port: 3000,
            notification_ttl: Duration::from_secs(6),
            rust_log: "info".to_string(),
        }
    }
}
