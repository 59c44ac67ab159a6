//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use board_infra::HttpApiConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub api: HttpApiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = HttpApiConfig::default();

        let api = HttpApiConfig {
            base_url: env::var("BOARD_API_URL").unwrap_or(defaults.base_url),
            timeout: env::var("BOARD_API_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            api,
        }
    }
}
