//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local development.

use std::env;
use std::time::Duration;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // --- Environment Variables (non-sensitive) ---
    /// Server port
    pub port: u16,
    /// Garmin Connect API base URL
    pub garmin_api_url: String,
    /// Garmin OAuth token endpoint used for password login
    pub garmin_token_url: String,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Upper bound on the time spent handling one request
    pub request_timeout: Duration,
    /// Minimum spacing between password logins for the same user
    pub login_cooldown: Duration,

    // --- Secrets ---
    /// Shared key every API caller must present in `X-API-Key`
    pub api_key: String,
}

const DEFAULT_GARMIN_API_URL: &str = "https://connectapi.garmin.com";
const DEFAULT_GARMIN_TOKEN_URL: &str = "https://connectapi.garmin.com/oauth-service/oauth/token";

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            port: parse_var("PORT", 8080)?,
            garmin_api_url: env::var("GARMIN_API_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_GARMIN_API_URL.to_string()),
            garmin_token_url: env::var("GARMIN_TOKEN_URL")
                .unwrap_or_else(|_| DEFAULT_GARMIN_TOKEN_URL.to_string()),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            request_timeout: Duration::from_secs(parse_var("REQUEST_TIMEOUT_SECS", 30)?),
            login_cooldown: Duration::from_secs(parse_var("LOGIN_COOLDOWN_SECS", 60)?),

            api_key: env::var("RELAY_API_KEY")
                .map(|v| v.trim().to_string())
                .ok()
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing("RELAY_API_KEY"))?,
        })
    }

    /// Deterministic config for tests.
    pub fn test_default() -> Self {
        Self {
            port: 8080,
            garmin_api_url: "http://garmin.invalid".to_string(),
            garmin_token_url: "http://garmin.invalid/oauth/token".to_string(),
            frontend_url: "http://localhost:5173".to_string(),
            request_timeout: Duration::from_secs(5),
            login_cooldown: Duration::from_secs(60),
            api_key: "test_api_key".to_string(),
        }
    }
}

/// Read an optional numeric variable, falling back to `default` when unset.
fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid(name)),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
