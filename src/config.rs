//! Client configuration loaded from environment variables.
//!
//! A `.env` file is honoured for local development.

use crate::models::Language;
use crate::services::session::Credentials;
use std::env;

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Client configuration, loaded once at startup.
#[derive(Clone)]
pub struct Config {
    // --- Secrets ---
    /// Epic account email
    pub email: String,
    /// Epic account password
    pub password: String,
    /// Launcher client basic credential (base64 `id:secret`)
    pub client_launcher_token: String,
    /// Fortnite client basic credential (base64 `id:secret`)
    pub fortnite_client_token: String,

    // --- Behaviour ---
    /// Language for localized content
    pub language: Language,
    /// Per-request HTTP timeout
    pub http_timeout_secs: u64,
    /// Refresh an expired token before each query
    pub auto_refresh: bool,
    /// Send every request to this host instead of the Epic services
    pub base_url: Option<String>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("email", &self.email)
            .field("language", &self.language)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .field("auto_refresh", &self.auto_refresh)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            email: required("FORTNITE_EMAIL")?,
            password: required("FORTNITE_PASSWORD")?,
            client_launcher_token: required("FORTNITE_CLIENT_LAUNCHER_TOKEN")?,
            fortnite_client_token: required("FORTNITE_CLIENT_TOKEN")?,
            language: env::var("FORTNITE_LANGUAGE")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or_default(),
            http_timeout_secs: match env::var("FORTNITE_HTTP_TIMEOUT_SECS") {
                Ok(v) => v
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Invalid("FORTNITE_HTTP_TIMEOUT_SECS", v))?,
                Err(_) => DEFAULT_HTTP_TIMEOUT_SECS,
            },
            auto_refresh: match env::var("FORTNITE_AUTO_REFRESH") {
                Ok(v) => parse_bool(&v)
                    .ok_or(ConfigError::Invalid("FORTNITE_AUTO_REFRESH", v))?,
                Err(_) => true,
            },
            base_url: env::var("FORTNITE_BASE_URL")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
        })
    }

    /// Config with placeholder secrets, for tests.
    pub fn test_default() -> Self {
        Self {
            email: "player@example.com".to_string(),
            password: "test_password".to_string(),
            client_launcher_token: "test_launcher_token".to_string(),
            fortnite_client_token: "test_client_token".to_string(),
            language: Language::En,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            auto_refresh: true,
            base_url: None,
        }
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(
            self.email.clone(),
            self.password.clone(),
            self.client_launcher_token.clone(),
            self.fortnite_client_token.clone(),
        )
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .map(|v| v.trim().to_string())
        .map_err(|_| ConfigError::Missing(name))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}

impl From<ConfigError> for crate::error::ApiError {
    fn from(err: ConfigError) -> Self {
        crate::error::ApiError::Config(err.to_string())
    }
}
