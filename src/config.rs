//! Service configuration parsed from environment variables.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SESSION_IDLE_TTL_SECS: u64 = 1800;
pub const DEFAULT_CATALOG_PATH: &str = "data/plastic_alternative_dataset.csv";
pub const DEFAULT_FAQ_PATH: &str = "data/chatbot_data.csv";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid SESSION_IDLE_TTL_SECS: {0}")]
    InvalidSessionTtl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub catalog_path: PathBuf,
    pub faq_path: PathBuf,
    pub website_dir: Option<PathBuf>,
    pub cookie_secure: bool,
    pub session_idle_ttl: Duration,
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CATALOG_PATH`: default `data/plastic_alternative_dataset.csv`
    /// - `FAQ_PATH`: default `data/chatbot_data.csv`
    /// - `WEBSITE_DIR`: static front end served as the fallback, none when absent
    /// - `COOKIE_SECURE`: default false
    /// - `SESSION_IDLE_TTL_SECS`: idle seconds before a chat session ends, default 1800
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPort` if `PORT` is set but not a valid port,
    /// or `ConfigError::InvalidSessionTtl` if `SESSION_IDLE_TTL_SECS` is not a
    /// positive number of seconds.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let ttl_secs = match std::env::var("SESSION_IDLE_TTL_SECS") {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => return Err(ConfigError::InvalidSessionTtl(raw)),
            },
            Err(_) => DEFAULT_SESSION_IDLE_TTL_SECS,
        };

        Ok(Self {
            port,
            catalog_path: env_path("CATALOG_PATH").unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH)),
            faq_path: env_path("FAQ_PATH").unwrap_or_else(|| PathBuf::from(DEFAULT_FAQ_PATH)),
            website_dir: env_path("WEBSITE_DIR"),
            cookie_secure: env_bool("COOKIE_SECURE").unwrap_or(false),
            session_idle_ttl: Duration::from_secs(ttl_secs),
        })
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
