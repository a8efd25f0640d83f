//! Configuration loaded from environment variables (and `.env` if present).

use std::env;

pub const DEFAULT_DB_PATH: &str = "fitlog.db";
pub const DEFAULT_TIP_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TIP_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    Missing(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite file backing the key-value store
    pub db_path: String,
    /// Credential for the text-generation API. Only checked when a tip is requested.
    pub api_key: Option<String>,
    pub tip_model: String,
    pub tip_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: DEFAULT_DB_PATH.to_string(),
            api_key: None,
            tip_model: DEFAULT_TIP_MODEL.to_string(),
            tip_base_url: DEFAULT_TIP_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Never fails: a missing API key is reported by [`Config::api_key`] at call time.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            db_path: env::var("FITLOG_DB").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string()),
            api_key: env::var("API_KEY")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            tip_model: env::var("FITLOG_TIP_MODEL")
                .unwrap_or_else(|_| DEFAULT_TIP_MODEL.to_string()),
            tip_base_url: env::var("FITLOG_TIP_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_TIP_BASE_URL.to_string()),
        }
    }

    pub fn api_key(&self) -> Result<&str, ConfigError> {
        self.api_key.as_deref().ok_or(ConfigError::Missing("API_KEY"))
    }
}
