use std::env;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://api.a4f.co/v1";
pub const DEFAULT_MODEL: &str = "provider-1/chatgpt-4o-latest";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "public";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value {0:?}")]
    InvalidPort(String),
}

/// Where the proxy forwards prompts and with which credential.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub model: String,
    /// `None` when `A4F_API_KEY` is unset or empty.
    pub api_key: Option<String>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub static_dir: PathBuf,
    pub upstream: UpstreamConfig,
}

impl Config {
    /// Read `A4F_API_KEY`, `A4F_BASE_URL`, `A4F_MODEL`, `PORT` and `STATIC_DIR`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT").filter(|p| !p.is_empty()) {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        let upstream = UpstreamConfig {
            base_url: lookup("A4F_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: lookup("A4F_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key: lookup("A4F_API_KEY").filter(|key| !key.is_empty()),
        };

        Ok(Self {
            port,
            static_dir,
            upstream,
        })
    }
}
