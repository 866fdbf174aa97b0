//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT value: {0:?}")]
    InvalidPort(String),
    #[error("API_BASE_URL must be an http(s) URL, got {0:?}")]
    InvalidApiBaseUrl(String),
    #[error("invalid PROXY_TIMEOUT_SECS value: {0:?}")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Backend survey API root, without a trailing slash.
    pub api_base_url: String,
    pub proxy_timeout_secs: u64,
}

impl Config {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `API_BASE_URL`: default `http://localhost:8080`
    /// - `PROXY_TIMEOUT_SECS`: default 30
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let api_base_url = lookup("API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned());
        let api_base_url = api_base_url.trim().trim_end_matches('/').to_owned();
        if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidApiBaseUrl(api_base_url));
        }

        let proxy_timeout_secs = match lookup("PROXY_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => DEFAULT_PROXY_TIMEOUT_SECS,
        };

        Ok(Self { port, api_base_url, proxy_timeout_secs })
    }
}
