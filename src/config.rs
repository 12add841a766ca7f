//! Configuration Module
//!
//! Handles loading explorer configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default PokeAPI root
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Explorer configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// PokeAPI root URL, without a trailing slash
    pub api_base_url: String,
    /// Cache sweep period and entry lifetime in seconds
    pub cache_interval: u64,
    /// HTTP request timeout in seconds
    pub request_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEAPI_BASE_URL` - API root (default: https://pokeapi.co/api/v2)
    /// - `CACHE_INTERVAL` - Cache interval in seconds (default: 300)
    /// - `REQUEST_TIMEOUT` - Request timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: env::var("POKEAPI_BASE_URL")
                .ok()
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.api_base_url),
            cache_interval: env::var("CACHE_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_interval),
            request_timeout: env::var("REQUEST_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout),
        }
    }

    /// Cache interval as a [`Duration`].
    pub fn cache_interval(&self) -> Duration {
        Duration::from_secs(self.cache_interval)
    }

    /// Request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            cache_interval: 300,
            request_timeout: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api_base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.cache_interval, 300);
        assert_eq!(config.request_timeout, 30);
        assert_eq!(config.cache_interval(), Duration::from_secs(300));
    }

    // Single test so the env var mutations do not race with each other
    #[test]
    fn test_config_from_env() {
        env::remove_var("POKEAPI_BASE_URL");
        env::remove_var("CACHE_INTERVAL");
        env::remove_var("REQUEST_TIMEOUT");

        let config = Config::from_env();
        assert_eq!(config.api_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.cache_interval, 300);
        assert_eq!(config.request_timeout, 30);

        env::set_var("POKEAPI_BASE_URL", "http://localhost:8080/api/v2/");
        env::set_var("CACHE_INTERVAL", "5");
        env::set_var("REQUEST_TIMEOUT", "not-a-number");

        let config = Config::from_env();
        assert_eq!(config.api_base_url, "http://localhost:8080/api/v2");
        assert_eq!(config.cache_interval(), Duration::from_secs(5));
        assert_eq!(config.request_timeout, 30);

        env::remove_var("POKEAPI_BASE_URL");
        env::remove_var("CACHE_INTERVAL");
        env::remove_var("REQUEST_TIMEOUT");
    }
}
