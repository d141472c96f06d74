//! Configuration management for the Portal MCP Server.
//!
//! This module handles loading and validating configuration from environment variables.
//! It avoids polluting stdout (which MCP uses for communication) by loading the .env
//! file through dotenvy, which never prints.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the Portal MCP Server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Portal API base URL
    pub portal_api_url: String,

    /// Portal API key for authentication
    pub portal_api_key: String,

    /// Cache TTL in minutes (default: 30)
    /// Used for every collection cache (meetings, notices, directory, documents)
    pub cache_ttl_minutes: u64,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Number of meetings returned by the recent-meetings listing (default: 10)
    pub recent_meetings_limit: usize,

    /// Maximum accepted search query length in characters (default: 200)
    pub max_search_query_len: usize,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `PORTAL_API_BASE_URL`: Base URL for the portal API
    /// - `PORTAL_API_KEY`: API key for authentication
    ///
    /// Optional environment variables:
    /// - `PORTAL_CACHE_TTL_MINUTES`: Cache TTL in minutes (default: 30)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `RECENT_MEETINGS_LIMIT`: Recent meetings page size (default: 10)
    /// - `MAX_SEARCH_QUERY_LEN`: Max accepted query length (default: 200)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let portal_api_url = env::var("PORTAL_API_BASE_URL")
            .map_err(|_| ConfigError::MissingVar("PORTAL_API_BASE_URL".to_string()))?;

        let portal_api_key = env::var("PORTAL_API_KEY")
            .map_err(|_| ConfigError::MissingVar("PORTAL_API_KEY".to_string()))?;

        // Validate API URL format
        if !portal_api_url.starts_with("http://") && !portal_api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "PORTAL_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        // Validate API key is not empty
        if portal_api_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "PORTAL_API_KEY".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let cache_ttl_minutes = Self::parse_env_u64("PORTAL_CACHE_TTL_MINUTES", 30)?;
        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let recent_meetings_limit = Self::parse_env_usize("RECENT_MEETINGS_LIMIT", 10)?;
        let max_search_query_len = Self::parse_env_usize("MAX_SEARCH_QUERY_LEN", 200)?;

        if recent_meetings_limit == 0 {
            return Err(ConfigError::InvalidValue {
                var: "RECENT_MEETINGS_LIMIT".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            portal_api_url,
            portal_api_key,
            cache_ttl_minutes,
            request_timeout,
            recent_meetings_limit,
            max_search_query_len,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            portal_api_url: String::new(),
            portal_api_key: String::new(),
            cache_ttl_minutes: 30,
            request_timeout: 10,
            recent_meetings_limit: 10,
            max_search_query_len: 200,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.cache_ttl_minutes, 30);
        assert_eq!(config.request_timeout, 10);
        assert_eq!(config.recent_meetings_limit, 10);
        assert_eq!(config.max_search_query_len, 200);
    }

    #[test]
    #[serial]
    fn test_config_from_env_missing_required() {
        let mut guard = EnvGuard::new();

        // Load dotenv first (which Config::from_env would do)
        let _ = dotenvy::dotenv();

        // Now explicitly remove the required vars to simulate them being missing
        env::remove_var("PORTAL_API_BASE_URL");
        env::remove_var("PORTAL_API_KEY");

        let result = env::var("PORTAL_API_BASE_URL");
        assert!(result.is_err(), "PORTAL_API_BASE_URL should be missing");

        let api_url_result = env::var("PORTAL_API_BASE_URL")
            .map_err(|_| ConfigError::MissingVar("PORTAL_API_BASE_URL".to_string()));
        assert!(api_url_result.is_err());
        if let Err(ConfigError::MissingVar(var)) = api_url_result {
            assert_eq!(var, "PORTAL_API_BASE_URL");
        }

        // Set a minimal config to clean up
        guard.set("PORTAL_API_BASE_URL", "https://test.com");
        guard.set("PORTAL_API_KEY", "test");
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_url() {
        let mut guard = EnvGuard::new();
        guard.set("PORTAL_API_BASE_URL", "not-a-url");
        guard.set("PORTAL_API_KEY", "test-key");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "PORTAL_API_BASE_URL");
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_empty_api_key() {
        let mut guard = EnvGuard::new();
        guard.set("PORTAL_API_BASE_URL", "https://portal.example.org");
        guard.set("PORTAL_API_KEY", "   ");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "PORTAL_API_KEY");
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("PORTAL_API_BASE_URL", "https://portal.example.org");
        guard.set("PORTAL_API_KEY", "test-key-123");
        guard.set("PORTAL_CACHE_TTL_MINUTES", "60");
        guard.set("RECENT_MEETINGS_LIMIT", "25");

        let result = Config::from_env();
        if result.is_err() {
            eprintln!("Error: {:?}", result);
        }
        assert!(
            result.is_ok(),
            "Config should be valid with all required fields set"
        );

        let config = result.unwrap();
        assert_eq!(config.portal_api_url, "https://portal.example.org");
        assert_eq!(config.portal_api_key, "test-key-123");
        assert_eq!(config.cache_ttl_minutes, 60);
        assert_eq!(config.recent_meetings_limit, 25);
    }

    #[test]
    #[serial]
    fn test_config_zero_recent_meetings_limit() {
        let mut guard = EnvGuard::new();
        guard.set("PORTAL_API_BASE_URL", "https://portal.example.org");
        guard.set("PORTAL_API_KEY", "test-key");
        guard.set("RECENT_MEETINGS_LIMIT", "0");

        let result = Config::from_env();
        assert!(
            result.is_err(),
            "Config should fail with a zero recent-meetings limit"
        );
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "RECENT_MEETINGS_LIMIT");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_u64() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U64", "42");

        let result = Config::parse_env_u64("TEST_U64", 10);
        assert_eq!(result.unwrap(), 42);

        let result = Config::parse_env_u64("NONEXISTENT", 10);
        assert_eq!(result.unwrap(), 10);
    }

    #[test]
    #[serial]
    fn test_parse_env_u64_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U64_INVALID", "not-a-number");

        let result = Config::parse_env_u64("TEST_U64_INVALID", 10);
        assert!(result.is_err());
    }
}
