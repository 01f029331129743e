//! Application configuration loaded from environment variables.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the hosted record store
    pub store_url: String,
    /// API key sent with every store request
    pub store_api_key: String,
    /// Frontend URL for CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            store_url: env::var("STORE_URL").map_err(|_| ConfigError::Missing("STORE_URL"))?,
            store_api_key: env::var("STORE_API_KEY")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("STORE_API_KEY"))?,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
        })
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            store_url: "http://localhost:54321".to_string(),
            store_api_key: "test_api_key".to_string(),
            frontend_url: "http://localhost:5173".to_string(),
            port: 8080,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("STORE_URL", "http://localhost:54321");
        env::set_var("STORE_API_KEY", "test_key");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.store_url, "http://localhost:54321");
        assert_eq!(config.store_api_key, "test_key");
        assert_eq!(config.port, 8080);
    }
}
