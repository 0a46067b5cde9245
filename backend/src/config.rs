//! Configuration management for the confeitaria gateway
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with CONFEITARIA_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::Language;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// REST API the gateway reads from
    pub upstream: UpstreamConfig,

    /// Report rendering defaults
    pub reports: ReportsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    /// Base URL of the business REST API, without trailing slash
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportsConfig {
    /// Language code used when a request does not ask for one
    pub default_language: String,
}

impl ReportsConfig {
    pub fn language(&self) -> Language {
        Language::from_code(&self.default_language)
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("CONFEITARIA_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("upstream.base_url", "http://localhost:8080/api")?
            .set_default("upstream.timeout_secs", 10)?
            .set_default("reports.default_language", "pt-BR")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (CONFEITARIA_ prefix)
            .add_source(
                Environment::with_prefix("CONFEITARIA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_defaults() {
        let config = Config::load().unwrap();
        assert!(!config.upstream.base_url.is_empty());
        assert!(config.upstream.timeout_secs > 0);
    }

    #[test]
    fn test_reports_language() {
        let reports = ReportsConfig {
            default_language: "en-US".to_string(),
        };
        assert_eq!(reports.language(), Language::English);
    }
}
