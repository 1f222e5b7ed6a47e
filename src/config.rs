//! Configuration module for the Samehadaku API
//!
//! Handles loading environment variables and application configuration.

use std::env;

use thiserror::Error;

/// Default upstream site
pub const DEFAULT_BASE_URL: &str = "https://samehadaku.skin";

/// Errors raised while reading configuration from the environment
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// A numeric variable could not be parsed
    #[error("{name} must be a valid number, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Base URL of the scraped site, without a trailing slash
    pub base_url: String,
    /// Maximum number of secondary pages fetched at once while resolving sources
    pub source_concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            base_url: DEFAULT_BASE_URL.to_string(),
            source_concurrency: 1,
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present)
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidNumber { name: "PORT", value })?,
            None => defaults.port,
        };

        let source_concurrency = match lookup("SOURCE_CONCURRENCY") {
            Some(value) => value
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidNumber {
                    name: "SOURCE_CONCURRENCY",
                    value,
                })?
                .max(1),
            None => defaults.source_concurrency,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            base_url: lookup("BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            source_concurrency,
        })
    }

    /// Address the HTTP server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
