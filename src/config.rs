//! Configuration management for the resource server.
//!
//! Values come from environment variables (optionally loaded from a `.env`
//! file) and fall back to defaults.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;

/// Main configuration structure for the resource server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Listening address.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Store actor configuration.
    pub store: StoreConfig,

    /// Whether a permissive CORS layer is installed.
    pub cors_enabled: bool,
}

/// Listening address of the HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace"). `RUST_LOG` overrides it.
    pub level: String,
}

/// Configuration shared by the store actors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Capacity of each actor's request channel.
    pub buffer_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { buffer_size: 32 }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            store: StoreConfig::default(),
            cors_enabled: true,
        }
    }
}

impl ServerConfig {
    /// `host:port`, as accepted by `TcpListener::bind`.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Reads `HOST`, `PORT`, `LOG_LEVEL`, `CORS_ENABLED` and `STORE_BUFFER_SIZE`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    ///
    /// Values that fail to parse keep their default and are reported with `warn!`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST") {
            config.server.host = host;
        }
        if let Some(level) = lookup("LOG_LEVEL") {
            config.logging.level = level.to_lowercase();
        }

        config.server.port = parse_or(&lookup, "PORT", config.server.port);
        config.cors_enabled = parse_or(&lookup, "CORS_ENABLED", config.cors_enabled);

        let buffer_size = parse_or(&lookup, "STORE_BUFFER_SIZE", config.store.buffer_size);
        if buffer_size == 0 {
            warn!("STORE_BUFFER_SIZE must be at least 1, using default");
        } else {
            config.store.buffer_size = buffer_size;
        }

        config
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, %default, "Invalid value, using default");
            default
        }),
        None => default,
    }
}
