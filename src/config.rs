//! Configuration Module
//!
//! Handles loading server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// sqlx SQLite connection URL
    pub database_url: String,
    /// Upper bound on pooled database connections
    pub db_max_connections: u32,
    /// Maximum number of entries the listing cache can hold
    pub cache_max_entries: usize,
    /// Listing cache TTL in seconds
    pub cache_ttl: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DATABASE_URL` - SQLite URL (default: sqlite:students.db)
    /// - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 100)
    /// - `CACHE_TTL` - Cache TTL in seconds (default: 30)
    /// - `SERVER_PORT` - HTTP server port (default: 8000)
    ///
    /// Values that fail to parse fall back to their default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            db_max_connections: env_or("DB_MAX_CONNECTIONS", defaults.db_max_connections),
            cache_max_entries: env_or("CACHE_MAX_ENTRIES", defaults.cache_max_entries),
            cache_ttl: env_or("CACHE_TTL", defaults.cache_ttl),
            server_port: env_or("SERVER_PORT", defaults.server_port),
        }
    }

    pub fn cache_ttl_duration(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:students.db".to_string(),
            db_max_connections: 5,
            cache_max_entries: 100,
            cache_ttl: 30,
            server_port: 8000,
        }
    }
}
