//! Application settings loaded from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use super::constants::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_DATABASE_URL, DEFAULT_MAX_CONNECTIONS,
    DEFAULT_MIN_CONNECTIONS, DEFAULT_SEED_ADMIN_PASSWORD, DEFAULT_SEED_ADMIN_USERNAME,
};

/// Store connection settings
#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    /// Log every SQL statement sqlx executes
    pub log_statements: bool,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &"[REDACTED]")
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("log_statements", &self.log_statements)
            .finish()
    }
}

impl DatabaseConfig {
    /// Settings for a given URL with default pool sizing.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            min_connections: DEFAULT_MIN_CONNECTIONS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            log_statements: false,
        }
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATABASE_URL)
    }
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub seed_admin_username: String,
    seed_admin_password: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database", &self.database)
            .field("seed_admin_username", &self.seed_admin_username)
            .field("seed_admin_password", &"[REDACTED]")
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let database = DatabaseConfig {
            url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            max_connections: parse_var(&lookup, "DATABASE_MAX_CONNECTIONS")
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
            min_connections: parse_var(&lookup, "DATABASE_MIN_CONNECTIONS")
                .unwrap_or(DEFAULT_MIN_CONNECTIONS),
            connect_timeout_secs: parse_var(&lookup, "DATABASE_CONNECT_TIMEOUT_SECS")
                .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS),
            log_statements: parse_var(&lookup, "DATABASE_LOG_STATEMENTS").unwrap_or(false),
        };

        Self {
            database,
            seed_admin_username: lookup("SEED_ADMIN_USERNAME")
                .unwrap_or_else(|| DEFAULT_SEED_ADMIN_USERNAME.to_string()),
            seed_admin_password: lookup("SEED_ADMIN_PASSWORD")
                .unwrap_or_else(|| DEFAULT_SEED_ADMIN_PASSWORD.to_string()),
        }
    }

    /// Default seed settings around an explicit database configuration.
    pub fn for_database(database: DatabaseConfig) -> Self {
        Self {
            database,
            seed_admin_username: DEFAULT_SEED_ADMIN_USERNAME.to_string(),
            seed_admin_password: DEFAULT_SEED_ADMIN_PASSWORD.to_string(),
        }
    }

    /// Replace the database URL (from the `--database-url` flag).
    pub fn with_database_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.database.url = url;
        }
        self
    }

    /// Password given to the administrator created by `seed`.
    pub fn seed_admin_password(&self) -> &str {
        &self.seed_admin_password
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|v| v.trim().parse().ok())
}
