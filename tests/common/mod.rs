//! Shared helpers for integration tests.

#![allow(dead_code)]

use catalog_desk::config::DatabaseConfig;
use catalog_desk::infra::Database;

/// Settings for a private in-memory SQLite store.
///
/// Every pooled connection to `sqlite::memory:` opens its own database, so
/// the pool is pinned to exactly one connection.
pub fn memory_config() -> DatabaseConfig {
    let mut config = DatabaseConfig::new("sqlite::memory:");
    config.max_connections = 1;
    config.min_connections = 1;
    config
}

/// Fresh store with both tables migrated
pub async fn test_database() -> Database {
    Database::connect(&memory_config())
        .await
        .expect("in-memory database should open and migrate")
}
