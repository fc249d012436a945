//! Database connection settings.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: SQLite connection string (default: `sqlite://instance/complaints.db`)
//! - `DATABASE_MAX_CONNECTIONS`: pool size (default: 5)
//!
//! The database file and its parent directory are created on first startup.

use std::env;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://instance/complaints.db";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 5,
        }
    }
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            url: var("DATABASE_URL")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.url),
            max_connections: var("DATABASE_MAX_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.max_connections),
        }
    }
}
