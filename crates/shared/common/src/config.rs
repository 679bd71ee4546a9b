//! Shared configuration structures.

use std::env;

use serde::{Deserialize, Serialize};

/// Base service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Host address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Load from `<PREFIX>_DATABASE_URL`, falling back to `DATABASE_URL`.
    pub fn from_env(prefix: &str) -> Self {
        let defaults = Self::default();
        Self {
            url: env::var(format!("{}_DATABASE_URL", prefix))
                .or_else(|_| env::var("DATABASE_URL"))
                .unwrap_or(defaults.url),
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(defaults.max_connections),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://users.db?mode=rwc".to_string(),
            max_connections: 10,
        }
    }
}
