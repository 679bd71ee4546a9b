//! User service configuration.

use common::{AppResult, DatabaseConfig};

use crate::repository::RepositoryKind;

/// Prefix for service-specific environment overrides.
const ENV_PREFIX: &str = "USER_SERVICE";

/// User service configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    /// Selected storage backend
    pub repository: RepositoryKind,
    /// Connection settings for the ORM backend
    pub database: DatabaseConfig,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Fails when `REPOSITORY_TYPE` is missing or unrecognized.
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            repository: RepositoryKind::from_env()?,
            database: DatabaseConfig::from_env(ENV_PREFIX),
        })
    }
}
