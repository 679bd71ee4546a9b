//! Backend selection at process start.

use std::env;
use std::fmt;
use std::sync::Arc;

use tracing::info;

use common::{AppError, AppResult, DatabaseConfig};
use domain::{BACKEND_MEMORY, BACKEND_ORM, REPOSITORY_TYPE_ENV, VALID_BACKENDS};

use super::{InMemoryUserStore, OrmUserStore, UserRepository};
use crate::infra::Database;

/// Storage backend behind the user repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryKind {
    Memory,
    Orm,
}

impl RepositoryKind {
    /// Map a raw setting to a backend. Absent or unknown values are fatal.
    pub fn parse(value: Option<&str>) -> AppResult<Self> {
        match value {
            Some(BACKEND_MEMORY) => Ok(RepositoryKind::Memory),
            Some(BACKEND_ORM) => Ok(RepositoryKind::Orm),
            Some(other) => Err(AppError::configuration(format!(
                "Unknown repository type {:?}, expected one of {:?}",
                other, VALID_BACKENDS
            ))),
            None => Err(AppError::configuration(format!(
                "{} is not set, expected one of {:?}",
                REPOSITORY_TYPE_ENV, VALID_BACKENDS
            ))),
        }
    }

    /// Read the backend from `REPOSITORY_TYPE`.
    pub fn from_env() -> AppResult<Self> {
        Self::parse(env::var(REPOSITORY_TYPE_ENV).ok().as_deref())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RepositoryKind::Memory => BACKEND_MEMORY,
            RepositoryKind::Orm => BACKEND_ORM,
        }
    }
}

impl fmt::Display for RepositoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the single repository instance shared for the process lifetime.
///
/// Only the ORM backend touches `database`.
pub async fn create_repository(
    kind: RepositoryKind,
    database: &DatabaseConfig,
) -> AppResult<Arc<dyn UserRepository>> {
    match kind {
        RepositoryKind::Memory => {
            info!("Using in-memory user repository");
            Ok(Arc::new(InMemoryUserStore::new()))
        }
        RepositoryKind::Orm => {
            let db = Database::connect(database).await?;
            info!("Using ORM user repository");
            Ok(Arc::new(OrmUserStore::new(db.get_connection())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recognized_values() {
        assert_eq!(
            RepositoryKind::parse(Some("memory")).unwrap(),
            RepositoryKind::Memory
        );
        assert_eq!(
            RepositoryKind::parse(Some("orm")).unwrap(),
            RepositoryKind::Orm
        );
    }

    #[test]
    fn test_parse_unknown_value_is_configuration_error() {
        for value in ["file", "Memory", " orm", ""] {
            let result = RepositoryKind::parse(Some(value));
            assert!(
                matches!(result, Err(AppError::Configuration(_))),
                "{:?} should be rejected",
                value
            );
        }
    }

    #[test]
    fn test_parse_missing_value_is_configuration_error() {
        assert!(matches!(
            RepositoryKind::parse(None),
            Err(AppError::Configuration(_))
        ));
    }

    #[test]
    fn test_display_round_trips_setting() {
        for kind in [RepositoryKind::Memory, RepositoryKind::Orm] {
            assert_eq!(RepositoryKind::parse(Some(kind.to_string().as_str())).unwrap(), kind);
        }
    }

    #[tokio::test]
    async fn test_create_memory_repository() {
        let repo = create_repository(RepositoryKind::Memory, &DatabaseConfig::default())
            .await
            .unwrap();

        assert_eq!(repo.kind(), RepositoryKind::Memory);
        assert_eq!(repo.create("A".to_string()).await.unwrap().id, 0);
    }

    #[tokio::test]
    async fn test_create_orm_repository() {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        };
        let repo = create_repository(RepositoryKind::Orm, &config).await.unwrap();

        assert_eq!(repo.kind(), RepositoryKind::Orm);
        assert!(repo.ping().await.is_ok());
    }
}
