//! User repository contract shared by every storage backend.

use async_trait::async_trait;

use common::AppResult;
use domain::{User, UserKey};

use super::RepositoryKind;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Both backends report a missing id as `AppError::NotFound` and a
/// malformed id as `AppError::BadRequest`, so callers cannot tell them
/// apart by error shape.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Backend behind this repository
    fn kind(&self) -> RepositoryKind;

    /// Check that the backing store is reachable
    async fn ping(&self) -> AppResult<()>;

    /// Create a new user with a freshly assigned id
    async fn create(&self, full_name: String) -> AppResult<User>;

    /// Find user by ID
    async fn get(&self, id: UserKey) -> AppResult<User>;

    /// Replace the user's full name
    async fn update(&self, id: UserKey, full_name: String) -> AppResult<User>;

    /// Permanently delete user
    async fn delete(&self, id: UserKey) -> AppResult<()>;

    /// List all users
    async fn list(&self) -> AppResult<Vec<User>>;
}
