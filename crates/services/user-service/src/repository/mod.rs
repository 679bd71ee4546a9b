//! Repository layer for data access.

pub mod entities;
mod factory;
mod memory_store;
mod orm_store;
mod user_repository;

pub use factory::{create_repository, RepositoryKind};
pub use memory_store::InMemoryUserStore;
pub use orm_store::OrmUserStore;
pub use user_repository::UserRepository;

#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
