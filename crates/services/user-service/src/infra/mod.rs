//! Infrastructure layer - database connections.

mod db;

pub use db::Database;
