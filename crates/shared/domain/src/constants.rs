//! Domain-level constants.

// =============================================================================
// Repository Selection
// =============================================================================

/// Environment variable that selects the repository backend
pub const REPOSITORY_TYPE_ENV: &str = "REPOSITORY_TYPE";

/// Backend value for the process-local store
pub const BACKEND_MEMORY: &str = "memory";

/// Backend value for the relational store
pub const BACKEND_ORM: &str = "orm";

/// All recognized backend values
pub const VALID_BACKENDS: &[&str] = &[BACKEND_MEMORY, BACKEND_ORM];

// =============================================================================
// Identifiers
// =============================================================================

/// First id handed out by the in-memory store
pub const FIRST_MEMORY_ID: i64 = 0;
