//! User domain entity and related types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Integer identifier assigned by a repository.
pub type UserId = i64;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub full_name: String,
}

impl User {
    /// Create a user record with an already-assigned id
    pub fn new(id: UserId, full_name: impl Into<String>) -> Self {
        Self {
            id,
            full_name: full_name.into(),
        }
    }

    /// Replace the user's full name
    pub fn rename(&mut self, full_name: String) {
        self.full_name = full_name;
    }
}

/// Identifier argument accepted by repositories.
///
/// Path parameters arrive as strings while internal callers hold integers;
/// both forms resolve to the same [`UserId`] before any lookup happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserKey {
    Id(UserId),
    Raw(String),
}

impl UserKey {
    /// Resolve to an integer id, trimming surrounding whitespace from raw input.
    pub fn resolve(&self) -> DomainResult<UserId> {
        match self {
            UserKey::Id(id) => Ok(*id),
            UserKey::Raw(raw) => raw
                .trim()
                .parse::<UserId>()
                .map_err(|_| DomainError::invalid_id(raw.as_str())),
        }
    }
}

impl From<i64> for UserKey {
    fn from(id: i64) -> Self {
        UserKey::Id(id)
    }
}

impl From<&str> for UserKey {
    fn from(raw: &str) -> Self {
        UserKey::Raw(raw.to_string())
    }
}

impl From<String> for UserKey {
    fn from(raw: String) -> Self {
        UserKey::Raw(raw)
    }
}

impl fmt::Display for UserKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserKey::Id(id) => write!(f, "{}", id),
            UserKey::Raw(raw) => write!(f, "{}", raw),
        }
    }
}

/// Request body for create and update.
///
/// `full_name` is write-only: it is accepted here but never echoed back.
/// Any client-supplied `id` is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserPayload {
    /// Full name of the user
    #[serde(default)]
    pub full_name: String,
}

/// User response (only the read-only id is exposed)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserResponse {
    /// Unique user identifier
    pub id: UserId,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self { id: user.id }
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self { id: user.id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_and_string_keys_resolve_equally() {
        assert_eq!(UserKey::from(3).resolve(), Ok(3));
        assert_eq!(UserKey::from("3").resolve(), Ok(3));
        assert_eq!(UserKey::from(" 3 ").resolve(), Ok(3));
    }

    #[test]
    fn test_malformed_key_is_invalid_id() {
        assert_eq!(
            UserKey::from("abc").resolve(),
            Err(DomainError::InvalidId("abc".to_string()))
        );
        assert!(UserKey::from("3.0").resolve().is_err());
        assert!(UserKey::from("").resolve().is_err());
    }

    #[test]
    fn test_response_hides_full_name() {
        let user = User::new(7, "Grace Hopper");
        let json = serde_json::to_value(UserResponse::from(&user)).unwrap();

        assert_eq!(json, serde_json::json!({ "id": 7 }));
    }

    #[test]
    fn test_payload_ignores_id_and_defaults_name() {
        let payload: UserPayload =
            serde_json::from_str(r#"{"id": 99, "full_name": "Alan Turing"}"#).unwrap();
        assert_eq!(payload.full_name, "Alan Turing");

        let empty: UserPayload = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.full_name, "");
    }
}
