//! User data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Validation errors returned by the user constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyUsername,
    InvalidId,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::InvalidId => write!(f, "user id must be a valid UUID"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Validate and construct a [`UserId`] from string input.
    pub fn parse(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        Uuid::parse_str(id.as_ref())
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for UserId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0.to_string()
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

/// Unique, human-chosen name identifying a user.
///
/// The original payload is kept verbatim; the only invariant is that it is
/// not blank once trimmed. Uniqueness across users is enforced by the
/// store, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`].
    pub fn new(username: impl Into<String>) -> Result<Self, UserValidationError> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }
        Ok(Self(username))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl TryFrom<String> for Username {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Registered user.
///
/// ## Invariants
/// - `id` is a valid UUID.
/// - `username` is non-blank; unique across all users at the store level.
///
/// Users are immutable once created and are never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: UserId,
    #[schema(value_type = String, example = "fcc_test")]
    username: Username,
}

impl User {
    /// Build a [`User`] from validated components.
    pub fn new(id: UserId, username: Username) -> Self {
        Self { id, username }
    }

    /// Stable user identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// The unique name this user registered under.
    pub fn username(&self) -> &Username {
        &self.username
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
struct UserDto {
    id: String,
    username: String,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        Self {
            id: value.id.to_string(),
            username: value.username.into(),
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        Ok(User::new(UserId::parse(value.id)?, Username::new(value.username)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn blank_usernames_are_rejected(#[case] raw: &str) {
        assert_eq!(
            Username::new(raw),
            Err(UserValidationError::EmptyUsername)
        );
    }

    #[test]
    fn username_keeps_original_spelling() {
        let username = Username::new("Ada Lovelace").expect("valid username");
        assert_eq!(username.as_ref(), "Ada Lovelace");
    }

    #[rstest]
    #[case("not-a-uuid")]
    #[case("")]
    #[case("3fa85f64-5717-4562-b3fc")]
    fn malformed_ids_are_rejected(#[case] raw: &str) {
        assert_eq!(UserId::parse(raw), Err(UserValidationError::InvalidId));
    }

    #[test]
    fn user_id_round_trips_through_string() {
        let id = UserId::random();
        let parsed = UserId::parse(id.to_string()).expect("valid id");
        assert_eq!(parsed, id);
    }

    #[test]
    fn user_serialises_as_flat_object() {
        let user = User::new(UserId::random(), Username::new("sam").expect("valid"));
        let json = serde_json::to_value(&user).expect("serialise");
        assert_eq!(json["username"], "sam");
        assert_eq!(json["id"], user.id().to_string());
    }
}
