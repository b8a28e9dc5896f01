//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{User, Username};

/// Persistence errors raised by user repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserRepositoryError {
    /// Repository connection could not be established.
    #[error("user repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("user repository query failed: {message}")]
    Query { message: String },
    /// An insert collided with the unique `username` constraint.
    #[error("username already registered")]
    DuplicateUsername,
}

impl UserRepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for user storage: one insert, three lookups.
///
/// The backing store only needs create, find, and find-one operations
/// plus a uniqueness constraint on `username`; anything offering those
/// can sit behind this trait.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user record.
    ///
    /// Fails with [`UserRepositoryError::DuplicateUsername`] when another
    /// record already holds the same username; the store's unique index is
    /// the backstop for the check-then-insert race.
    async fn insert(&self, user: &User) -> Result<(), UserRepositoryError>;

    /// Fetch a user by username.
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, UserRepositoryError>;

    /// Fetch a user by identifier.
    ///
    /// The identifier arrives as an opaque string because exercise entries
    /// may carry dangling or malformed references; such inputs resolve to
    /// `Ok(None)`, never to an error.
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, UserRepositoryError>;

    /// Fetch every registered user, in insertion order.
    async fn list_all(&self) -> Result<Vec<User>, UserRepositoryError>;
}
