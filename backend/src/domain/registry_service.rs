//! User registry domain service.
//!
//! Implements the get-or-create contract over the user repository port.
//! The check-then-insert sequence can race with a concurrent registration
//! of the same username; the store's unique index is the backstop, and the
//! losing writer recovers by re-fetching the winner's record.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{UserRegistry, UserRepository, UserRepositoryError};
use crate::domain::{Error, User, UserId, Username};

/// User registry service implementing the [`UserRegistry`] driving port.
#[derive(Clone)]
pub struct RegistryService<R> {
    users: Arc<R>,
}

impl<R> RegistryService<R> {
    /// Create a new service over the given repository.
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

fn map_user_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Connection { message } | UserRepositoryError::Query { message } => {
            Error::store(message)
        }
        UserRepositoryError::DuplicateUsername => Error::conflict("username already registered"),
    }
}

#[async_trait]
impl<R> UserRegistry for RegistryService<R>
where
    R: UserRepository,
{
    async fn register_or_fetch(&self, username: Username) -> Result<User, Error> {
        if let Some(existing) = self
            .users
            .find_by_username(&username)
            .await
            .map_err(map_user_error)?
        {
            return Ok(existing);
        }

        let user = User::new(UserId::random(), username.clone());
        match self.users.insert(&user).await {
            Ok(()) => Ok(user),
            Err(UserRepositoryError::DuplicateUsername) => {
                // Lost the race against a concurrent registration; the
                // winner's record is authoritative.
                match self
                    .users
                    .find_by_username(&username)
                    .await
                    .map_err(map_user_error)?
                {
                    Some(existing) => Ok(existing),
                    None => Err(Error::conflict("username already registered")),
                }
            }
            Err(err) => Err(map_user_error(err)),
        }
    }

    async fn list_all(&self) -> Result<Vec<User>, Error> {
        self.users.list_all().await.map_err(map_user_error)
    }
}
