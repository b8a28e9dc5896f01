//! Driving port for user registration and listing.

use async_trait::async_trait;

use crate::domain::{Error, User, Username};

/// Use-case surface of the user registry.
#[async_trait]
pub trait UserRegistry: Send + Sync {
    /// Return the user registered under `username`, creating one first if
    /// none exists. Behaves as a single logical get-or-create from the
    /// caller's perspective.
    async fn register_or_fetch(&self, username: Username) -> Result<User, Error>;

    /// Every registered user, stripped of storage metadata.
    async fn list_all(&self) -> Result<Vec<User>, Error>;
}
