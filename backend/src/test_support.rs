//! In-memory repository adapters for integration tests.
//!
//! Enabled by the `test-support` feature so HTTP-level tests can drive
//! the full application without a database. Both adapters honour the
//! same contracts as the Diesel implementations: the user store rejects
//! duplicate usernames, and the exercise store preserves insertion
//! order so `limit` truncation is deterministic.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{
    ExerciseRepository, ExerciseRepositoryError, LogFilter, UserRepository, UserRepositoryError,
};
use crate::domain::{ExerciseEntry, User, Username};

/// Vec-backed [`UserRepository`] with a uniqueness check on username.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &User) -> Result<(), UserRepositoryError> {
        let mut users = self.users.lock().expect("user store lock");
        if users.iter().any(|u| u.username() == user.username()) {
            return Err(UserRepositoryError::DuplicateUsername);
        }
        users.push(user.clone());
        Ok(())
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, UserRepositoryError> {
        let users = self.users.lock().expect("user store lock");
        Ok(users.iter().find(|u| u.username() == username).cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, UserRepositoryError> {
        let users = self.users.lock().expect("user store lock");
        Ok(users.iter().find(|u| u.id().to_string() == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserRepositoryError> {
        let users = self.users.lock().expect("user store lock");
        Ok(users.clone())
    }
}

/// Vec-backed [`ExerciseRepository`] preserving insertion order.
#[derive(Default)]
pub struct InMemoryExerciseRepository {
    entries: Mutex<Vec<ExerciseEntry>>,
}

impl InMemoryExerciseRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Direct store inspection for tests asserting on persisted writes.
    pub fn stored_entries(&self) -> Vec<ExerciseEntry> {
        self.entries.lock().expect("exercise store lock").clone()
    }
}

#[async_trait]
impl ExerciseRepository for InMemoryExerciseRepository {
    async fn insert(&self, entry: &ExerciseEntry) -> Result<(), ExerciseRepositoryError> {
        let mut entries = self.entries.lock().expect("exercise store lock");
        entries.push(entry.clone());
        Ok(())
    }

    async fn find_for_user(
        &self,
        user_id: &str,
        filter: &LogFilter,
    ) -> Result<Vec<ExerciseEntry>, ExerciseRepositoryError> {
        let entries = self.entries.lock().expect("exercise store lock");
        let mut matched: Vec<ExerciseEntry> = entries
            .iter()
            .filter(|entry| entry.user_id() == user_id)
            .filter(|entry| filter.from.is_none_or(|from| entry.date() >= from))
            .filter(|entry| filter.to.is_none_or(|to| entry.date() <= to))
            .cloned()
            .collect();
        if let Some(limit) = filter.limit {
            if limit >= 0 {
                matched.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
            }
        }
        Ok(matched)
    }
}
