//! PostgreSQL-backed [`UserRepository`] implementation using Diesel.
//!
//! All database operations are async via `diesel-async`. Unique-index
//! violations on `username` map to
//! [`UserRepositoryError::DuplicateUsername`] so the registry service can
//! recover from a lost registration race.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{User, UserId, Username};

use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the [`UserRepository`] port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository over the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            UserRepositoryError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> UserRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            UserRepositoryError::DuplicateUsername
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UserRepositoryError::connection("database connection error")
        }
        _ => UserRepositoryError::query("database error"),
    }
}

fn row_to_user(row: UserRow) -> Result<User, UserRepositoryError> {
    let username = Username::new(row.username).map_err(|err| {
        UserRepositoryError::query(format!("corrupted username in database: {err}"))
    })?;
    Ok(User::new(UserId::from(row.id), username))
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert(&self, user: &User) -> Result<(), UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewUserRow {
            id: *user.id().as_uuid(),
            username: user.username().as_ref(),
        };
        diesel::insert_into(users::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .filter(users::username.eq(username.as_ref()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_user).transpose()
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, UserRepositoryError> {
        // Dangling exercise references may carry arbitrary text; anything
        // that is not a UUID cannot match a stored user.
        let Ok(uuid) = Uuid::parse_str(id) else {
            return Ok(None);
        };

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .filter(users::id.eq(uuid))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_user).transpose()
    }

    async fn list_all(&self) -> Result<Vec<User>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UserRow> = users::table
            .order(users::created_at.asc())
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_user).collect()
    }
}
