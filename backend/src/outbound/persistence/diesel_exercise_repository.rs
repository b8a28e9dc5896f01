//! PostgreSQL-backed [`ExerciseRepository`] implementation using Diesel.
//!
//! Entries are append-only. Queries order by the `seq` identity column,
//! which fixes insertion order and therefore makes `limit` truncation
//! deterministic.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{ExerciseRepository, ExerciseRepositoryError, LogFilter};
use crate::domain::{Description, Duration, ExerciseEntry, ExerciseId, LogDate};

use super::models::{ExerciseRow, NewExerciseRow};
use super::pool::{DbPool, PoolError};
use super::schema::exercises;

/// Diesel-backed implementation of the [`ExerciseRepository`] port.
#[derive(Clone)]
pub struct DieselExerciseRepository {
    pool: DbPool,
}

impl DieselExerciseRepository {
    /// Create a new repository over the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ExerciseRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            ExerciseRepositoryError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> ExerciseRepositoryError {
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
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            ExerciseRepositoryError::connection("database connection error")
        }
        _ => ExerciseRepositoryError::query("database error"),
    }
}

fn row_to_entry(row: ExerciseRow) -> Result<ExerciseEntry, ExerciseRepositoryError> {
    let description = Description::new(row.description).map_err(|err| {
        ExerciseRepositoryError::query(format!("corrupted description in database: {err}"))
    })?;
    Ok(ExerciseEntry::from_parts(
        ExerciseId::from(row.id),
        row.user_id,
        description,
        Duration::from_minutes(row.duration_minutes),
        LogDate::from_date(row.logged_on),
    ))
}

#[async_trait]
impl ExerciseRepository for DieselExerciseRepository {
    async fn insert(&self, entry: &ExerciseEntry) -> Result<(), ExerciseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewExerciseRow {
            id: *entry.id().as_uuid(),
            user_id: entry.user_id(),
            description: entry.description().as_ref(),
            duration_minutes: entry.duration().minutes(),
            logged_on: entry.date().as_date(),
        };
        diesel::insert_into(exercises::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }

    async fn find_for_user(
        &self,
        user_id: &str,
        filter: &LogFilter,
    ) -> Result<Vec<ExerciseEntry>, ExerciseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = exercises::table
            .filter(exercises::user_id.eq(user_id))
            .order(exercises::seq.asc())
            .select(ExerciseRow::as_select())
            .into_boxed();

        if let Some(from) = filter.from {
            query = query.filter(exercises::logged_on.ge(from.as_date()));
        }
        if let Some(to) = filter.to {
            query = query.filter(exercises::logged_on.le(to.as_date()));
        }
        if let Some(limit) = filter.limit {
            // PostgreSQL rejects negative limits outright.
            if limit >= 0 {
                query = query.limit(limit);
            }
        }

        let rows: Vec<ExerciseRow> = query.load(&mut conn).await.map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_entry).collect()
    }
}
