//! Internal Diesel row structs for database operations.
//!
//! Implementation details of the persistence layer; never exposed to the
//! domain.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{exercises, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub username: String,
    #[expect(dead_code, reason = "audit column; read only by operators")]
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for creating new user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub username: &'a str,
}

/// Row struct for reading from the exercises table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = exercises)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ExerciseRow {
    pub id: Uuid,
    #[expect(dead_code, reason = "ordering column; consumed in the query, not the row")]
    pub seq: i64,
    pub user_id: String,
    pub description: String,
    pub duration_minutes: i32,
    pub logged_on: NaiveDate,
    #[expect(dead_code, reason = "audit column; read only by operators")]
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for creating new exercise records.
///
/// `seq` and `created_at` are generated by the database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = exercises)]
pub(crate) struct NewExerciseRow<'a> {
    pub id: Uuid,
    pub user_id: &'a str,
    pub description: &'a str,
    pub duration_minutes: i32,
    pub logged_on: NaiveDate,
}
