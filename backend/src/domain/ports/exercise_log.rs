//! Driving port for appending and querying exercise entries.

use async_trait::async_trait;

use crate::domain::{Description, Duration, Error, ExerciseEntry, ExerciseId, LogDate, Username};

use super::LogFilter;

/// Validated input for appending one exercise entry.
#[derive(Debug, Clone)]
pub struct AppendExercise {
    /// The user this entry belongs to. Opaque: the reference is only
    /// resolved after the entry is persisted.
    pub user_id: String,
    pub description: Description,
    pub duration: Duration,
    pub date: LogDate,
}

/// Composite view of a persisted entry joined with its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedExercise {
    pub id: ExerciseId,
    pub username: Username,
    pub description: Description,
    pub duration: Duration,
    pub date: LogDate,
}

/// Input for a filtered log query.
#[derive(Debug, Clone)]
pub struct QueryLogs {
    /// The user whose log is requested, as supplied by the caller.
    pub user_id: String,
    pub filter: LogFilter,
}

/// A user's activity log: the filtered entries plus the resolved owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityLog {
    /// Echoes the requested user identifier verbatim.
    pub user_id: String,
    pub username: Username,
    pub entries: Vec<ExerciseEntry>,
}

/// Use-case surface of the exercise logger.
#[async_trait]
pub trait ExerciseLog: Send + Sync {
    /// Persist one entry, then resolve its user reference.
    ///
    /// The write is not rolled back when the reference does not resolve;
    /// in that case the error carries the original `"username not found"`
    /// message.
    async fn append(&self, request: AppendExercise) -> Result<LoggedExercise, Error>;

    /// Fetch a user's entries within the filter bounds.
    ///
    /// Fails with the original `"User not found"` message when the user
    /// reference does not resolve, rather than returning an empty log.
    async fn query_logs(&self, request: QueryLogs) -> Result<ActivityLog, Error>;
}
