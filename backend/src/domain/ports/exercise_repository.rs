//! Port abstraction for exercise entry persistence adapters.

use async_trait::async_trait;

use crate::domain::{ExerciseEntry, LogDate};

/// Persistence errors raised by exercise repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExerciseRepositoryError {
    /// Repository connection could not be established.
    #[error("exercise repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("exercise repository query failed: {message}")]
    Query { message: String },
}

impl ExerciseRepositoryError {
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

/// Date-range and result-count bounds for a log query.
///
/// Both date bounds are inclusive and compare at calendar-day granularity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogFilter {
    /// Include only entries dated on or after this day.
    pub from: Option<LogDate>,
    /// Include only entries dated on or before this day.
    pub to: Option<LogDate>,
    /// Cap the number of returned entries after filtering.
    pub limit: Option<i64>,
}

/// Port for exercise entry storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    /// Persist a new entry. Entries are append-only.
    async fn insert(&self, entry: &ExerciseEntry) -> Result<(), ExerciseRepositoryError>;

    /// Fetch a user's entries matching `filter`, in insertion order.
    ///
    /// Insertion order is what makes `filter.limit` deterministic: the
    /// first N stored entries survive truncation.
    async fn find_for_user(
        &self,
        user_id: &str,
        filter: &LogFilter,
    ) -> Result<Vec<ExerciseEntry>, ExerciseRepositoryError>;
}
