//! Exercise logbook domain service.
//!
//! Implements appending and querying over the exercise and user
//! repository ports. Both operations resolve the user reference only
//! after touching the exercise store; an append whose reference fails to
//! resolve keeps its write. That at-least-partial-write behaviour is part
//! of the observable contract.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    ActivityLog, AppendExercise, ExerciseLog, ExerciseRepository, ExerciseRepositoryError,
    LoggedExercise, QueryLogs, UserRepository, UserRepositoryError,
};
use crate::domain::{Error, ExerciseEntry};

/// Exercise logbook service implementing the [`ExerciseLog`] driving port.
#[derive(Clone)]
pub struct LogbookService<E, U> {
    exercises: Arc<E>,
    users: Arc<U>,
}

impl<E, U> LogbookService<E, U> {
    /// Create a new service over the given repositories.
    pub fn new(exercises: Arc<E>, users: Arc<U>) -> Self {
        Self { exercises, users }
    }
}

fn map_exercise_error(error: ExerciseRepositoryError) -> Error {
    match error {
        ExerciseRepositoryError::Connection { message }
        | ExerciseRepositoryError::Query { message } => Error::store(message),
    }
}

fn map_user_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Connection { message } | UserRepositoryError::Query { message } => {
            Error::store(message)
        }
        // Lookups never insert; a duplicate key here means the adapter
        // misbehaved, so surface it as a store failure.
        UserRepositoryError::DuplicateUsername => Error::store("unexpected duplicate key"),
    }
}

#[async_trait]
impl<E, U> ExerciseLog for LogbookService<E, U>
where
    E: ExerciseRepository,
    U: UserRepository,
{
    async fn append(&self, request: AppendExercise) -> Result<LoggedExercise, Error> {
        let AppendExercise {
            user_id,
            description,
            duration,
            date,
        } = request;

        let entry = ExerciseEntry::new(user_id, description, duration, date);
        self.exercises
            .insert(&entry)
            .await
            .map_err(map_exercise_error)?;

        // The entry stays persisted whatever the lookup below finds.
        match self
            .users
            .find_by_id(entry.user_id())
            .await
            .map_err(map_user_error)?
        {
            Some(user) => Ok(LoggedExercise {
                id: *entry.id(),
                username: user.username().clone(),
                description: entry.description().clone(),
                duration: entry.duration(),
                date: entry.date(),
            }),
            None => Err(Error::not_found("username not found")),
        }
    }

    async fn query_logs(&self, request: QueryLogs) -> Result<ActivityLog, Error> {
        let QueryLogs { user_id, filter } = request;

        let entries = self
            .exercises
            .find_for_user(&user_id, &filter)
            .await
            .map_err(map_exercise_error)?;

        match self
            .users
            .find_by_id(&user_id)
            .await
            .map_err(map_user_error)?
        {
            Some(user) => Ok(ActivityLog {
                user_id,
                username: user.username().clone(),
                entries,
            }),
            None => Err(Error::not_found("User not found")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::exercise_repository::MockExerciseRepository;
    use crate::domain::ports::user_repository::MockUserRepository;
    use crate::domain::ports::LogFilter;
    use crate::domain::{Description, Duration, ErrorCode, LogDate, User, UserId, Username};

    fn sample_user() -> User {
        User::new(UserId::random(), Username::new("ada").expect("valid"))
    }

    fn append_request(user_id: &str) -> AppendExercise {
        AppendExercise {
            user_id: user_id.to_owned(),
            description: Description::new("morning run").expect("valid"),
            duration: Duration::from_minutes(30),
            date: LogDate::parse("2024-01-05").expect("valid date"),
        }
    }

    fn make_service(
        exercises: MockExerciseRepository,
        users: MockUserRepository,
    ) -> LogbookService<MockExerciseRepository, MockUserRepository> {
        LogbookService::new(Arc::new(exercises), Arc::new(users))
    }

    #[tokio::test]
    async fn append_persists_then_resolves_the_user() {
        let user = sample_user();
        let user_id = user.id().to_string();
        let mut exercises = MockExerciseRepository::new();
        exercises.expect_insert().times(1).return_once(|_| Ok(()));
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .times(1)
            .return_once(move |_| Ok(Some(user)));

        let logged = make_service(exercises, users)
            .append(append_request(&user_id))
            .await
            .expect("append succeeds");
        assert_eq!(logged.username.as_ref(), "ada");
        assert_eq!(logged.description.as_ref(), "morning run");
        assert_eq!(logged.duration.minutes(), 30);
        assert_eq!(logged.date.display_string(), "Fri Jan 05 2024");
    }

    #[tokio::test]
    async fn append_with_dangling_reference_still_writes() {
        let mut exercises = MockExerciseRepository::new();
        exercises.expect_insert().times(1).return_once(|_| Ok(()));
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .times(1)
            .return_once(|_| Ok(None));

        let error = make_service(exercises, users)
            .append(append_request("nobody"))
            .await
            .expect_err("dangling reference reported");
        assert_eq!(error.code(), ErrorCode::NotFound);
        assert_eq!(error.message(), "username not found");
    }

    #[tokio::test]
    async fn append_store_failure_skips_the_user_lookup() {
        let mut exercises = MockExerciseRepository::new();
        exercises
            .expect_insert()
            .times(1)
            .return_once(|_| Err(ExerciseRepositoryError::query("insert failed")));
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().times(0);

        let error = make_service(exercises, users)
            .append(append_request("anyone"))
            .await
            .expect_err("store failure surfaces");
        assert_eq!(error.code(), ErrorCode::StoreError);
    }

    #[tokio::test]
    async fn query_passes_the_filter_through() {
        let user = sample_user();
        let user_id = user.id().to_string();
        let filter = LogFilter {
            from: LogDate::parse("2024-01-02"),
            to: LogDate::parse("2024-01-07"),
            limit: Some(5),
        };
        let mut exercises = MockExerciseRepository::new();
        exercises
            .expect_find_for_user()
            .withf(move |_, observed| *observed == filter)
            .times(1)
            .return_once(|_, _| Ok(Vec::new()));
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .times(1)
            .return_once(move |_| Ok(Some(user)));

        let log = make_service(exercises, users)
            .query_logs(QueryLogs { user_id: user_id.clone(), filter })
            .await
            .expect("query succeeds");
        assert_eq!(log.user_id, user_id);
        assert!(log.entries.is_empty());
    }

    #[tokio::test]
    async fn query_for_unknown_user_is_not_an_empty_log() {
        let mut exercises = MockExerciseRepository::new();
        exercises
            .expect_find_for_user()
            .times(1)
            .return_once(|_, _| Ok(Vec::new()));
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .times(1)
            .return_once(|_| Ok(None));

        let error = make_service(exercises, users)
            .query_logs(QueryLogs {
                user_id: "nobody".to_owned(),
                filter: LogFilter::default(),
            })
            .await
            .expect_err("unknown user reported");
        assert_eq!(error.code(), ErrorCode::NotFound);
        assert_eq!(error.message(), "User not found");
    }
}
