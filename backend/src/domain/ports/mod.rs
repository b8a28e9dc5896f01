//! Domain ports.
//!
//! Driven ports ([`UserRepository`], [`ExerciseRepository`]) are implemented
//! by outbound persistence adapters; driving ports ([`UserRegistry`],
//! [`ExerciseLog`]) are implemented by the domain services and consumed by
//! inbound adapters.

pub mod exercise_log;
pub mod exercise_repository;
pub mod user_registry;
pub mod user_repository;

pub use self::exercise_log::{ActivityLog, AppendExercise, ExerciseLog, LoggedExercise, QueryLogs};
pub use self::exercise_repository::{ExerciseRepository, ExerciseRepositoryError, LogFilter};
pub use self::user_registry::UserRegistry;
pub use self::user_repository::{UserRepository, UserRepositoryError};
