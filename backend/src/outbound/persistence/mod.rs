//! PostgreSQL persistence adapters.
//!
//! [`DieselUserRepository`] and [`DieselExerciseRepository`] implement the
//! domain's driven ports over an async bb8 connection pool. Row structs
//! and table definitions stay private to this module; only domain types
//! cross the boundary.

mod diesel_exercise_repository;
mod diesel_user_repository;
mod migrate;
mod models;
mod pool;
mod schema;

pub use diesel_exercise_repository::DieselExerciseRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrate::{run_pending_migrations, MigrationError};
pub use pool::{DbPool, PoolConfig, PoolError};
