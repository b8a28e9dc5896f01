//! Embedded schema migrations applied at startup.

use diesel::pg::PgConnection;
use diesel::Connection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while applying migrations.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    /// The migration connection could not be established.
    #[error("migration connection failed: {message}")]
    Connection { message: String },
    /// A migration failed to apply.
    #[error("failed to apply migrations: {message}")]
    Apply { message: String },
}

/// Apply all pending embedded migrations over a dedicated synchronous
/// connection.
///
/// Runs once during bootstrap, before the server accepts traffic, so the
/// blocking connection is acceptable there.
pub fn run_pending_migrations(database_url: &str) -> Result<(), MigrationError> {
    let mut connection =
        PgConnection::establish(database_url).map_err(|err| MigrationError::Connection {
            message: err.to_string(),
        })?;
    connection
        .run_pending_migrations(MIGRATIONS)
        .map(|_| ())
        .map_err(|err| MigrationError::Apply {
            message: err.to_string(),
        })
}
