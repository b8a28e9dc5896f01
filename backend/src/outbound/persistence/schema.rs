//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations exactly; regenerate with
//! `diesel print-schema` after a schema change.

diesel::table! {
    /// Registered users.
    ///
    /// `username` carries a unique index; it is the backstop for the
    /// registry's check-then-insert race.
    users (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Unique, human-chosen name.
        username -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Append-only exercise entries.
    ///
    /// `user_id` is deliberately a bare text column: the original service
    /// enforced no referential integrity, and dangling references must
    /// remain representable.
    exercises (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Monotonic insertion sequence; defines query order.
        seq -> Int8,
        /// Opaque reference to a user's id. Never a foreign key.
        user_id -> Text,
        /// What was done (max 20 characters).
        description -> Varchar,
        /// Duration in whole minutes.
        duration_minutes -> Int4,
        /// Calendar day the exercise happened on.
        logged_on -> Date,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}
