//! Domain types, errors, ports, and services.
//!
//! Everything in this module is transport agnostic. Inbound adapters parse
//! requests into these types and map [`Error`] values onto the wire error
//! envelope; outbound adapters implement the driven ports in
//! [`ports`].

pub mod error;
pub mod exercise;
pub mod logbook_service;
pub mod ports;
pub mod registry_service;
pub mod user;

pub use self::error::{Error, ErrorCode};
pub use self::exercise::{
    Description, Duration, ExerciseEntry, ExerciseId, ExerciseValidationError, LogDate,
};
pub use self::logbook_service::LogbookService;
pub use self::registry_service::RegistryService;
pub use self::user::{User, UserId, UserValidationError, Username};
