//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data`, so they depend only
//! on the domain's driving ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ExerciseLog, UserRegistry};

/// Dependency bundle for the HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub registry: Arc<dyn UserRegistry>,
    pub logbook: Arc<dyn ExerciseLog>,
}

impl HttpState {
    /// Bundle the driving-port implementations handlers will call.
    pub fn new(registry: Arc<dyn UserRegistry>, logbook: Arc<dyn ExerciseLog>) -> Self {
        Self { registry, logbook }
    }
}
