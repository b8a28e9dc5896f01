//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for
//! the REST API: the user registry, exercise logging, and health probe
//! endpoints, plus the error envelope every `/api` failure is wrapped in.
//! Swagger UI serves the document in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::exercises::{
    ActivityLogResponse, CreateExercisePayload, LogLine, LoggedExerciseResponse,
};
use crate::inbound::http::users::{RegisterUserPayload, UserResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Activity Log Service",
        description = "Registers users and records dated exercise entries. \
                       Note: failures on the /api surface are reported as \
                       HTTP 200 with an `error` body field, for compatibility \
                       with the service this one replaces."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::register_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::exercises::create_exercise,
        crate::inbound::http::exercises::get_logs,
        crate::inbound::http::health::live,
        crate::inbound::http::health::ready,
    ),
    components(schemas(
        ErrorEnvelope,
        RegisterUserPayload,
        UserResponse,
        CreateExercisePayload,
        LoggedExerciseResponse,
        ActivityLogResponse,
        LogLine,
    )),
    tags(
        (name = "users", description = "User registry"),
        (name = "exercises", description = "Exercise logging and queries"),
        (name = "health", description = "Probes for orchestration")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_api_path() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for expected in [
            "/api/users",
            "/api/users/{_id}/exercises",
            "/api/users/{_id}/logs",
            "/health/live",
            "/health/ready",
        ] {
            assert!(
                paths.iter().any(|path| path.as_str() == expected),
                "missing {expected} in {paths:?}"
            );
        }
    }
}
