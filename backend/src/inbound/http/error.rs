//! HTTP error rendering.
//!
//! The original service reports every failure as HTTP 200 with a JSON
//! body carrying an `error` field; status codes never signal failure.
//! That contract is preserved verbatim here — clients of the original
//! implementation key off the body, not the status. See `DESIGN.md` for
//! why this known smell is kept.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode};
use crate::middleware::request_id::RequestId;

/// Wire shape of every failure on the `/api` surface.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorEnvelope {
    /// Human-readable description of what went wrong.
    #[schema(example = "User not found")]
    pub error: String,
}

/// Adapter-level wrapper turning a [`Error`] into the wire envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError(Error);

impl ApiError {
    /// The wrapped domain error.
    pub fn inner(&self) -> &Error {
        &self.0
    }
}

impl From<Error> for ApiError {
    fn from(value: Error) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        // Compatibility contract: failures ride on 200 responses.
        StatusCode::OK
    }

    fn error_response(&self) -> HttpResponse {
        if self.0.code() == ErrorCode::StoreError {
            warn!(
                request_id = ?RequestId::current(),
                error = %self.0,
                "persistence failure surfaced to client"
            );
        }
        HttpResponse::Ok().json(ErrorEnvelope {
            error: self.0.message().to_owned(),
        })
    }
}

/// Convenience alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Error::invalid_request("description must be at most 20 characters"))]
    #[case(Error::not_found("User not found"))]
    #[case(Error::conflict("username already registered"))]
    #[case(Error::store("connection refused"))]
    fn every_error_kind_rides_on_200(#[case] error: Error) {
        let api_error = ApiError::from(error);
        assert_eq!(api_error.status_code(), StatusCode::OK);

        let response = api_error.error_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn envelope_carries_the_message() {
        let body = serde_json::to_value(ErrorEnvelope {
            error: "username not found".to_owned(),
        })
        .expect("serialise");
        assert_eq!(body, serde_json::json!({ "error": "username not found" }));
    }
}
