//! User registry HTTP handlers.
//!
//! ```text
//! POST /api/users
//! GET  /api/users
//! ```

use actix_web::{get, post, web, Either};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, User, Username};
use crate::inbound::http::{ApiResult, HttpState};

/// Request payload for registering a user.
///
/// Arrives as a classic `<form>` submission or as raw JSON; both carry a
/// single `username` field.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct RegisterUserPayload {
    pub username: Option<String>,
}

/// Wire shape of a registered user.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    #[schema(example = "fcc_test")]
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id().to_string(),
            username: user.username().to_string(),
        }
    }
}

fn parse_username(raw: Option<String>) -> Result<Username, Error> {
    let raw = raw.ok_or_else(|| Error::invalid_request("username is required"))?;
    Username::new(raw).map_err(|err| Error::invalid_request(err.to_string()))
}

/// Register a username, or return the user already holding it.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = RegisterUserPayload,
    responses(
        (status = 200, description = "Created or existing user, or an error envelope", body = UserResponse),
    ),
    tags = ["users"],
    operation_id = "registerUser"
)]
#[post("/api/users")]
pub async fn register_user(
    state: web::Data<HttpState>,
    body: Either<web::Json<RegisterUserPayload>, web::Form<RegisterUserPayload>>,
) -> ApiResult<web::Json<UserResponse>> {
    let payload = body.into_inner();
    let username = parse_username(payload.username)?;
    let user = state.registry.register_or_fetch(username).await?;
    Ok(web::Json(UserResponse::from(user)))
}

/// List every registered user.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All registered users, or an error envelope", body = [UserResponse]),
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/api/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let users = state.registry.list_all().await?;
    Ok(web::Json(users.into_iter().map(UserResponse::from).collect()))
}
