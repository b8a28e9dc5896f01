//! Exercise logging and log query HTTP handlers.
//!
//! ```text
//! POST /api/users/{_id}/exercises
//! GET  /api/users/{_id}/logs
//! ```

use actix_web::{get, post, web, Either};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{ActivityLog, AppendExercise, LogFilter, LoggedExercise, QueryLogs};
use crate::domain::{Description, Duration, Error, LogDate};
use crate::inbound::http::{ApiResult, HttpState};

#[derive(Debug, Deserialize)]
pub struct UserIdPath {
    #[serde(rename = "_id")]
    pub user_id: String,
}

/// A numeric field that may arrive as a JSON number or a form string.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(untagged)]
pub enum NumberField {
    Integer(i64),
    Float(f64),
    Text(String),
}

/// Request payload for logging one exercise.
///
/// The `_id` field names the user. The identically-named path parameter
/// is ignored in its favour — a compatibility quirk of the original
/// service, preserved deliberately.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateExercisePayload {
    #[serde(rename = "_id")]
    pub user_id: Option<String>,
    pub description: Option<String>,
    pub duration: Option<NumberField>,
    pub date: Option<String>,
}

/// Wire shape of a freshly logged exercise joined with its owner.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoggedExerciseResponse {
    pub id: String,
    pub username: String,
    pub description: String,
    pub duration: i32,
    #[schema(example = "Mon Jan 01 2024")]
    pub date: String,
}

impl From<LoggedExercise> for LoggedExerciseResponse {
    fn from(logged: LoggedExercise) -> Self {
        Self {
            id: logged.id.to_string(),
            username: logged.username.to_string(),
            description: logged.description.to_string(),
            duration: logged.duration.minutes(),
            date: logged.date.display_string(),
        }
    }
}

/// Query parameters bounding a log query.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LogsQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

/// One line of a user's activity log.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LogLine {
    pub description: String,
    pub duration: i32,
    #[schema(example = "Fri Jan 05 2024")]
    pub date: String,
}

/// Wire shape of a filtered activity log.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ActivityLogResponse {
    pub id: String,
    pub username: String,
    pub count: usize,
    pub log: Vec<LogLine>,
}

impl From<ActivityLog> for ActivityLogResponse {
    fn from(log: ActivityLog) -> Self {
        let lines: Vec<LogLine> = log
            .entries
            .into_iter()
            .map(|entry| LogLine {
                description: entry.description().to_string(),
                duration: entry.duration().minutes(),
                date: entry.date().display_string(),
            })
            .collect();
        Self {
            id: log.user_id,
            username: log.username.to_string(),
            count: lines.len(),
            log: lines,
        }
    }
}

fn parse_description(raw: Option<String>) -> Result<Description, Error> {
    let raw = raw.ok_or_else(|| Error::invalid_request("description is required"))?;
    Description::new(raw).map_err(|err| Error::invalid_request(err.to_string()))
}

fn parse_duration(raw: Option<NumberField>) -> Result<Duration, Error> {
    let raw = raw.ok_or_else(|| Error::invalid_request("duration is required"))?;
    let minutes = match raw {
        NumberField::Integer(value) => i32::try_from(value).ok(),
        NumberField::Float(value) => {
            // Whole-valued floats are accepted; anything fractional is
            // malformed input rather than a unit conversion problem.
            if value.fract() == 0.0 && value >= f64::from(i32::MIN) && value <= f64::from(i32::MAX)
            {
                Some(value as i32)
            } else {
                None
            }
        }
        NumberField::Text(value) => value.trim().parse::<i32>().ok(),
    };
    minutes
        .map(Duration::from_minutes)
        .ok_or_else(|| Error::invalid_request("duration must be a whole number of minutes"))
}

fn parse_filter(query: LogsQuery) -> LogFilter {
    // Unparseable bounds and limits behave as if absent, mirroring the
    // original's leniency with query parameters.
    LogFilter {
        from: query.from.as_deref().and_then(LogDate::parse),
        to: query.to.as_deref().and_then(LogDate::parse),
        limit: query
            .limit
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok()),
    }
}

/// Log one exercise for a user.
#[utoipa::path(
    post,
    path = "/api/users/{_id}/exercises",
    request_body = CreateExercisePayload,
    params(
        ("_id" = String, Path, description = "Ignored; the body's `_id` field wins")
    ),
    responses(
        (status = 200, description = "The logged exercise joined with its owner, or an error envelope", body = LoggedExerciseResponse),
    ),
    tags = ["exercises"],
    operation_id = "createExercise"
)]
#[post("/api/users/{_id}/exercises")]
pub async fn create_exercise(
    state: web::Data<HttpState>,
    path: web::Path<UserIdPath>,
    body: Either<web::Json<CreateExercisePayload>, web::Form<CreateExercisePayload>>,
) -> ApiResult<web::Json<LoggedExerciseResponse>> {
    // Compatibility quirk: the body's `_id` decides which user the entry
    // belongs to; the path parameter is parsed and discarded.
    let _ = path.into_inner();

    let payload = body.into_inner();
    let user_id = payload
        .user_id
        .ok_or_else(|| Error::invalid_request("_id is required"))?;
    let description = parse_description(payload.description)?;
    let duration = parse_duration(payload.duration)?;
    let date = LogDate::parse_or_today(payload.date.as_deref());

    let logged = state
        .logbook
        .append(AppendExercise {
            user_id,
            description,
            duration,
            date,
        })
        .await?;
    Ok(web::Json(LoggedExerciseResponse::from(logged)))
}

/// Fetch a user's activity log, optionally bounded by date range and count.
#[utoipa::path(
    get,
    path = "/api/users/{_id}/logs",
    params(
        ("_id" = String, Path, description = "User identifier"),
        ("from" = Option<String>, Query, description = "Inclusive lower date bound"),
        ("to" = Option<String>, Query, description = "Inclusive upper date bound"),
        ("limit" = Option<String>, Query, description = "Maximum number of entries")
    ),
    responses(
        (status = 200, description = "The filtered log, or an error envelope", body = ActivityLogResponse),
    ),
    tags = ["exercises"],
    operation_id = "getLogs"
)]
#[get("/api/users/{_id}/logs")]
pub async fn get_logs(
    state: web::Data<HttpState>,
    path: web::Path<UserIdPath>,
    query: web::Query<LogsQuery>,
) -> ApiResult<web::Json<ActivityLogResponse>> {
    let user_id = path.into_inner().user_id;
    let filter = parse_filter(query.into_inner());

    let log = state
        .logbook
        .query_logs(QueryLogs { user_id, filter })
        .await?;
    Ok(web::Json(ActivityLogResponse::from(log)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn missing_description_is_rejected() {
        let error = parse_description(None).expect_err("missing field rejected");
        assert_eq!(error.message(), "description is required");
    }

    #[test]
    fn overlong_description_is_rejected() {
        let error = parse_description(Some("a".repeat(21))).expect_err("cap enforced");
        assert_eq!(error.message(), "description must be at most 20 characters");
    }

    #[rstest]
    #[case(NumberField::Integer(45), 45)]
    #[case(NumberField::Float(45.0), 45)]
    #[case(NumberField::Text("45".to_owned()), 45)]
    #[case(NumberField::Text(" 45 ".to_owned()), 45)]
    fn duration_accepts_numbers_and_numeric_strings(
        #[case] raw: NumberField,
        #[case] minutes: i32,
    ) {
        let duration = parse_duration(Some(raw)).expect("valid duration");
        assert_eq!(duration.minutes(), minutes);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(NumberField::Text("soon".to_owned())))]
    #[case(Some(NumberField::Float(12.5)))]
    fn bad_durations_are_rejected(#[case] raw: Option<NumberField>) {
        assert!(parse_duration(raw).is_err());
    }

    #[test]
    fn unparseable_query_bounds_behave_as_absent() {
        let filter = parse_filter(LogsQuery {
            from: Some("whenever".to_owned()),
            to: Some("2024-01-07".to_owned()),
            limit: Some("lots".to_owned()),
        });
        assert_eq!(filter.from, None);
        assert_eq!(filter.to, LogDate::parse("2024-01-07"));
        assert_eq!(filter.limit, None);
    }
}
