//! Exercise entry data model.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum allowed length for an exercise description, in characters.
pub const DESCRIPTION_MAX: usize = 20;

/// Validation errors returned by the exercise constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExerciseValidationError {
    EmptyDescription,
    DescriptionTooLong { max: usize },
}

impl fmt::Display for ExerciseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "description must not be empty"),
            Self::DescriptionTooLong { max } => {
                write!(f, "description must be at most {max} characters")
            }
        }
    }
}

impl std::error::Error for ExerciseValidationError {}

/// Stable exercise entry identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExerciseId(Uuid);

impl ExerciseId {
    /// Generate a new random [`ExerciseId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for ExerciseId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What the user did, capped at [`DESCRIPTION_MAX`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description(String);

impl Description {
    /// Validate and construct a [`Description`].
    pub fn new(description: impl Into<String>) -> Result<Self, ExerciseValidationError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(ExerciseValidationError::EmptyDescription);
        }
        if description.chars().count() > DESCRIPTION_MAX {
            return Err(ExerciseValidationError::DescriptionTooLong {
                max: DESCRIPTION_MAX,
            });
        }
        Ok(Self(description))
    }
}

impl AsRef<str> for Description {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Exercise duration in whole minutes.
///
/// The original behaviour places no bounds on the value, so none are
/// enforced here; malformed (non-numeric) input is rejected where the
/// request is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration(i32);

impl Duration {
    /// Wrap a minute count.
    pub fn from_minutes(minutes: i32) -> Self {
        Self(minutes)
    }

    /// The duration as whole minutes.
    pub fn minutes(&self) -> i32 {
        self.0
    }
}

/// Calendar date at day granularity, without time-of-day.
///
/// Entries are normalised to this granularity at write time, so range
/// filters naturally compare whole days. Renders in the service's
/// human-readable form, e.g. `"Mon Jan 01 2024"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LogDate(NaiveDate);

impl LogDate {
    /// Today's date (UTC).
    pub fn today() -> Self {
        Self(Utc::now().date_naive())
    }

    /// Wrap an already-typed date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parse a caller-supplied date string.
    ///
    /// Accepts ISO `YYYY-MM-DD`, RFC 3339 timestamps, and this service's
    /// own display form. Returns `None` for anything else.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(Self(date));
        }
        if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
            return Some(Self(stamp.date_naive()));
        }
        NaiveDate::parse_from_str(raw, "%a %b %d %Y").ok().map(Self)
    }

    /// Parse an optional caller-supplied date, falling back to today.
    ///
    /// Omitted and unparseable inputs both default to the current date,
    /// matching the original service's leniency.
    pub fn parse_or_today(raw: Option<&str>) -> Self {
        raw.and_then(Self::parse).unwrap_or_else(Self::today)
    }

    /// The underlying calendar date.
    pub fn as_date(&self) -> NaiveDate {
        self.0
    }

    /// Render in the human-readable calendar form, e.g. `"Mon Jan 01 2024"`.
    pub fn display_string(&self) -> String {
        self.0.format("%a %b %d %Y").to_string()
    }
}

impl fmt::Display for LogDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_string())
    }
}

impl From<NaiveDate> for LogDate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

/// A single logged exercise.
///
/// ## Invariants
/// - `description` and `date` satisfy their newtype invariants.
/// - `user_id` is an opaque reference with no enforced referential
///   integrity: it may point at no user at all, and consumers must handle
///   that at read time.
///
/// Entries are immutable once created and are never deleted or updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseEntry {
    id: ExerciseId,
    user_id: String,
    description: Description,
    duration: Duration,
    date: LogDate,
}

impl ExerciseEntry {
    /// Build a new entry with a fresh identifier.
    pub fn new(
        user_id: impl Into<String>,
        description: Description,
        duration: Duration,
        date: LogDate,
    ) -> Self {
        Self {
            id: ExerciseId::random(),
            user_id: user_id.into(),
            description,
            duration,
            date,
        }
    }

    /// Rehydrate an entry from stored parts.
    pub fn from_parts(
        id: ExerciseId,
        user_id: impl Into<String>,
        description: Description,
        duration: Duration,
        date: LogDate,
    ) -> Self {
        Self {
            id,
            user_id: user_id.into(),
            description,
            duration,
            date,
        }
    }

    /// Stable entry identifier.
    pub fn id(&self) -> &ExerciseId {
        &self.id
    }

    /// The (possibly dangling) user reference this entry belongs to.
    pub fn user_id(&self) -> &str {
        self.user_id.as_str()
    }

    /// What was done.
    pub fn description(&self) -> &Description {
        &self.description
    }

    /// For how long, in minutes.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// On which calendar day.
    pub fn date(&self) -> LogDate {
        self.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_descriptions_are_rejected(#[case] raw: &str) {
        assert_eq!(
            Description::new(raw),
            Err(ExerciseValidationError::EmptyDescription)
        );
    }

    #[test]
    fn overlong_description_is_rejected() {
        let raw = "a".repeat(DESCRIPTION_MAX + 1);
        assert_eq!(
            Description::new(raw),
            Err(ExerciseValidationError::DescriptionTooLong {
                max: DESCRIPTION_MAX
            })
        );
    }

    #[test]
    fn description_at_the_cap_is_accepted() {
        let raw = "b".repeat(DESCRIPTION_MAX);
        let description = Description::new(raw.clone()).expect("valid description");
        assert_eq!(description.as_ref(), raw);
    }

    #[rstest]
    #[case("2024-01-01", "Mon Jan 01 2024")]
    #[case("2024-02-29", "Thu Feb 29 2024")]
    fn iso_dates_parse_and_render(#[case] raw: &str, #[case] rendered: &str) {
        let date = LogDate::parse(raw).expect("parseable date");
        assert_eq!(date.display_string(), rendered);
    }

    #[test]
    fn rfc3339_timestamps_collapse_to_the_day() {
        let date = LogDate::parse("2024-01-05T23:59:00Z").expect("parseable stamp");
        assert_eq!(date.display_string(), "Fri Jan 05 2024");
    }

    #[test]
    fn display_form_round_trips() {
        let date = LogDate::parse("2024-01-05").expect("parseable date");
        let reparsed = LogDate::parse(&date.display_string()).expect("round trip");
        assert_eq!(reparsed, date);
    }

    #[rstest]
    #[case(Some("never-a-date"))]
    #[case(Some(""))]
    #[case(None)]
    fn missing_or_garbage_dates_fall_back_to_today(#[case] raw: Option<&str>) {
        assert_eq!(LogDate::parse_or_today(raw), LogDate::today());
    }

    #[test]
    fn entries_on_the_same_day_compare_equal() {
        let morning = LogDate::parse("2024-01-05T08:00:00Z").expect("parseable");
        let evening = LogDate::parse("2024-01-05T20:00:00Z").expect("parseable");
        assert_eq!(morning, evening);
    }
}
