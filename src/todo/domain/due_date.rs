//! Parsing of caller-supplied due dates.

use super::TodoDomainError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parses a due date supplied by a caller.
///
/// Accepts RFC 3339 timestamps, `YYYY-MM-DDTHH:MM:SS[.f]` (read as UTC), and
/// bare `YYYY-MM-DD` dates (midnight UTC). An empty or whitespace-only value
/// means "no due date" and yields `Ok(None)`.
///
/// # Errors
///
/// Returns [`TodoDomainError::InvalidDueDate`] when the value is not empty and
/// matches none of the accepted formats.
pub fn parse_due_date(raw: &str) -> Result<Option<DateTime<Utc>>, TodoDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(Some(timestamp.with_timezone(&Utc)));
    }

    let naive = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        });

    naive
        .map(|value| Some(value.and_utc()))
        .ok_or_else(|| TodoDomainError::InvalidDueDate(raw.to_owned()))
}
