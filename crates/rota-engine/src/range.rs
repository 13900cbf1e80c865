//! Date parsing and weekday-aligned range arithmetic.

use crate::error::{Result, RotaError};
use chrono::{Duration, NaiveDate};

/// Parse an ISO calendar date (`YYYY-MM-DD`) into a `NaiveDate`.
///
/// # Errors
/// Returns `RotaError::InvalidDate` if the string is not a valid ISO date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| RotaError::InvalidDate(s.to_string()))
}

/// The smallest date `>= lower` that is congruent to `anchor` modulo 7 days.
///
/// Returns `anchor` itself when it is not before `lower`. This is the
/// fast-forward step of weekly expansion: enumeration starts here rather than
/// walking week by week from the anchor.
pub fn first_aligned_on_or_after(anchor: NaiveDate, lower: NaiveDate) -> NaiveDate {
    if lower <= anchor {
        return anchor;
    }
    let days_behind = (lower - anchor).num_days();
    // Round up to a whole number of weeks. `days_behind` is >= 1 here.
    let weeks = (days_behind + 6) / 7;
    anchor + Duration::weeks(weeks)
}
