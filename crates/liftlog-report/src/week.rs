//! Calendar-week bucketing.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// A Monday-anchored calendar week.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekBucket {
    /// The Monday that opens the week.
    pub week_start: NaiveDate,
    /// The week start as `YYYY-MM-DD`.
    pub label: String,
}

/// The week containing `date`.
///
/// Weeks run Monday through Sunday. The bucket is identified by its Monday,
/// so labels sort chronologically as plain strings and never collide across
/// month or year boundaries.
pub fn week_of(date: NaiveDate) -> WeekBucket {
    let week_start = date - Duration::days(date.weekday().num_days_from_monday() as i64);
    WeekBucket {
        week_start,
        label: week_start.format("%Y-%m-%d").to_string(),
    }
}
