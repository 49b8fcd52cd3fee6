//! Query window computation
//!
//! The report covers cards edited between a start date and today. When no
//! start date is given, the window opens on the most recent March 1.

use chrono::{Datelike, NaiveDate};

use crate::error::{StatsError, StatsResult};

/// Month of the default window start
pub const DEFAULT_START_MONTH: u32 = 3;

/// Day of the default window start
pub const DEFAULT_START_DAY: u32 = 1;

/// Parse a `YYYY-MM-DD` date
///
/// The error string is shown verbatim by the argument parser.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| format!("Not a valid date: '{}'.", s))
}

/// Most recent March 1 on or before `today`
pub fn default_start_date(today: NaiveDate) -> NaiveDate {
    let candidate = anchor(today.year());
    if candidate > today {
        anchor(today.year() - 1)
    } else {
        candidate
    }
}

fn anchor(year: i32) -> NaiveDate {
    // March 1 exists in every year
    NaiveDate::from_ymd_opt(year, DEFAULT_START_MONTH, DEFAULT_START_DAY)
        .unwrap_or(NaiveDate::MIN)
}

/// Whole days from `start` to `today`
///
/// Fails when `start` lies after `today`; the search filter only accepts
/// a non-negative window.
pub fn trailing_days(start: NaiveDate, today: NaiveDate) -> StatsResult<u32> {
    let days = (today - start).num_days();
    if days < 0 {
        return Err(StatsError::Validation(format!(
            "Start date {} is after today ({})",
            start, today
        )));
    }
    u32::try_from(days)
        .map_err(|_| StatsError::Validation(format!("Start date {} is too far back", start)))
}
