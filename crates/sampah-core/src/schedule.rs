//! Biopori schedule derivation.
//!
//! A biopori hole stays active for a fixed period after it is started. The
//! end of that period is never user input: it is always recomputed from the
//! start date and time.

use chrono::{Days, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Length of the active composting period.
pub const ACTIVE_PERIOD_DAYS: u64 = 60;

/// Derived end of a biopori's active period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub end_date: NaiveDate,
    pub end_time: NaiveTime,
}

/// Compute the end of the active period: `date + 60 days`, same time of day.
///
/// # Errors
///
/// Returns `CoreError::Validation` if the end date falls outside the
/// representable calendar range.
pub fn end_schedule(date: NaiveDate, time: NaiveTime) -> Result<Schedule, CoreError> {
    let end_date = date
        .checked_add_days(Days::new(ACTIVE_PERIOD_DAYS))
        .ok_or_else(|| CoreError::Validation(format!("date {date} is out of range")))?;
    Ok(Schedule {
        end_date,
        end_time: time,
    })
}
