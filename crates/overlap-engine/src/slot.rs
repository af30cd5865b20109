//! The availability record an instructor submits for one date.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One instructor's stated availability on one date.
///
/// Slots are produced upstream (an instructor submits availability, the API
/// layer loads the rows) and are read-only to the engine. When `is_all_day` is
/// false, `start_time` and `end_time` are expected to describe a same-day
/// window with `start_time < end_time`; records that break this are tolerated
/// and simply contribute no availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub instructor_id: String,
    pub instructor_name: String,
    pub instructor_email: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub is_all_day: bool,
    #[serde(default, with = "crate::time::hhmm_option")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, with = "crate::time::hhmm_option")]
    pub end_time: Option<NaiveTime>,
}

impl AvailabilitySlot {
    /// A slot covering the whole of `date`.
    pub fn all_day(
        instructor_id: impl Into<String>,
        instructor_name: impl Into<String>,
        instructor_email: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            instructor_id: instructor_id.into(),
            instructor_name: instructor_name.into(),
            instructor_email: instructor_email.into(),
            date,
            is_all_day: true,
            start_time: None,
            end_time: None,
        }
    }

    /// A slot covering `[start, end)` on `date`.
    pub fn partial(
        instructor_id: impl Into<String>,
        instructor_name: impl Into<String>,
        instructor_email: impl Into<String>,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Self {
        Self {
            instructor_id: instructor_id.into(),
            instructor_name: instructor_name.into(),
            instructor_email: instructor_email.into(),
            date,
            is_all_day: false,
            start_time: Some(start),
            end_time: Some(end),
        }
    }

    pub fn is_within(&self, start_date: NaiveDate, end_date: NaiveDate) -> bool {
        self.date >= start_date && self.date <= end_date
    }
}

/// Reject an inverted date range. Both ends are inclusive, so
/// `start_date == end_date` is a valid one-day range.
pub(crate) fn validate_range(start_date: NaiveDate, end_date: NaiveDate) -> crate::Result<()> {
    if start_date > end_date {
        return Err(crate::OverlapError::InvalidRange {
            start: start_date,
            end: end_date,
        });
    }
    Ok(())
}
