//! Intersect several instructors' availability into shared windows.
//!
//! For each date in range, every selected instructor's slots are reduced to a
//! [`Coverage`], then a boundary sweep keeps the elementary sub-intervals that
//! all coverages contain. Touching sub-intervals are merged back into maximal
//! windows and zero-length results are dropped.
//!
//! An instructor with no slot on a date is unavailable that date. Missing data
//! is never read as "free all day".

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::coverage::{Coverage, Interval};
use crate::error::{OverlapError, Result};
use crate::slot::{validate_range, AvailabilitySlot};
use crate::team::{TeamSelection, MIN_TEAM_SIZE};
use crate::time::{day_name, time_from_minutes};

/// A window on one date during which every selected instructor is available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapWindow {
    pub date: NaiveDate,
    pub day_name: String,
    #[serde(with = "crate::time::hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "crate::time::hhmm")]
    pub end_time: NaiveTime,
    pub duration_minutes: i64,
}

impl OverlapWindow {
    fn from_interval(date: NaiveDate, (start, end): Interval) -> Self {
        Self {
            date,
            day_name: day_name(date).to_string(),
            start_time: time_from_minutes(start),
            end_time: time_from_minutes(end),
            duration_minutes: i64::from(end - start),
        }
    }
}

/// Compute every window in `[start_date, end_date]` where all instructors in
/// `selected` are available at once.
///
/// Results are sorted by `(date, start_time)`. The order of `selected` does
/// not affect the output.
///
/// # Errors
/// - `OverlapError::InsufficientInstructors` if fewer than two distinct
///   instructors are selected.
/// - `OverlapError::InvalidRange` if `start_date` is after `end_date`.
pub fn compute_overlaps<S: AsRef<str>>(
    selected: &[S],
    slots: &[AvailabilitySlot],
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<Vec<OverlapWindow>> {
    let selection = TeamSelection::new(selected)?;
    compute_team_overlaps(&selection, slots, start_date, end_date)
}

/// Same as [`compute_overlaps`] for an already resolved selection, e.g. one
/// replayed from a [`SavedView`](crate::SavedView).
///
/// # Errors
/// See [`compute_overlaps`].
pub fn compute_team_overlaps(
    selection: &TeamSelection,
    slots: &[AvailabilitySlot],
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<Vec<OverlapWindow>> {
    if selection.len() < MIN_TEAM_SIZE {
        return Err(OverlapError::InsufficientInstructors {
            selected: selection.len(),
        });
    }
    validate_range(start_date, end_date)?;

    let by_date = group_by_date(selection, slots, start_date, end_date);

    let mut windows = Vec::new();
    for (date, by_instructor) in &by_date {
        // Every selected instructor must have submitted something for the date.
        let coverages: Option<Vec<Coverage>> = selection
            .emails()
            .iter()
            .map(|email| {
                by_instructor
                    .get(email.as_str())
                    .map(|own| Coverage::from_slots(own.iter().copied()))
            })
            .collect();

        let Some(coverages) = coverages else {
            trace!(%date, present = by_instructor.len(), "instructor missing, no overlap");
            continue;
        };

        let shared = intersect_coverage(&coverages);
        trace!(%date, windows = shared.len(), "swept date");
        windows.extend(
            shared
                .into_iter()
                .map(|interval| OverlapWindow::from_interval(*date, interval)),
        );
    }

    debug!(
        instructors = selection.len(),
        slots = slots.len(),
        %start_date,
        %end_date,
        windows = windows.len(),
        "computed team overlaps"
    );

    Ok(windows)
}

/// Find the earliest shared window lasting at least `min_duration_minutes`.
///
/// # Errors
/// See [`compute_overlaps`].
pub fn find_first_overlap<S: AsRef<str>>(
    selected: &[S],
    slots: &[AvailabilitySlot],
    start_date: NaiveDate,
    end_date: NaiveDate,
    min_duration_minutes: i64,
) -> Result<Option<OverlapWindow>> {
    let windows = compute_overlaps(selected, slots, start_date, end_date)?;
    Ok(windows
        .into_iter()
        .find(|w| w.duration_minutes >= min_duration_minutes))
}

/// Intersect the coverage of several instructors on one day.
///
/// Returns maximal, sorted, disjoint intervals contained in every coverage.
/// Empty input yields no intervals.
pub fn intersect_coverage(coverages: &[Coverage]) -> Vec<Interval> {
    if coverages.is_empty() || coverages.iter().any(Coverage::is_empty) {
        return Vec::new();
    }

    let mut boundaries: Vec<u32> = coverages
        .iter()
        .flat_map(|c| c.intervals().iter().flat_map(|&(s, e)| [s, e]))
        .collect();
    boundaries.sort_unstable();
    boundaries.dedup();

    // Each consecutive boundary pair is an elementary segment: it lies either
    // entirely inside or entirely outside any one coverage interval.
    let mut shared: Vec<Interval> = Vec::new();
    for pair in boundaries.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if !coverages.iter().all(|c| c.contains(a, b)) {
            continue;
        }
        match shared.last_mut() {
            Some(last) if last.1 == a => last.1 = b,
            _ => shared.push((a, b)),
        }
    }

    shared.retain(|&(s, e)| e > s);
    shared
}

/// Slots of selected instructors inside the range, keyed by date then email.
/// Dates with no selected slots are absent, so sparse ranges stay cheap.
fn group_by_date<'a>(
    selection: &TeamSelection,
    slots: &'a [AvailabilitySlot],
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> BTreeMap<NaiveDate, BTreeMap<&'a str, Vec<&'a AvailabilitySlot>>> {
    let mut by_date: BTreeMap<NaiveDate, BTreeMap<&str, Vec<&AvailabilitySlot>>> = BTreeMap::new();
    for slot in slots {
        if !slot.is_within(start_date, end_date) || !selection.contains(&slot.instructor_email) {
            continue;
        }
        by_date
            .entry(slot.date)
            .or_default()
            .entry(slot.instructor_email.as_str())
            .or_default()
            .push(slot);
    }
    by_date
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coverage(intervals: &[Interval]) -> Coverage {
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let slots: Vec<AvailabilitySlot> = intervals
            .iter()
            .map(|&(s, e)| {
                AvailabilitySlot::partial(
                    "1",
                    "T",
                    "t@example.com",
                    date,
                    time_from_minutes(s),
                    time_from_minutes(e),
                )
            })
            .collect();
        Coverage::from_slots(&slots)
    }

    #[test]
    fn sweep_keeps_multiple_disjoint_windows() {
        let a = coverage(&[(540, 720), (780, 1020)]);
        let b = coverage(&[(600, 840)]);
        assert_eq!(intersect_coverage(&[a, b]), vec![(600, 720), (780, 840)]);
    }

    #[test]
    fn sweep_narrows_to_innermost_window() {
        let a = coverage(&[(540, 720)]);
        let b = coverage(&[(500, 800)]);
        let c = coverage(&[(400, 600), (660, 700)]);
        assert_eq!(intersect_coverage(&[a, b, c]), vec![(540, 600), (660, 700)]);
    }

    #[test]
    fn touching_coverage_yields_nothing() {
        let a = coverage(&[(540, 600)]);
        let b = coverage(&[(600, 660)]);
        assert!(intersect_coverage(&[a, b]).is_empty());
    }

    #[test]
    fn empty_coverage_short_circuits() {
        let a = coverage(&[(540, 600)]);
        assert!(intersect_coverage(&[a, Coverage::default()]).is_empty());
        assert!(intersect_coverage(&[]).is_empty());
    }
}
