//! Reduce one instructor's slots on one day to the minutes they are free.
//!
//! An all-day slot dominates: the instructor is free for the whole
//! representable day no matter what partial windows they also sent. Otherwise
//! coverage is the union of their partial windows, merged into a sorted,
//! non-overlapping list.

use crate::slot::AvailabilitySlot;
use crate::time::{minute_of_day, DAY_END_MINUTE, DAY_START_MINUTE};

/// Half-open minute interval `[start, end)` within a single day.
pub type Interval = (u32, u32);

/// The free intervals of one instructor on one day, sorted and disjoint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Coverage {
    intervals: Vec<Interval>,
}

impl Coverage {
    /// Build coverage from the slots of a single instructor on a single date.
    ///
    /// The caller is responsible for grouping; the slot's instructor and date
    /// are not inspected here.
    pub fn from_slots<'a, I>(slots: I) -> Self
    where
        I: IntoIterator<Item = &'a AvailabilitySlot>,
    {
        let mut intervals = Vec::new();
        for slot in slots {
            if slot.is_all_day {
                return Self::full_day();
            }
            if let Some(interval) = slot_interval(slot) {
                intervals.push(interval);
            }
        }
        Self {
            intervals: merge_intervals(intervals),
        }
    }

    pub fn full_day() -> Self {
        Self {
            intervals: vec![(DAY_START_MINUTE, DAY_END_MINUTE)],
        }
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// True when a single interval of this coverage contains all of `[start, end)`.
    pub fn contains(&self, start: u32, end: u32) -> bool {
        self.intervals.iter().any(|&(s, e)| s <= start && end <= e)
    }
}

/// Minute interval of a partial slot, or `None` when the slot has no usable
/// window (missing bound, or not strictly increasing).
fn slot_interval(slot: &AvailabilitySlot) -> Option<Interval> {
    let start = minute_of_day(slot.start_time?);
    let end = minute_of_day(slot.end_time?);
    (start < end).then_some((start, end))
}

/// Merge overlapping or touching intervals into a sorted, disjoint list.
pub fn merge_intervals(mut intervals: Vec<Interval>) -> Vec<Interval> {
    if intervals.is_empty() {
        return intervals;
    }

    intervals.sort_unstable();

    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for (start, end) in intervals {
        if let Some(last) = merged.last_mut() {
            if start <= last.1 {
                last.1 = last.1.max(end);
                continue;
            }
        }
        merged.push((start, end));
    }

    merged
}
