//! Side-by-side listing of each selected instructor's raw availability.
//!
//! This view is for display only: slots are grouped by date and passed through
//! verbatim, with no merging or interval arithmetic.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::slot::{validate_range, AvailabilitySlot};
use crate::team::TeamSelection;
use crate::time::day_name;

/// A submitted slot as shown in the individual view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotEntry {
    pub is_all_day: bool,
    #[serde(default, with = "crate::time::hhmm_option")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, with = "crate::time::hhmm_option")]
    pub end_time: Option<NaiveTime>,
}

impl From<&AvailabilitySlot> for SlotEntry {
    fn from(slot: &AvailabilitySlot) -> Self {
        Self {
            is_all_day: slot.is_all_day,
            start_time: slot.start_time,
            end_time: slot.end_time,
        }
    }
}

/// One instructor's slots on one date, in submission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailability {
    pub date: NaiveDate,
    pub day_name: String,
    pub slots: Vec<SlotEntry>,
}

/// All of one instructor's slots in the range, grouped by date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerInstructorAvailability {
    pub instructor_email: String,
    /// Taken from the instructor's first slot in range; `None` when they
    /// submitted nothing for the range.
    pub instructor_name: Option<String>,
    pub instructor_id: Option<String>,
    /// Sorted by date.
    pub days: Vec<DayAvailability>,
}

/// List each selected instructor's slots in `[start_date, end_date]`.
///
/// Instructors appear in the order given (duplicates collapsed), including
/// those with no slots at all. Unlike [`compute_overlaps`](crate::compute_overlaps)
/// this accepts a single instructor.
///
/// # Errors
/// Returns `OverlapError::InvalidRange` if `start_date` is after `end_date`.
pub fn build_individual_view<S: AsRef<str>>(
    selected: &[S],
    slots: &[AvailabilitySlot],
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<Vec<PerInstructorAvailability>> {
    validate_range(start_date, end_date)?;
    let selection = TeamSelection::any_size(selected);
    Ok(individual_view(&selection, slots, start_date, end_date))
}

/// Range must already be validated.
pub(crate) fn individual_view(
    selection: &TeamSelection,
    slots: &[AvailabilitySlot],
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Vec<PerInstructorAvailability> {
    let view: Vec<PerInstructorAvailability> = selection
        .emails()
        .iter()
        .map(|email| {
            let own: Vec<&AvailabilitySlot> = slots
                .iter()
                .filter(|s| s.instructor_email == *email && s.is_within(start_date, end_date))
                .collect();

            let mut by_date: BTreeMap<NaiveDate, Vec<SlotEntry>> = BTreeMap::new();
            for slot in &own {
                by_date.entry(slot.date).or_default().push(SlotEntry::from(*slot));
            }

            PerInstructorAvailability {
                instructor_email: email.clone(),
                instructor_name: own.first().map(|s| s.instructor_name.clone()),
                instructor_id: own.first().map(|s| s.instructor_id.clone()),
                days: by_date
                    .into_iter()
                    .map(|(date, slots)| DayAvailability {
                        date,
                        day_name: day_name(date).to_string(),
                        slots,
                    })
                    .collect(),
            }
        })
        .collect();

    debug!(
        instructors = view.len(),
        %start_date,
        %end_date,
        "built individual availability view"
    );

    view
}
