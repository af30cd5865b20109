//! One-call team analysis: shared windows, raw per-instructor listings and
//! headline totals, as the scheduling page shows them together.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::individual::{individual_view, PerInstructorAvailability};
use crate::overlap::{compute_team_overlaps, OverlapWindow};
use crate::slot::AvailabilitySlot;
use crate::team::TeamSelection;

/// Totals over a list of overlap windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OverlapSummary {
    pub window_count: usize,
    pub total_minutes: i64,
    /// Distinct dates with at least one window.
    pub days_with_overlap: usize,
    pub longest_window_minutes: i64,
}

impl OverlapSummary {
    pub fn from_windows(windows: &[OverlapWindow]) -> Self {
        let days: BTreeSet<NaiveDate> = windows.iter().map(|w| w.date).collect();
        Self {
            window_count: windows.len(),
            total_minutes: windows.iter().map(|w| w.duration_minutes).sum(),
            days_with_overlap: days.len(),
            longest_window_minutes: windows
                .iter()
                .map(|w| w.duration_minutes)
                .max()
                .unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamAvailability {
    pub overlaps: Vec<OverlapWindow>,
    pub individual: Vec<PerInstructorAvailability>,
    pub summary: OverlapSummary,
}

/// Compute overlaps, the individual view and a summary for `selection`.
///
/// # Errors
/// Same as [`compute_overlaps`](crate::compute_overlaps).
pub fn analyze_team(
    selection: &TeamSelection,
    slots: &[AvailabilitySlot],
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<TeamAvailability> {
    let overlaps = compute_team_overlaps(selection, slots, start_date, end_date)?;
    let individual = individual_view(selection, slots, start_date, end_date);
    let summary = OverlapSummary::from_windows(&overlaps);
    Ok(TeamAvailability {
        overlaps,
        individual,
        summary,
    })
}
