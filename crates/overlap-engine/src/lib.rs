//! # overlap-engine
//!
//! Deterministic team-availability overlap computation for instructor scheduling.
//!
//! Given the availability slots a group of part-time instructors submitted over
//! a date range, the engine finds the windows in which *every* selected
//! instructor is free at the same time, and lays out each instructor's raw slots
//! side by side for display. It performs no I/O: slot rows come from the caller
//! and results go back to the caller.
//!
//! All dates and times are naive local values compared exactly as submitted.
//! No time-zone conversion is attempted.
//!
//! ## Modules
//!
//! - [`time`] — whole-minute time-of-day handling and `HH:MM` (de)serialization
//! - [`slot`] — the `AvailabilitySlot` input record
//! - [`coverage`] — reduce one instructor's slots on one day to free intervals
//! - [`overlap`] — intersect coverage across instructors into `OverlapWindow`s
//! - [`individual`] — per-instructor, per-day slot listings
//! - [`team`] — validated instructor selections and saved views
//! - [`report`] — overlaps, individual view and summary in a single call
//! - [`error`] — Error types

pub mod coverage;
pub mod error;
pub mod individual;
pub mod overlap;
pub mod report;
pub mod slot;
pub mod team;
pub mod time;

pub use error::{OverlapError, Result};
pub use individual::{build_individual_view, DayAvailability, PerInstructorAvailability, SlotEntry};
pub use overlap::{compute_overlaps, compute_team_overlaps, find_first_overlap, OverlapWindow};
pub use report::{analyze_team, OverlapSummary, TeamAvailability};
pub use slot::AvailabilitySlot;
pub use team::{SavedView, TeamSelection};
pub use time::day_name;
