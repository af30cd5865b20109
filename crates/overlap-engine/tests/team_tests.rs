//! Tests for saved views and the combined team report.

use chrono::{NaiveDate, NaiveTime};
use overlap_engine::{
    analyze_team, AvailabilitySlot, OverlapError, OverlapSummary, SavedView, TeamSelection,
};

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn time(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").unwrap()
}

fn partial(email: &str, day: &str, start: &str, end: &str) -> AvailabilitySlot {
    AvailabilitySlot::partial(email, email, email, date(day), time(start), time(end))
}

// ── Saved views ─────────────────────────────────────────────────────────────

#[test]
fn saved_view_trims_name_and_dedups_emails() {
    let view = SavedView::new(
        "42",
        "  Night shift  ",
        &["a@medic.test", "b@medic.test", "a@medic.test"],
    )
    .unwrap();

    assert_eq!(view.name, "Night shift");
    assert_eq!(view.instructor_emails, vec!["a@medic.test", "b@medic.test"]);
}

#[test]
fn saved_view_rejects_blank_name() {
    let err = SavedView::new("42", "   ", &["a@medic.test", "b@medic.test"]).unwrap_err();
    assert_eq!(err, OverlapError::InvalidViewName);
}

#[test]
fn saved_view_rejects_single_instructor() {
    let err = SavedView::new("42", "Solo", &["a@medic.test"]).unwrap_err();
    assert_eq!(err, OverlapError::InsufficientInstructors { selected: 1 });
}

#[test]
fn stored_view_is_revalidated_on_selection() {
    let json = r#"{"id":"7","name":"Weekend","instructor_emails":["a@medic.test"]}"#;
    let view: SavedView = serde_json::from_str(json).unwrap();

    assert_eq!(
        view.selection().unwrap_err(),
        OverlapError::InsufficientInstructors { selected: 1 }
    );
}

#[test]
fn selection_serializes_as_plain_list() {
    let selection = TeamSelection::new(["b@medic.test", "a@medic.test"]).unwrap();
    assert_eq!(
        serde_json::to_string(&selection).unwrap(),
        r#"["b@medic.test","a@medic.test"]"#
    );
}

// ── Team report ─────────────────────────────────────────────────────────────

#[test]
fn report_combines_overlaps_individual_and_summary() {
    let slots = vec![
        partial("a@medic.test", "2024-06-10", "09:00", "12:00"),
        partial("b@medic.test", "2024-06-10", "10:00", "11:00"),
        partial("a@medic.test", "2024-06-11", "08:00", "18:00"),
        partial("b@medic.test", "2024-06-11", "09:00", "10:30"),
        partial("b@medic.test", "2024-06-11", "13:00", "17:00"),
        partial("a@medic.test", "2024-06-12", "08:00", "18:00"),
    ];
    let selection = TeamSelection::new(["a@medic.test", "b@medic.test"]).unwrap();

    let report = analyze_team(&selection, &slots, date("2024-06-10"), date("2024-06-12")).unwrap();

    assert_eq!(report.overlaps.len(), 3);
    assert_eq!(report.individual.len(), 2);
    assert_eq!(report.individual[0].days.len(), 3);
    assert_eq!(report.individual[1].days.len(), 2);
    assert_eq!(
        report.summary,
        OverlapSummary {
            window_count: 3,
            total_minutes: 60 + 90 + 240,
            days_with_overlap: 2,
            longest_window_minutes: 240,
        }
    );
}

#[test]
fn report_propagates_range_error() {
    let selection = TeamSelection::new(["a@medic.test", "b@medic.test"]).unwrap();
    let err = analyze_team(&selection, &[], date("2024-06-12"), date("2024-06-10")).unwrap_err();
    assert!(matches!(err, OverlapError::InvalidRange { .. }));
}

#[test]
fn empty_summary_is_zeroed() {
    assert_eq!(OverlapSummary::from_windows(&[]), OverlapSummary::default());
}
