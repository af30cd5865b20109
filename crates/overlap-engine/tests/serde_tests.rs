//! JSON shape of engine inputs and outputs, as exchanged with the API layer.

use overlap_engine::{compute_overlaps, AvailabilitySlot};
use serde_json::json;

#[test]
fn slot_rows_deserialize_from_api_json() {
    let rows = json!([
        {
            "instructor_id": "17",
            "instructor_name": "Alex Moreno",
            "instructor_email": "alex@medic.test",
            "date": "2024-06-10",
            "is_all_day": false,
            "start_time": "09:00:00",
            "end_time": "17:00"
        },
        {
            "instructor_id": "18",
            "instructor_name": "Blair Chen",
            "instructor_email": "blair@medic.test",
            "date": "2024-06-10",
            "is_all_day": true,
            "start_time": null
        }
    ]);

    let slots: Vec<AvailabilitySlot> = serde_json::from_value(rows).unwrap();

    assert_eq!(slots[0].start_time.unwrap().to_string(), "09:00:00");
    assert_eq!(slots[0].end_time.unwrap().to_string(), "17:00:00");
    assert!(slots[1].is_all_day);
    assert_eq!(slots[1].start_time, None);
    assert_eq!(slots[1].end_time, None);
}

#[test]
fn malformed_time_string_is_a_decode_error() {
    let row = json!({
        "instructor_id": "17",
        "instructor_name": "Alex Moreno",
        "instructor_email": "alex@medic.test",
        "date": "2024-06-10",
        "is_all_day": false,
        "start_time": "9am",
        "end_time": "17:00"
    });

    let err = serde_json::from_value::<AvailabilitySlot>(row).unwrap_err();
    assert!(err.to_string().contains("9am"));
}

#[test]
fn overlap_windows_serialize_with_hh_mm_times() {
    let slots: Vec<AvailabilitySlot> = serde_json::from_value(json!([
        {
            "instructor_id": "1", "instructor_name": "A", "instructor_email": "a@medic.test",
            "date": "2024-06-10", "is_all_day": false, "start_time": "09:00", "end_time": "17:00"
        },
        {
            "instructor_id": "2", "instructor_name": "B", "instructor_email": "b@medic.test",
            "date": "2024-06-10", "is_all_day": false, "start_time": "13:00", "end_time": "18:00"
        }
    ]))
    .unwrap();
    let day = "2024-06-10".parse().unwrap();

    let windows = compute_overlaps(&["a@medic.test", "b@medic.test"], &slots, day, day).unwrap();

    assert_eq!(
        serde_json::to_value(&windows).unwrap(),
        json!([{
            "date": "2024-06-10",
            "day_name": "Monday",
            "start_time": "13:00",
            "end_time": "17:00",
            "duration_minutes": 240
        }])
    );
}
