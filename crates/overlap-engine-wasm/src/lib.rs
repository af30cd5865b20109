//! WASM bindings for overlap-engine.
//!
//! Exposes team overlap computation and the per-instructor availability view to
//! the scheduling dashboard via `wasm-bindgen`. All complex values cross the
//! boundary as JSON strings; dates are `YYYY-MM-DD`.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p overlap-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir web/src/wasm/ \
//!   target/wasm32-unknown-unknown/release/overlap_engine_wasm.wasm
//! ```
//!
//! The JSON plumbing lives in plain functions returning `Result<String, String>`
//! so it can be tested natively; the exports only convert the error into a
//! `JsValue`.

use chrono::NaiveDate;
use overlap_engine::{AvailabilitySlot, TeamSelection};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Helpers: parse JSON and date arguments coming from JavaScript
// ---------------------------------------------------------------------------

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| format!("Invalid date '{}': {}", s, e))
}

fn parse_emails_json(json: &str) -> Result<Vec<String>, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid instructor emails JSON: {}", e))
}

fn parse_slots_json(json: &str) -> Result<Vec<AvailabilitySlot>, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid availability slots JSON: {}", e))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

/// Arguments shared by every export, parsed in one place.
struct Request {
    emails: Vec<String>,
    slots: Vec<AvailabilitySlot>,
    start: NaiveDate,
    end: NaiveDate,
}

impl Request {
    fn parse(
        selected_emails_json: &str,
        slots_json: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<Self, String> {
        Ok(Self {
            emails: parse_emails_json(selected_emails_json)?,
            slots: parse_slots_json(slots_json)?,
            start: parse_date(start_date)?,
            end: parse_date(end_date)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Native implementations
// ---------------------------------------------------------------------------

fn compute_overlaps_json(
    selected_emails_json: &str,
    slots_json: &str,
    start_date: &str,
    end_date: &str,
) -> Result<String, String> {
    let req = Request::parse(selected_emails_json, slots_json, start_date, end_date)?;
    let windows = overlap_engine::compute_overlaps(&req.emails, &req.slots, req.start, req.end)
        .map_err(|e| e.to_string())?;
    to_json(&windows)
}

fn build_individual_view_json(
    selected_emails_json: &str,
    slots_json: &str,
    start_date: &str,
    end_date: &str,
) -> Result<String, String> {
    let req = Request::parse(selected_emails_json, slots_json, start_date, end_date)?;
    let view = overlap_engine::build_individual_view(&req.emails, &req.slots, req.start, req.end)
        .map_err(|e| e.to_string())?;
    to_json(&view)
}

fn analyze_team_json(
    selected_emails_json: &str,
    slots_json: &str,
    start_date: &str,
    end_date: &str,
) -> Result<String, String> {
    let req = Request::parse(selected_emails_json, slots_json, start_date, end_date)?;
    let selection = TeamSelection::new(&req.emails).map_err(|e| e.to_string())?;
    let report = overlap_engine::analyze_team(&selection, &req.slots, req.start, req.end)
        .map_err(|e| e.to_string())?;
    to_json(&report)
}

fn find_first_overlap_json(
    selected_emails_json: &str,
    slots_json: &str,
    start_date: &str,
    end_date: &str,
    min_duration_minutes: u32,
) -> Result<String, String> {
    let req = Request::parse(selected_emails_json, slots_json, start_date, end_date)?;
    let first = overlap_engine::find_first_overlap(
        &req.emails,
        &req.slots,
        req.start,
        req.end,
        i64::from(min_duration_minutes),
    )
    .map_err(|e| e.to_string())?;
    to_json(&first)
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Compute the windows in which every selected instructor is available.
///
/// `selected_emails_json` is a JSON array of emails; `slots_json` a JSON array
/// of availability slot rows. Returns a JSON array of
/// `{date, day_name, start_time, end_time, duration_minutes}` objects sorted
/// by date then start time. Throws if fewer than two instructors are selected
/// or the range is inverted.
#[wasm_bindgen(js_name = "computeOverlaps")]
pub fn compute_overlaps(
    selected_emails_json: &str,
    slots_json: &str,
    start_date: &str,
    end_date: &str,
) -> Result<String, JsValue> {
    compute_overlaps_json(selected_emails_json, slots_json, start_date, end_date)
        .map_err(|e| JsValue::from_str(&e))
}

/// List each selected instructor's slots in range, grouped by date.
///
/// Returns a JSON array with one entry per instructor, in selection order.
#[wasm_bindgen(js_name = "buildIndividualView")]
pub fn build_individual_view(
    selected_emails_json: &str,
    slots_json: &str,
    start_date: &str,
    end_date: &str,
) -> Result<String, JsValue> {
    build_individual_view_json(selected_emails_json, slots_json, start_date, end_date)
        .map_err(|e| JsValue::from_str(&e))
}

/// Overlaps, individual view and summary totals in one JSON object.
#[wasm_bindgen(js_name = "analyzeTeam")]
pub fn analyze_team(
    selected_emails_json: &str,
    slots_json: &str,
    start_date: &str,
    end_date: &str,
) -> Result<String, JsValue> {
    analyze_team_json(selected_emails_json, slots_json, start_date, end_date)
        .map_err(|e| JsValue::from_str(&e))
}

/// The earliest shared window of at least `min_duration_minutes`, as a JSON
/// object, or the JSON literal `null` when there is none.
#[wasm_bindgen(js_name = "findFirstOverlap")]
pub fn find_first_overlap(
    selected_emails_json: &str,
    slots_json: &str,
    start_date: &str,
    end_date: &str,
    min_duration_minutes: u32,
) -> Result<String, JsValue> {
    find_first_overlap_json(
        selected_emails_json,
        slots_json,
        start_date,
        end_date,
        min_duration_minutes,
    )
    .map_err(|e| JsValue::from_str(&e))
}
