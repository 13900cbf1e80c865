//! WASM bindings for rota-engine.
//!
//! Exposes occurrence expansion and schedule resolution to JavaScript via
//! `wasm-bindgen`. All complex types cross the boundary as JSON strings; the
//! model types serialize with snake_case field names and ISO dates.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p rota-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/rota-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/rota_engine_wasm.wasm
//! ```

use chrono::NaiveDate;
use rota_engine::model::{ScheduleEntry, ServiceDefinition};
use rota_engine::range::parse_date;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Boundary parsing helpers
// ---------------------------------------------------------------------------

/// Parse an ISO calendar date (`YYYY-MM-DD`) coming from JavaScript.
fn parse_date_js(s: &str) -> Result<NaiveDate, JsValue> {
    parse_date(s).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Parse a JSON array of service definitions.
fn parse_definitions_json(json: &str) -> Result<Vec<ServiceDefinition>, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid definitions JSON: {}", e)))
}

/// Parse a JSON array of schedule entries.
fn parse_entries_json(json: &str) -> Result<Vec<ScheduleEntry>, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid entries JSON: {}", e)))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Expand service definitions into dated occurrences within a closed range.
///
/// `definitions_json` must be a JSON array of service definition objects.
/// `range_start` and `range_end` are ISO calendar dates (`YYYY-MM-DD`).
/// Returns a JSON array of occurrence objects sorted by date and start time.
/// An inverted range yields an empty array, matching the engine's contract.
#[wasm_bindgen(js_name = "expandServices")]
pub fn expand_services(
    definitions_json: &str,
    range_start: &str,
    range_end: &str,
) -> Result<String, JsValue> {
    let definitions = parse_definitions_json(definitions_json)?;
    let start = parse_date_js(range_start)?;
    let end = parse_date_js(range_end)?;

    let occurrences = rota_engine::expand_definitions(&definitions, start, end);
    to_json(&occurrences)
}

/// Resolve schedule entries under an optional campus filter.
///
/// `entries_json` must be a JSON array of schedule entry objects. With a
/// campus id, one winning entry per (date, category) key is returned, sorted
/// by key, with campus-specific entries overriding shared ones. Without a
/// campus id every entry is returned as-is (the global/admin "list" view).
#[wasm_bindgen(js_name = "resolveSchedule")]
pub fn resolve_schedule(
    entries_json: &str,
    campus_id: Option<String>,
) -> Result<String, JsValue> {
    let entries = parse_entries_json(entries_json)?;
    let resolved = rota_engine::applicable_entries(&entries, campus_id.as_deref());
    to_json(&resolved)
}

/// The single entry scheduled on `date`, or JSON `null` if nothing is.
///
/// Applies the same campus precedence as [`resolve_schedule`], collapsed to
/// one winner for the date.
#[wasm_bindgen(js_name = "scheduledEntryForDate")]
pub fn scheduled_entry_for_date(
    entries_json: &str,
    date: &str,
    campus_id: Option<String>,
) -> Result<String, JsValue> {
    let entries = parse_entries_json(entries_json)?;
    let date = parse_date_js(date)?;

    let winner = rota_engine::entry_for_date(&entries, date, campus_id.as_deref());
    to_json(&winner)
}
