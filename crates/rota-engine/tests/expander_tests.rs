//! Tests for occurrence expansion.

use chrono::{NaiveDate, NaiveTime};
use rota_engine::{expand_definitions, ServiceDefinition};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, min, 0).unwrap()
}

/// A one-off definition anchored on the given date.
fn one_off(id: &str, anchor: NaiveDate) -> ServiceDefinition {
    ServiceDefinition {
        id: id.to_string(),
        campus_id: Some("main".to_string()),
        category: "worship".to_string(),
        name: format!("Service {}", id),
        anchor_date: anchor,
        start_time: None,
        end_time: None,
        repeats_weekly: false,
        repeat_until: None,
        is_active: true,
    }
}

/// A weekly definition anchored on the given date.
fn weekly(id: &str, anchor: NaiveDate, until: Option<NaiveDate>) -> ServiceDefinition {
    ServiceDefinition {
        repeats_weekly: true,
        repeat_until: until,
        ..one_off(id, anchor)
    }
}

// ---------------------------------------------------------------------------
// Non-recurring definitions
// ---------------------------------------------------------------------------

#[test]
fn non_recurring_in_range_yields_one_occurrence() {
    let defs = vec![one_off("svc-1", date(2026, 3, 1))];
    let result = expand_definitions(&defs, date(2026, 3, 1), date(2026, 3, 31));

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].occurrence_date, date(2026, 3, 1));
    assert_eq!(result[0].definition_id, "svc-1");
}

#[test]
fn non_recurring_out_of_range_yields_nothing() {
    let defs = vec![one_off("svc-1", date(2026, 3, 1))];
    let result = expand_definitions(&defs, date(2026, 4, 1), date(2026, 4, 30));

    assert!(result.is_empty());
}

#[test]
fn non_recurring_on_range_bounds_is_included() {
    let defs = vec![
        one_off("on-start", date(2026, 3, 1)),
        one_off("on-end", date(2026, 3, 31)),
        one_off("before", date(2026, 2, 28)),
        one_off("after", date(2026, 4, 1)),
    ];
    let result = expand_definitions(&defs, date(2026, 3, 1), date(2026, 3, 31));

    let ids: Vec<&str> = result.iter().map(|o| o.definition_id.as_str()).collect();
    assert_eq!(ids, vec!["on-start", "on-end"]);
}

// ---------------------------------------------------------------------------
// Weekly recurrence
// ---------------------------------------------------------------------------

#[test]
fn weekly_expansion_respects_repeat_until() {
    // Anchor 2026-01-05 is a Monday; repeat until Jan 26 inclusive.
    let defs = vec![weekly(
        "svc-1",
        date(2026, 1, 5),
        Some(date(2026, 1, 26)),
    )];
    let result = expand_definitions(&defs, date(2026, 1, 1), date(2026, 2, 28));

    let dates: Vec<NaiveDate> = result.iter().map(|o| o.occurrence_date).collect();
    assert_eq!(
        dates,
        vec![
            date(2026, 1, 5),
            date(2026, 1, 12),
            date(2026, 1, 19),
            date(2026, 1, 26),
        ],
        "occurrence exactly on repeat_until is included, none after"
    );
}

#[test]
fn weekly_expansion_fast_forwards_past_range_start() {
    // Query window opens mid-recurrence: only the in-window weeks appear,
    // without enumerating from the anchor.
    let defs = vec![weekly(
        "svc-1",
        date(2026, 1, 5),
        Some(date(2026, 1, 26)),
    )];
    let result = expand_definitions(&defs, date(2026, 1, 15), date(2026, 1, 31));

    let dates: Vec<NaiveDate> = result.iter().map(|o| o.occurrence_date).collect();
    assert_eq!(dates, vec![date(2026, 1, 19), date(2026, 1, 26)]);
}

#[test]
fn weekly_expansion_without_repeat_until_fills_the_range() {
    let defs = vec![weekly("svc-1", date(2026, 1, 5), None)];
    let result = expand_definitions(&defs, date(2026, 1, 1), date(2026, 2, 28));

    // Mondays from Jan 5 through Feb 23.
    assert_eq!(result.len(), 8);
    assert_eq!(result.first().unwrap().occurrence_date, date(2026, 1, 5));
    assert_eq!(result.last().unwrap().occurrence_date, date(2026, 2, 23));
}

#[test]
fn weekly_anchor_after_range_end_yields_nothing() {
    let defs = vec![weekly("svc-1", date(2026, 3, 2), None)];
    let result = expand_definitions(&defs, date(2026, 1, 1), date(2026, 2, 28));

    assert!(result.is_empty());
}

// ---------------------------------------------------------------------------
// Exclusions and degenerate input
// ---------------------------------------------------------------------------

#[test]
fn inactive_definitions_are_excluded() {
    let mut recurring = weekly("svc-1", date(2026, 1, 5), None);
    recurring.is_active = false;
    let mut single = one_off("svc-2", date(2026, 1, 10));
    single.is_active = false;

    let result = expand_definitions(&[recurring, single], date(2026, 1, 1), date(2026, 12, 31));
    assert!(result.is_empty());
}

#[test]
fn inverted_range_yields_empty_result() {
    let defs = vec![weekly("svc-1", date(2026, 1, 5), None)];
    let result = expand_definitions(&defs, date(2026, 2, 1), date(2026, 1, 1));

    assert!(result.is_empty(), "degenerate range is not an error");
}

#[test]
fn empty_definitions_yield_empty_result() {
    let result = expand_definitions(&[], date(2026, 1, 1), date(2026, 1, 31));
    assert!(result.is_empty());
}

// ---------------------------------------------------------------------------
// Determinism and ordering
// ---------------------------------------------------------------------------

#[test]
fn expansion_is_deterministic() {
    let defs = vec![
        weekly("svc-1", date(2026, 1, 5), Some(date(2026, 3, 1))),
        one_off("svc-2", date(2026, 1, 20)),
        weekly("svc-3", date(2026, 1, 7), None),
    ];

    let first = expand_definitions(&defs, date(2026, 1, 1), date(2026, 2, 28));
    let second = expand_definitions(&defs, date(2026, 1, 1), date(2026, 2, 28));

    assert_eq!(first, second, "identical inputs must yield identical output");
}

#[test]
fn occurrences_sort_by_date_then_start_time_with_absent_time_first() {
    let mut early = one_off("early", date(2026, 1, 10));
    early.start_time = Some(time(9, 0));
    let mut late = one_off("late", date(2026, 1, 10));
    late.start_time = Some(time(18, 30));
    let untimed = one_off("untimed", date(2026, 1, 10));
    let next_day = one_off("next-day", date(2026, 1, 11));

    // Deliberately shuffled input order.
    let defs = vec![late, next_day, early, untimed];
    let result = expand_definitions(&defs, date(2026, 1, 1), date(2026, 1, 31));

    let ids: Vec<&str> = result.iter().map(|o| o.definition_id.as_str()).collect();
    assert_eq!(ids, vec!["untimed", "early", "late", "next-day"]);
}

#[test]
fn occurrence_keys_are_unique_and_deterministic() {
    let defs = vec![
        weekly("svc-1", date(2026, 1, 5), None),
        weekly("svc-2", date(2026, 1, 5), None),
    ];
    let result = expand_definitions(&defs, date(2026, 1, 1), date(2026, 1, 31));

    let mut keys: Vec<&str> = result.iter().map(|o| o.occurrence_key.as_str()).collect();
    assert!(keys.contains(&"svc-1:2026-01-05"));
    assert!(keys.contains(&"svc-2:2026-01-12"));

    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), result.len(), "keys must not collide");
}
