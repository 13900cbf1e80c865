//! Schedule resolution -- picks the single applicable entry per
//! (date, category) key when shared and campus-specific entries overlap.
//!
//! Campuses often share one multi-site rotation but override specific dates
//! locally. "Campus-specific overrides shared" is encoded as an explicit,
//! order-independent rule rather than relying on datastore sort order. The
//! one deliberate order dependence: duplicate entries with the *same* campus
//! scoping for a key are a data-integrity anomaly, tolerated by letting the
//! last one in input order win instead of raising.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::ScheduleEntry;

/// Composite resolution key: one winner is picked per distinct key.
///
/// `category: None` means "uncategorized" — a distinct key from any concrete
/// category on the same date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ScheduleKey {
    pub schedule_date: NaiveDate,
    pub category: Option<String>,
}

impl ScheduleKey {
    fn of(entry: &ScheduleEntry) -> Self {
        Self {
            schedule_date: entry.schedule_date,
            category: entry.category.clone(),
        }
    }
}

/// True when `entry` is scoped to a campus other than `campus_id`.
fn scoped_to_other_campus(entry: &ScheduleEntry, campus_id: &str) -> bool {
    entry.campus_id.as_deref().is_some_and(|c| c != campus_id)
}

/// Keep `current` only when it is campus-specific and `challenger` is shared;
/// everything else lets the challenger through (equal scoping → last wins).
fn keeps_precedence(current: &ScheduleEntry, challenger: &ScheduleEntry) -> bool {
    current.campus_id.is_some() && challenger.campus_id.is_none()
}

/// Resolve to one winning entry per (date, category) key for `campus_id`.
///
/// Entries scoped to a different campus never apply. For each key, a
/// campus-specific entry beats the shared (`campus_id == None`) one; absent a
/// specific entry the shared one wins. Duplicates with identical scoping
/// collapse to the last in input order.
pub fn resolve_by_key(
    entries: &[ScheduleEntry],
    campus_id: &str,
) -> HashMap<ScheduleKey, ScheduleEntry> {
    let mut winners: HashMap<ScheduleKey, ScheduleEntry> = HashMap::new();

    for entry in entries {
        if scoped_to_other_campus(entry, campus_id) {
            continue;
        }
        let key = ScheduleKey::of(entry);
        match winners.get(&key) {
            Some(current) if keeps_precedence(current, entry) => {}
            _ => {
                winners.insert(key, entry.clone());
            }
        }
    }

    winners
}

/// The entries applicable under an optional campus filter.
///
/// With no campus filter this is "list" mode: every entry is returned as-is,
/// in input order, with no resolution collapsing (the global/admin view).
/// With a campus, the winners of [`resolve_by_key`] are returned sorted by
/// key so the output order is a function of the data, not of map iteration.
pub fn applicable_entries(
    entries: &[ScheduleEntry],
    campus_id: Option<&str>,
) -> Vec<ScheduleEntry> {
    let Some(campus) = campus_id else {
        return entries.to_vec();
    };

    let mut resolved: Vec<(ScheduleKey, ScheduleEntry)> =
        resolve_by_key(entries, campus).into_iter().collect();
    resolved.sort_by(|a, b| a.0.cmp(&b.0));
    resolved.into_iter().map(|(_, entry)| entry).collect()
}

/// The single entry scheduled on `date`, if any.
///
/// With a campus filter, the same precedence applies as in
/// [`resolve_by_key`], collapsed across categories: a campus-specific entry
/// on the date beats a shared one, and remaining ties go to the last entry in
/// input order. Without a campus filter no scoping preference exists and the
/// last entry on the date wins. `None` simply means nothing is scheduled —
/// an expected outcome, not an error.
pub fn entry_for_date(
    entries: &[ScheduleEntry],
    date: NaiveDate,
    campus_id: Option<&str>,
) -> Option<ScheduleEntry> {
    let mut winner: Option<&ScheduleEntry> = None;

    for entry in entries {
        if entry.schedule_date != date {
            continue;
        }
        if let Some(campus) = campus_id {
            if scoped_to_other_campus(entry, campus) {
                continue;
            }
            if let Some(current) = winner {
                if keeps_precedence(current, entry) {
                    continue;
                }
            }
        }
        winner = Some(entry);
    }

    winner.cloned()
}
