//! Typed records for service definitions, derived occurrences, schedule
//! entries, and teams.
//!
//! Dates are timezone-naive wall-clock dates (`chrono::NaiveDate`) matching
//! the venue's local calendar, never UTC instants. Times-of-day are optional;
//! `Option<NaiveTime>` orders `None` before any concrete time, which is the
//! sort rule the expander relies on.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A declared recurring or single service/event.
///
/// `anchor_date` is the canonical first occurrence; every occurrence a weekly
/// definition generates falls on the same weekday as the anchor. Definitions
/// are created and soft-deactivated by the data-access layer — the engine
/// only ever reads them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceDefinition {
    pub id: String,
    /// Owning campus. `None` means the definition is shared across campuses.
    pub campus_id: Option<String>,
    /// Classification tag (ministry/program type); used only as a filter key.
    pub category: String,
    pub name: String,
    /// First occurrence date.
    pub anchor_date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub repeats_weekly: bool,
    /// Inclusive repetition bound: an occurrence exactly on this date is still
    /// generated, later ones are not. `None` means the definition repeats
    /// indefinitely.
    pub repeat_until: Option<NaiveDate>,
    /// Inactive definitions are excluded from expansion entirely.
    pub is_active: bool,
}

/// One concrete dated instance of a [`ServiceDefinition`].
///
/// Derived, never persisted — computed fresh on every expansion call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOccurrence {
    /// Deterministic identifier, unique per (definition id, date) pair, so
    /// consumers can deduplicate and diff occurrences across re-computation.
    pub occurrence_key: String,
    pub occurrence_date: NaiveDate,
    pub definition_id: String,
    pub campus_id: Option<String>,
    pub category: String,
    pub name: String,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
}

impl ServiceOccurrence {
    /// Build the occurrence of `definition` on `date`.
    ///
    /// The key is `"{definition id}:{YYYY-MM-DD}"`. The ISO date has a fixed
    /// format, so keys cannot collide across definitions or dates.
    pub fn from_definition(definition: &ServiceDefinition, date: NaiveDate) -> Self {
        Self {
            occurrence_key: format!("{}:{}", definition.id, date.format("%Y-%m-%d")),
            occurrence_date: date,
            definition_id: definition.id.clone(),
            campus_id: definition.campus_id.clone(),
            category: definition.category.clone(),
            name: definition.name.clone(),
            start_time: definition.start_time,
            end_time: definition.end_time,
        }
    }
}

/// A persisted assignment of a team to a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: String,
    pub team_id: String,
    pub schedule_date: NaiveDate,
    /// Label grouping entries into a rotation/trimester.
    pub rotation_period: String,
    pub category: Option<String>,
    /// `None` means the entry applies to all campuses ("shared"); a value
    /// scopes it to one campus, which overrides the shared entry on the same
    /// (date, category) key.
    pub campus_id: Option<String>,
}

/// Display attributes for a team referenced by [`ScheduleEntry::team_id`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
    pub icon: Option<String>,
}
