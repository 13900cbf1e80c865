//! In-process query predicates mirroring the datastore collaborator filters.
//!
//! The surrounding data-access layer normally applies these filters in its
//! queries (`is_active = true`, optional campus/category, rotation period,
//! `campus_id IN (target, NULL)`). Having them as explicit predicates keeps
//! the engine testable without a datastore and gives callers one documented
//! place for the pre-filtering instead of re-deriving it per call site.

use serde::{Deserialize, Serialize};

use crate::model::{ScheduleEntry, ServiceDefinition};

/// Filter for [`ServiceDefinition`] snapshots.
///
/// Only active definitions pass. A campus filter keeps definitions owned by
/// that campus or shared (`campus_id == None`); a category filter keeps exact
/// matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionQuery {
    pub campus_id: Option<String>,
    pub category: Option<String>,
}

impl DefinitionQuery {
    pub fn matches(&self, definition: &ServiceDefinition) -> bool {
        if !definition.is_active {
            return false;
        }
        if let Some(campus) = &self.campus_id {
            if definition
                .campus_id
                .as_deref()
                .is_some_and(|c| c != campus)
            {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if definition.category != *category {
                return false;
            }
        }
        true
    }

    /// Retain the definitions matching this query, preserving input order.
    pub fn apply(&self, definitions: &[ServiceDefinition]) -> Vec<ServiceDefinition> {
        definitions
            .iter()
            .filter(|d| self.matches(d))
            .cloned()
            .collect()
    }
}

/// Filter for [`ScheduleEntry`] snapshots.
///
/// Entries must belong to `rotation_period`. A campus filter keeps entries
/// scoped to that campus or shared — the `campus_id IN (target, NULL)` shape
/// the resolver expects as input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryQuery {
    pub rotation_period: String,
    pub campus_id: Option<String>,
}

impl EntryQuery {
    pub fn matches(&self, entry: &ScheduleEntry) -> bool {
        if entry.rotation_period != self.rotation_period {
            return false;
        }
        match &self.campus_id {
            Some(campus) => !entry.campus_id.as_deref().is_some_and(|c| c != campus),
            None => true,
        }
    }

    /// Retain the entries matching this query, preserving input order.
    pub fn apply(&self, entries: &[ScheduleEntry]) -> Vec<ScheduleEntry> {
        entries.iter().filter(|e| self.matches(e)).cloned().collect()
    }
}
