//! Caller-owned memoization for repeated expansions.
//!
//! The expander itself stays pure and cache-agnostic; this layer belongs to
//! the caller (a view refreshing the same month repeatedly, a report runner).
//! Results are keyed by a fingerprint of the definitions snapshot plus the
//! range, so a changed snapshot or a different range is a miss.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use chrono::NaiveDate;

use crate::expander::expand_definitions;
use crate::model::{ServiceDefinition, ServiceOccurrence};

/// Stable hash of a definitions snapshot, used as the cache key component.
///
/// Order-sensitive by design: expansion output order for full ties follows
/// input order, so differently ordered snapshots are distinct inputs.
pub fn fingerprint(definitions: &[ServiceDefinition]) -> u64 {
    let mut hasher = DefaultHasher::new();
    definitions.hash(&mut hasher);
    hasher.finish()
}

/// Memoizes [`expand_definitions`] by `(snapshot fingerprint, range)`.
#[derive(Debug, Default)]
pub struct ExpansionCache {
    results: HashMap<(u64, NaiveDate, NaiveDate), Vec<ServiceOccurrence>>,
}

impl ExpansionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand through the cache, computing on a miss.
    pub fn expand(
        &mut self,
        definitions: &[ServiceDefinition],
        range_start: NaiveDate,
        range_end: NaiveDate,
    ) -> &[ServiceOccurrence] {
        let key = (fingerprint(definitions), range_start, range_end);
        self.results
            .entry(key)
            .or_insert_with(|| expand_definitions(definitions, range_start, range_end))
    }

    /// Number of cached expansion results.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Drop every cached result (e.g., after a definitions write).
    pub fn clear(&mut self) {
        self.results.clear();
    }
}
