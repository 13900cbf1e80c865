//! Occurrence expansion -- converts service definitions into concrete dated
//! instances intersecting a closed query range.
//!
//! Recurrence is computed on read rather than materialized: `repeat_until`
//! can be open-ended, so only the caller's range bounds the enumeration.
//! Identical inputs produce deep-equal, identically ordered output, which
//! lets callers memoize by `(definitions, range)` — see [`crate::memo`].

use chrono::{Duration, NaiveDate};

use crate::model::{ServiceDefinition, ServiceOccurrence};
use crate::range::first_aligned_on_or_after;

/// Expand `definitions` into every occurrence falling inside
/// `[range_start, range_end]`, inclusive on both ends.
///
/// - Inactive definitions contribute nothing.
/// - A non-recurring definition yields its anchor date iff it is in range.
/// - A weekly definition yields one occurrence per 7-day step on the anchor's
///   weekday, starting from the first in-range aligned date and stopping past
///   `range_end` or past `repeat_until` (a candidate exactly on either bound
///   is still included).
///
/// The result is sorted ascending by `(occurrence_date, start_time)` with an
/// absent start time ordering before any concrete time. An inverted range
/// (`range_start > range_end`) yields an empty result rather than an error —
/// callers pass degenerate ranges during UI transitions.
pub fn expand_definitions(
    definitions: &[ServiceDefinition],
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> Vec<ServiceOccurrence> {
    if range_start > range_end {
        return Vec::new();
    }

    let mut occurrences = Vec::new();

    for definition in definitions {
        if !definition.is_active {
            continue;
        }

        if !definition.repeats_weekly {
            let date = definition.anchor_date;
            if date >= range_start && date <= range_end {
                occurrences.push(ServiceOccurrence::from_definition(definition, date));
            }
            continue;
        }

        // Fast-forward to the first candidate inside the range instead of
        // enumerating week by week from the anchor.
        let mut candidate = first_aligned_on_or_after(definition.anchor_date, range_start);
        while candidate <= range_end {
            if definition
                .repeat_until
                .is_some_and(|until| candidate > until)
            {
                break;
            }
            occurrences.push(ServiceOccurrence::from_definition(definition, candidate));
            candidate += Duration::days(7);
        }
    }

    // `Option<NaiveTime>` orders None first, realizing the "absent time sorts
    // before any defined time" rule. The sort is stable, so full ties keep
    // input order and the result stays deterministic.
    occurrences.sort_by(|a, b| {
        (a.occurrence_date, a.start_time).cmp(&(b.occurrence_date, b.start_time))
    });

    occurrences
}
