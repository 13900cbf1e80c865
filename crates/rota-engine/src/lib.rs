//! # rota-engine
//!
//! Deterministic occurrence expansion and campus-aware schedule resolution
//! for team rotations.
//!
//! The engine is the pure computational core of a scheduling application:
//! it turns persisted service definitions (one-off or weekly-recurring) into
//! concrete dated occurrences over a caller-supplied range, and picks the
//! single applicable team assignment per date when shared and campus-specific
//! schedule entries overlap. All functions are side-effect-free over
//! immutable snapshots; data fetch, caching policy, and rendering belong to
//! the surrounding layers.
//!
//! ## Modules
//!
//! - [`expander`] — service definitions → sorted list of dated occurrences
//! - [`resolver`] — schedule entries → one winning entry per (date, category)
//! - [`model`] — typed records: definitions, occurrences, entries, teams
//! - [`filter`] — in-process query predicates matching the datastore filters
//! - [`memo`] — caller-owned memoization for repeated expansions
//! - [`range`] — date parsing and weekday-aligned range arithmetic
//! - [`error`] — error types

pub mod error;
pub mod expander;
pub mod filter;
pub mod memo;
pub mod model;
pub mod range;
pub mod resolver;

pub use error::RotaError;
pub use expander::expand_definitions;
pub use memo::ExpansionCache;
pub use model::{ScheduleEntry, ServiceDefinition, ServiceOccurrence, Team};
pub use resolver::{applicable_entries, entry_for_date, resolve_by_key, ScheduleKey};
