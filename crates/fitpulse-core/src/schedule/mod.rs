//! Schedule derivation and the override model.
//!
//! Everything here is synchronous and operates on an in-memory
//! [`Program`](crate::models::Program); persistence and locking live in
//! [`crate::scheduler`].
//!
//! - [`generator`]: program length to day-type sequence, with weekly rest
//!   anchoring
//! - [`resolver`]: override, generated or tiled fallback, tagged with the
//!   tier that fired
//! - [`suggestion`]: locating and validating a suggested schedule in
//!   free-form completion text
//! - [`editing`]: effective per-day exercise lists and override edits

pub mod editing;
pub mod generator;
pub mod resolver;
pub mod suggestion;

pub use editing::DayPlan;
pub use generator::{clamp_days, generate_schedule, MAX_GENERATED_DAYS, MIN_GENERATED_DAYS};
pub use resolver::{tile_pattern, ResolvedSchedule, ScheduleSource};
pub use suggestion::{
    extract_object, parse_suggestion, ApplyOutcome, ScheduleSuggestion, SuggestionRejection,
};
