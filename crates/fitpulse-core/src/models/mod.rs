//! Data models for the program schedule.
//!
//! This module contains the domain models persisted inside the host
//! application's state object. Display implementations for these models are
//! located in [`crate::display::models`].
//!
//! - [`DayType`]: the closed set of day-type codes shared with the plan
//!   catalogue
//! - [`Program`]: duration, schedule override, per-day overrides and
//!   user-authored exercises
//! - [`DayOverrides`]: the `"d<day>"`-keyed override map
//! - [`AppState`]: the whole state object, with host-owned fields preserved
//!
//! # Examples
//!
//! ```rust
//! use fitpulse_core::models::{DayType, Program};
//!
//! let program = Program {
//!     duration_days: 3,
//!     schedule: Some(vec![DayType::Rest, DayType::Rope, DayType::Circuit]),
//!     ..Program::default()
//! };
//! assert!(program.valid_override().is_some());
//! ```

pub mod day_type;
pub mod exercise;
pub mod overrides;
pub mod program;
pub mod state;

pub use day_type::DayType;
pub use exercise::{CustomExercise, ExerciseCategory, CUSTOM_EXERCISE_PREFIX, DEFAULT_EXERCISE_ICON};
pub use overrides::DayOverrides;
pub use program::{Program, DEFAULT_DURATION_DAYS};
pub use state::{AppState, ChatMessage, ChatRole, Language, STATE_KEY};
