//! Parameter structures for schedule operations
//!
//! These structures are shared by every interface (the CLI today) and carry
//! no framework-specific derives. Interface layers define their own argument
//! types and convert into these with `From` implementations:
//!
//! ```text
//! CLI Args (clap derives) ──▶ Core Params ──▶ Scheduler
//! ```
//!
//! Validation that belongs to the data-entry boundary (duration range,
//! required names) happens in the [`crate::Scheduler`] operations, not here.

use serde::{Deserialize, Serialize};

use crate::models::{ExerciseCategory, Language};

/// Parameters for operations on a program length.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgramLength {
    /// Number of days in the program
    pub days: u32,
}

/// Parameters for operations on one program day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Day {
    /// 1-based day number
    pub day: u32,
}

/// Parameters for replacing a day's exercise list.
///
/// An empty `exercises` list stores an explicit "no exercises" override.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetDayExercises {
    pub day: u32,
    pub exercises: Vec<String>,
}

/// Parameters for appending an exercise to a day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddDayExercise {
    pub day: u32,
    pub exercise_id: String,
}

/// Parameters for removing an exercise from a day by position.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoveDayExercise {
    pub day: u32,
    /// 0-based position in the day's effective list
    pub index: usize,
}

/// Parameters for creating a user-authored exercise.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewExercise {
    /// Display name (required)
    pub name: String,
    /// English name; defaults to `name`
    pub name_en: Option<String>,
    pub description: Option<String>,
    /// Defaults to [`ExerciseCategory::Custom`]
    pub category: Option<ExerciseCategory>,
    /// Image payload, typically a data URL
    pub image: Option<String>,
}

/// Parameters identifying an exercise.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExerciseId {
    pub id: String,
}

/// Parameters for searching the exercise library.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchExercises {
    /// Case-insensitive substring of the name or English name
    #[serde(default)]
    pub query: String,
    pub category: Option<ExerciseCategory>,
}

/// Parameters for changing the UI language.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetLanguage {
    pub language: Language,
}
