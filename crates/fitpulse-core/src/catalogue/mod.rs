//! Read-only catalogues the schedule consults.
//!
//! Two capabilities are injected into the [`crate::Scheduler`]:
//!
//! - [`PlanCatalogue`]: the base weekly pattern and, for each non-rest
//!   [`DayType`], a label and default ordered exercise list
//! - [`ExerciseCatalogue`]: the static exercise library
//!
//! [`StaticCatalogue`] implements both from JSON. The built-in catalogue is
//! embedded at compile time; a replacement can be loaded from a file.

use std::{collections::BTreeMap, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, ScheduleError},
    models::DayType,
};

pub mod library;

pub use library::{ExerciseLibrary, LibraryEntry};

/// Pattern used by the generator when the catalogue supplies none:
/// rope, circuit, rope intervals, walk, HIIT, strength, rest.
pub const DEFAULT_WEEKLY_PATTERN: [DayType; 7] = [
    DayType::Rope,
    DayType::Circuit,
    DayType::RopeIntervals,
    DayType::Walk,
    DayType::Hiit,
    DayType::Strength,
    DayType::Rest,
];

/// Label and default exercise list for one day type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanTemplate {
    pub label: String,
    #[serde(default)]
    pub exercises: Vec<String>,
}

/// A static catalogue exercise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogueExercise {
    pub name: String,
    #[serde(rename = "nameEn", default)]
    pub name_en: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub muscles: Vec<String>,
}

/// Mapping from day type to label and default exercises.
pub trait PlanCatalogue: Send + Sync {
    /// Base weekly cycle of day types. May be empty.
    fn weekly_pattern(&self) -> &[DayType];

    /// Template for a day type, if the catalogue defines one.
    fn plan(&self, day_type: DayType) -> Option<&PlanTemplate>;

    /// All templates in day-type order.
    fn plans(&self) -> Vec<(DayType, &PlanTemplate)>;
}

/// Mapping from exercise ID to display information.
pub trait ExerciseCatalogue: Send + Sync {
    fn exercise(&self, id: &str) -> Option<&CatalogueExercise>;

    /// All exercises in ID order.
    fn exercises(&self) -> Vec<(&str, &CatalogueExercise)>;
}

/// JSON-backed implementation of both catalogues.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StaticCatalogue {
    #[serde(rename = "weeklyPattern", default)]
    weekly_pattern: Vec<DayType>,
    #[serde(default)]
    plans: BTreeMap<DayType, PlanTemplate>,
    #[serde(default)]
    exercises: BTreeMap<String, CatalogueExercise>,
}

impl StaticCatalogue {
    /// The catalogue bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::Serialization` if the embedded JSON is invalid.
    pub fn builtin() -> Result<Self> {
        Self::from_json(include_str!("../../assets/catalogue.json"))
    }

    /// Parses a catalogue from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a catalogue from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::FileSystem` if the file cannot be read and
    /// `ScheduleError::Configuration` if it cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| ScheduleError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&json).map_err(|e| {
            ScheduleError::configuration(format!(
                "Invalid catalogue file '{}': {e}",
                path.display()
            ))
        })
    }
}

impl PlanCatalogue for StaticCatalogue {
    fn weekly_pattern(&self) -> &[DayType] {
        &self.weekly_pattern
    }

    fn plan(&self, day_type: DayType) -> Option<&PlanTemplate> {
        self.plans.get(&day_type)
    }

    fn plans(&self) -> Vec<(DayType, &PlanTemplate)> {
        self.plans.iter().map(|(k, v)| (*k, v)).collect()
    }
}

impl ExerciseCatalogue for StaticCatalogue {
    fn exercise(&self, id: &str) -> Option<&CatalogueExercise> {
        self.exercises.get(id)
    }

    fn exercises(&self) -> Vec<(&str, &CatalogueExercise)> {
        self.exercises.iter().map(|(k, v)| (k.as_str(), v)).collect()
    }
}
