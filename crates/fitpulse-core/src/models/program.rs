//! Program model: duration, schedule override and per-day overrides.

use std::collections::BTreeMap;

use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{CustomExercise, DayOverrides, DayType};

/// Program length used before the user has chosen one.
pub const DEFAULT_DURATION_DAYS: u32 = 30;

/// The active program configuration.
///
/// Field names on the wire match the host application's state object so the
/// program can be flattened into it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Program {
    /// Total number of days in the program
    #[serde(rename = "programDuration", default = "default_duration")]
    pub duration_days: u32,

    /// Explicit day-by-day schedule. Only trusted while its length equals
    /// `duration_days`.
    #[serde(
        rename = "customSchedule",
        default,
        deserialize_with = "deserialize_schedule"
    )]
    pub schedule: Option<Vec<DayType>>,

    /// Edited exercise lists keyed by day number
    #[serde(rename = "customDayExercises", default)]
    pub day_overrides: DayOverrides,

    /// User-authored exercises keyed by generated ID
    #[serde(rename = "customExercises", default)]
    pub custom_exercises: BTreeMap<String, CustomExercise>,

    /// Whether the first-launch setup has been completed
    #[serde(rename = "firstLaunchComplete", default)]
    pub first_setup_complete: bool,
}

fn default_duration() -> u32 {
    DEFAULT_DURATION_DAYS
}

/// A stored schedule that is not a list of valid day-type codes is treated as
/// absent.
fn deserialize_schedule<'de, D>(deserializer: D) -> Result<Option<Vec<DayType>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(value) => match serde_json::from_value::<Vec<DayType>>(value) {
            Ok(schedule) => Some(schedule),
            Err(e) => {
                warn!("Ignoring stored schedule that is not a list of day types: {e}");
                None
            }
        },
    })
}

impl Default for Program {
    fn default() -> Self {
        Self {
            duration_days: DEFAULT_DURATION_DAYS,
            schedule: None,
            day_overrides: DayOverrides::new(),
            custom_exercises: BTreeMap::new(),
            first_setup_complete: false,
        }
    }
}

impl Program {
    /// The stored schedule, if it is valid for the current duration.
    pub fn valid_override(&self) -> Option<&[DayType]> {
        self.schedule
            .as_deref()
            .filter(|schedule| schedule.len() == self.duration_days as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_missing_fields() {
        let program: Program = serde_json::from_str("{}").unwrap();
        assert_eq!(program, Program::default());
        assert_eq!(program.duration_days, 30);
    }

    #[test]
    fn test_invalid_stored_schedule_is_absent() {
        let program: Program =
            serde_json::from_str(r#"{"programDuration":3,"customSchedule":[0,1,42]}"#).unwrap();
        assert_eq!(program.schedule, None);

        let program: Program =
            serde_json::from_str(r#"{"programDuration":3,"customSchedule":"weekly"}"#).unwrap();
        assert_eq!(program.schedule, None);
    }

    #[test]
    fn test_valid_override_requires_matching_length() {
        let mut program = Program {
            duration_days: 3,
            schedule: Some(vec![DayType::Rest, DayType::Rope, DayType::Circuit]),
            ..Program::default()
        };
        assert_eq!(program.valid_override().map(<[DayType]>::len), Some(3));

        program.duration_days = 4;
        assert!(program.valid_override().is_none());
    }
}
