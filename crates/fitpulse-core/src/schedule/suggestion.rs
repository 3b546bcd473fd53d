//! Extraction of schedule suggestions from free-form completion text.

use log::info;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::{DayOverrides, DayType, Program};

/// A validated schedule suggestion.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleSuggestion {
    /// Declared duration, or the schedule length when none was declared
    pub duration_days: u32,
    pub schedule: Vec<DayType>,
    /// Replacement day overrides, when the payload carried a `customDays` map
    pub custom_days: Option<DayOverrides>,
}

/// Why a suggestion was not applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuggestionRejection {
    #[error("no JSON object found in the response")]
    NoObject,
    #[error("embedded JSON could not be parsed: {0}")]
    InvalidJson(String),
    #[error("embedded JSON is not an object")]
    NotAnObject,
    #[error("payload has no 'schedule' list")]
    MissingSchedule,
    #[error("schedule entry {index} is not a day-type code: {value}")]
    InvalidDayType { index: usize, value: String },
}

/// Outcome of offering a suggestion to the program.
#[derive(Debug, Clone, PartialEq)]
pub enum ApplyOutcome {
    Applied {
        duration_days: u32,
        schedule_len: usize,
        replaced_overrides: bool,
    },
    Rejected(SuggestionRejection),
}

impl ApplyOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ApplyOutcome::Applied { .. })
    }
}

/// The candidate payload: from the first `{` to the last `}` in `text`.
pub fn extract_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// Locates, parses and validates a schedule suggestion embedded in `text`.
pub fn parse_suggestion(text: &str) -> Result<ScheduleSuggestion, SuggestionRejection> {
    let candidate = extract_object(text).ok_or(SuggestionRejection::NoObject)?;
    let value: Value = serde_json::from_str(candidate)
        .map_err(|e| SuggestionRejection::InvalidJson(e.to_string()))?;
    let Value::Object(object) = value else {
        return Err(SuggestionRejection::NotAnObject);
    };

    let schedule = parse_schedule(&object)?;
    let duration_days = object
        .get("duration")
        .and_then(Value::as_u64)
        .filter(|days| *days > 0)
        .and_then(|days| u32::try_from(days).ok())
        .unwrap_or(schedule.len() as u32);
    let custom_days = match object.get("customDays") {
        Some(days @ Value::Object(_)) => serde_json::from_value(days.clone()).ok(),
        _ => None,
    };

    Ok(ScheduleSuggestion {
        duration_days,
        schedule,
        custom_days,
    })
}

fn parse_schedule(object: &Map<String, Value>) -> Result<Vec<DayType>, SuggestionRejection> {
    let Some(Value::Array(items)) = object.get("schedule") else {
        return Err(SuggestionRejection::MissingSchedule);
    };
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_u64()
                .and_then(|code| u8::try_from(code).ok())
                .and_then(DayType::from_code)
                .ok_or_else(|| SuggestionRejection::InvalidDayType {
                    index,
                    value: item.to_string(),
                })
        })
        .collect()
}

impl Program {
    /// Replaces duration, schedule and (when supplied) day overrides
    /// wholesale, and marks first setup as complete.
    pub fn apply_suggestion(&mut self, suggestion: ScheduleSuggestion) -> ApplyOutcome {
        let ScheduleSuggestion {
            duration_days,
            schedule,
            custom_days,
        } = suggestion;
        let schedule_len = schedule.len();
        let replaced_overrides = custom_days.is_some();

        self.duration_days = duration_days;
        self.schedule = Some(schedule);
        if let Some(custom_days) = custom_days {
            self.day_overrides = custom_days;
        }
        self.first_setup_complete = true;

        info!("Applied suggested {duration_days}-day schedule");
        ApplyOutcome::Applied {
            duration_days,
            schedule_len,
            replaced_overrides,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use DayType::*;

    #[test]
    fn test_extracts_object_between_noise() {
        let suggestion =
            parse_suggestion(r#"noise {"schedule":[0,1,2],"duration":3} trailing"#).unwrap();
        assert_eq!(suggestion.duration_days, 3);
        assert_eq!(suggestion.schedule, vec![Rest, Rope, Circuit]);
        assert_eq!(suggestion.custom_days, None);
    }

    #[test]
    fn test_duration_defaults_to_schedule_length() {
        let suggestion = parse_suggestion(r#"{"schedule":[1,2,3,4]}"#).unwrap();
        assert_eq!(suggestion.duration_days, 4);

        let zero = parse_suggestion(r#"{"schedule":[1,2],"duration":0}"#).unwrap();
        assert_eq!(zero.duration_days, 2);
    }

    #[test]
    fn test_custom_days_only_when_a_map() {
        let with_map = parse_suggestion(
            r#"Here you go: {"duration":2,"schedule":[1,0],"customDays":{"d1":["rope","burpees"]}}"#,
        )
        .unwrap();
        let days = with_map.custom_days.expect("customDays should be parsed");
        assert_eq!(
            days.get(1),
            Some(&["rope".to_string(), "burpees".to_string()][..])
        );

        let with_list =
            parse_suggestion(r#"{"schedule":[1,0],"customDays":[["rope"]]}"#).unwrap();
        assert_eq!(with_list.custom_days, None);
    }

    #[test]
    fn test_rejections() {
        assert_eq!(
            parse_suggestion("no json here"),
            Err(SuggestionRejection::NoObject)
        );
        assert_eq!(
            parse_suggestion(r#"{"duration":7}"#),
            Err(SuggestionRejection::MissingSchedule)
        );
        assert_eq!(
            parse_suggestion(r#"{"schedule":"weekly"}"#),
            Err(SuggestionRejection::MissingSchedule)
        );
        assert!(matches!(
            parse_suggestion(r#"{"schedule":[1,9]}"#),
            Err(SuggestionRejection::InvalidDayType { index: 1, .. })
        ));
        assert!(matches!(
            parse_suggestion("} backwards {"),
            Err(SuggestionRejection::NoObject)
        ));
        assert!(matches!(
            parse_suggestion(r#"{"schedule":[1]} and {"more":true}"#),
            Err(SuggestionRejection::InvalidJson(_))
        ));
    }

    #[test]
    fn test_apply_replaces_wholesale() {
        let mut program = Program::default();
        program.day_overrides.set(5, vec!["plank".to_string()]);

        let suggestion = parse_suggestion(r#"{"schedule":[0,1,2],"duration":3}"#).unwrap();
        let outcome = program.apply_suggestion(suggestion);

        assert!(outcome.is_applied());
        assert_eq!(program.duration_days, 3);
        assert_eq!(program.schedule, Some(vec![Rest, Rope, Circuit]));
        // No customDays in the payload: existing overrides are kept.
        assert!(program.day_overrides.contains(5));
        assert!(program.first_setup_complete);
    }
}
