//! System prompts for the coach.

use std::fmt::Write;

use super::ChatMode;
use crate::{
    catalogue::{ExerciseLibrary, PlanCatalogue},
    models::AppState,
};

/// Builds the system message for a conversation.
///
/// Both modes list the exercise library and the plan types. Schedule building
/// asks for a bare JSON object the scheduler can apply; general mode adds the
/// user's program context.
pub fn build_system_prompt(
    mode: ChatMode,
    state: &AppState,
    plans: &dyn PlanCatalogue,
    library: &ExerciseLibrary<'_>,
) -> String {
    let language = state.language.english_name();
    let exercises = exercise_lines(library);
    let plan_types = plan_lines(plans);

    match mode {
        ChatMode::ScheduleBuilding => format!(
            "You are an AI fitness coach helping the user create a personalized training schedule.
Respond ONLY in {language}. Be friendly, concise, and professional.

You have this exercise library:
{exercises}

And these plan types:
{plan_types}

Ask the user (one question at a time) about:
1) Goal (weight loss / muscle gain / general fitness)
2) Fitness level (beginner / intermediate / advanced)
3) Days per week available
4) Session length in minutes
5) Injuries / limitations
6) Available equipment (none / jump rope / gym)

After collecting enough information, generate ONLY a JSON object with:
{{
  \"duration\": <number_of_days>,
  \"schedule\": [array of numbers 0..6 for each day],
  \"customDays\": {{
    \"d1\": [\"rope\",\"burpees\"],
    \"d2\": [\"pushup\",\"squat\"]
  }}
}}

Do NOT wrap the JSON in backticks. The app will parse that JSON."
        ),
        ChatMode::General => format!(
            "You are an AI fitness coach assistant for FITPULSE PRO.
Respond ONLY in {language}. You can:
- Answer fitness questions
- Suggest schedule adjustments
- Recommend exercises from the library

Exercise library:
{exercises}

Plan types:
{plan_types}

User context:
- Program duration: {} days
- Completed days: {}",
            state.program.duration_days,
            state.completed_days()
        ),
    }
}

fn exercise_lines(library: &ExerciseLibrary<'_>) -> String {
    library
        .all()
        .iter()
        .map(|entry| {
            let name = if entry.name.is_empty() { &entry.id } else { &entry.name };
            let name_en = if entry.name_en.is_empty() { &entry.id } else { &entry.name_en };
            format!("{name} ({name_en})")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn plan_lines(plans: &dyn PlanCatalogue) -> String {
    let mut out = String::new();
    for (day_type, plan) in plans.plans() {
        if !out.is_empty() {
            out.push('\n');
        }
        let _ = write!(
            out,
            "Type {}: {} => [{}]",
            day_type.code(),
            plan.label,
            plan.exercises.join(", ")
        );
    }
    out
}
