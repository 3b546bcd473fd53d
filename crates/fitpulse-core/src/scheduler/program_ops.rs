//! Program-level operations for the Scheduler.

use log::{info, warn};

use super::Scheduler;
use crate::{
    display::{OverviewDay, ScheduleOverview},
    error::{Result, ScheduleError},
    models::{ChatMessage, DayType, Language, Program},
    params::{ProgramLength, SetLanguage},
    schedule::{parse_suggestion, ApplyOutcome, ResolvedSchedule},
};

/// Shortest program the user can pick.
pub const MIN_SELECTABLE_DAYS: u32 = 7;

/// Longest program the user can pick.
pub const MAX_SELECTABLE_DAYS: u32 = 90;

/// Program lengths offered as one-tap choices.
pub const DURATION_PRESETS: [u32; 3] = [15, 21, 30];

impl Scheduler {
    /// Returns the current program.
    pub async fn program(&self) -> Result<Program> {
        Ok(self.load_state().await?.program)
    }

    /// Resolves the schedule to render, persisting it when resolution
    /// generated a fresh one.
    pub async fn resolve_schedule(&self) -> Result<ResolvedSchedule> {
        self.mutate(|state, plans| {
            let resolved = state.program.resolve(plans);
            let changed = resolved.source.committed();
            Ok((resolved, changed))
        })
        .await
    }

    /// Generates a schedule for the requested length and commits it.
    ///
    /// Lengths outside 7..=120 are clamped, never rejected.
    pub async fn generate(&self, params: &ProgramLength) -> Result<Vec<DayType>> {
        let days = params.days;
        self.mutate(move |state, plans| {
            let schedule = state.program.generate(days, plans.weekly_pattern());
            Ok((schedule, true))
        })
        .await
    }

    /// Sets the program length chosen by the user and regenerates.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::InvalidInput` if the length is outside 7..=90.
    pub async fn select_duration(&self, params: &ProgramLength) -> Result<Vec<DayType>> {
        let days = params.days;
        if !(MIN_SELECTABLE_DAYS..=MAX_SELECTABLE_DAYS).contains(&days) {
            return Err(ScheduleError::invalid_input("days").with_reason(format!(
                "program length must be between {MIN_SELECTABLE_DAYS} and {MAX_SELECTABLE_DAYS} days"
            )));
        }

        self.mutate(move |state, plans| {
            state.program.first_setup_complete = true;
            let schedule = state.program.generate(days, plans.weekly_pattern());
            Ok((schedule, true))
        })
        .await
    }

    /// Offers free-form text carrying a schedule suggestion to the program.
    ///
    /// A text without a valid suggestion leaves the program untouched and is
    /// reported as [`ApplyOutcome::Rejected`], not as an error.
    pub async fn apply_external_schedule(&self, text: &str) -> Result<ApplyOutcome> {
        let suggestion = match parse_suggestion(text) {
            Ok(suggestion) => suggestion,
            Err(rejection) => {
                warn!("Rejected schedule suggestion: {rejection}");
                return Ok(ApplyOutcome::Rejected(rejection));
            }
        };

        self.mutate(move |state, _| Ok((state.program.apply_suggestion(suggestion), true)))
            .await
    }

    /// Clears the schedule override and every day override.
    pub async fn reset_all(&self) -> Result<()> {
        self.mutate(|state, _| {
            state.program.reset_all();
            Ok(((), true))
        })
        .await
    }

    /// Changes the language used for coach replies.
    pub async fn set_language(&self, params: &SetLanguage) -> Result<Language> {
        let language = params.language;
        self.mutate(move |state, _| {
            let changed = state.language != language;
            state.language = language;
            if changed {
                info!("Language set to {}", language.as_str());
            }
            Ok((language, changed))
        })
        .await
    }

    /// The persisted general coach conversation.
    pub async fn chat_history(&self) -> Result<Vec<ChatMessage>> {
        Ok(self.load_state().await?.chat_history)
    }

    /// Forgets the persisted coach conversation.
    pub async fn clear_chat_history(&self) -> Result<()> {
        self.mutate(|state, _| {
            let changed = !state.chat_history.is_empty();
            state.chat_history.clear();
            Ok(((), changed))
        })
        .await
    }

    /// Turns the AI coach on or off.
    pub async fn set_coach_enabled(&self, enabled: bool) -> Result<bool> {
        self.mutate(move |state, _| {
            let changed = state.ai_coach_enabled != enabled;
            state.ai_coach_enabled = enabled;
            Ok((enabled, changed))
        })
        .await
    }

    /// The resolved schedule with per-day labels and override markers.
    pub async fn schedule_overview(&self) -> Result<ScheduleOverview> {
        self.mutate(|state, plans| {
            let resolved = state.program.resolve(plans);
            let changed = resolved.source.committed();
            let program = &state.program;

            let days = resolved
                .days
                .iter()
                .zip(1u32..)
                .map(|(day_type, day)| OverviewDay {
                    day,
                    day_type: *day_type,
                    label: plans.plan(*day_type).map(|plan| plan.label.clone()),
                    overridden: program.day_overrides.contains(day),
                })
                .collect();

            let overview = ScheduleOverview {
                source: resolved.source,
                duration_days: program.duration_days,
                days,
                orphaned_overrides: program.day_overrides.orphaned(program.duration_days),
            };
            Ok((overview, changed))
        })
        .await
    }
}
