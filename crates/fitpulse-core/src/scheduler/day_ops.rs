//! Per-day operations for the Scheduler.

use std::sync::Arc;

use log::info;

use super::Scheduler;
use crate::{
    catalogue::ExerciseLibrary,
    display::{DayView, ExerciseLine},
    error::Result,
    params::{AddDayExercise, Day, RemoveDayExercise, SetDayExercises},
    schedule::DayPlan,
};

impl Scheduler {
    /// Resolves the schedule and builds the plan for one day.
    pub async fn day_plan(&self, params: &Day) -> Result<DayPlan> {
        let day = params.day;
        self.mutate(move |state, plans| {
            let (plan, resolved) = state.program.day_plan(day, plans);
            Ok((plan, resolved.source.committed()))
        })
        .await
    }

    /// The exercise IDs to perform on a day.
    ///
    /// An explicit empty override yields an empty list, not the catalogue
    /// default.
    pub async fn effective_exercises(&self, params: &Day) -> Result<Vec<String>> {
        Ok(self.day_plan(params).await?.exercises)
    }

    /// A day's plan with display labels for every exercise.
    pub async fn day_view(&self, params: &Day) -> Result<DayView> {
        let day = params.day;
        let exercises = Arc::clone(&self.exercises);

        self.mutate(move |state, plans| {
            let (plan, resolved) = state.program.day_plan(day, plans);
            let library = ExerciseLibrary::new(exercises.as_ref(), &state.program.custom_exercises);
            let entries = plan
                .exercises
                .iter()
                .map(|id| match library.entry(id) {
                    Some(entry) => ExerciseLine {
                        id: id.clone(),
                        label: library.label(id),
                        icon: Some(entry.icon),
                    },
                    None => ExerciseLine {
                        id: id.clone(),
                        label: id.clone(),
                        icon: None,
                    },
                })
                .collect();
            Ok((DayView { plan, entries }, resolved.source.committed()))
        })
        .await
    }

    /// Replaces a day's exercise list. Exercise IDs are stored unchecked.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::InvalidInput` for day `0`.
    pub async fn set_day_override(&self, params: &SetDayExercises) -> Result<()> {
        let day = params.day;
        let exercises = params.exercises.clone();
        self.mutate(move |state, _| {
            let count = exercises.len();
            state.program.set_day_override(day, exercises)?;
            info!("Set {count} exercises for day {day}");
            Ok(((), true))
        })
        .await
    }

    /// Appends an exercise to a day's effective list.
    pub async fn add_exercise_to_day(&self, params: &AddDayExercise) -> Result<DayPlan> {
        let day = params.day;
        let exercise_id = params.exercise_id.clone();
        self.mutate(move |state, plans| {
            let plan = state.program.add_exercise_to_day(day, &exercise_id, plans)?;
            Ok((plan, true))
        })
        .await
    }

    /// Removes the exercise at a position from a day's effective list.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::InvalidInput` for day `0` or an index past the
    /// end of the list.
    pub async fn remove_exercise_from_day(&self, params: &RemoveDayExercise) -> Result<DayPlan> {
        let day = params.day;
        let index = params.index;
        self.mutate(move |state, plans| {
            let plan = state.program.remove_exercise_from_day(day, index, plans)?;
            Ok((plan, true))
        })
        .await
    }
}
