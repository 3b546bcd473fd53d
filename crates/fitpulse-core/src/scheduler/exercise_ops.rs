//! Exercise library operations for the Scheduler.

use std::sync::Arc;

use jiff::Timestamp;
use log::info;

use super::Scheduler;
use crate::{
    catalogue::{ExerciseCatalogue, ExerciseLibrary, LibraryEntry},
    error::{Result, ScheduleError},
    models::{CustomExercise, Program, CUSTOM_EXERCISE_PREFIX, DEFAULT_EXERCISE_ICON},
    params::{ExerciseId, NewExercise, SearchExercises},
};

impl Scheduler {
    /// Adds a user-authored exercise to the library.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::InvalidInput` if the name is blank.
    pub async fn create_custom_exercise(&self, params: &NewExercise) -> Result<CustomExercise> {
        let name = params.name.trim().to_string();
        if name.is_empty() {
            return Err(ScheduleError::invalid_input("name").with_reason("name must not be empty"));
        }

        let name_en = params
            .name_en
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map_or_else(|| name.clone(), str::to_string);
        let category = params.category.unwrap_or_default();
        let description = params.description.clone().unwrap_or_default();
        let image = params.image.clone().filter(|value| !value.is_empty());
        let catalogue = Arc::clone(&self.exercises);

        self.mutate(move |state, _| {
            let id = next_exercise_id(
                Timestamp::now().as_millisecond(),
                &state.program,
                catalogue.as_ref(),
            );
            let exercise = CustomExercise {
                id: id.clone(),
                name,
                name_en,
                description,
                icon: DEFAULT_EXERCISE_ICON.to_string(),
                muscles: vec![category.as_str().to_string()],
                image,
            };
            state.program.custom_exercises.insert(id, exercise.clone());
            info!("Created custom exercise {}", exercise.id);
            Ok((exercise, true))
        })
        .await
    }

    /// Removes a user-authored exercise. Day overrides that reference it are
    /// left as they are.
    ///
    /// Returns the removed exercise, or `None` if no such exercise exists.
    pub async fn delete_custom_exercise(&self, params: &ExerciseId) -> Result<Option<CustomExercise>> {
        let id = params.id.clone();
        self.mutate(move |state, _| {
            let removed = state.program.custom_exercises.remove(&id);
            if removed.is_some() {
                info!("Deleted custom exercise {id}");
            }
            let changed = removed.is_some();
            Ok((removed, changed))
        })
        .await
    }

    /// Searches the static and user-authored exercises together.
    pub async fn search_exercises(&self, params: &SearchExercises) -> Result<Vec<LibraryEntry>> {
        let state = self.load_state().await?;
        let library = ExerciseLibrary::new(self.exercises.as_ref(), &state.program.custom_exercises);
        Ok(library.search(&params.query, params.category))
    }

    /// Display name for an exercise ID; unknown IDs are returned unchanged.
    pub async fn exercise_label(&self, params: &ExerciseId) -> Result<String> {
        let state = self.load_state().await?;
        let library = ExerciseLibrary::new(self.exercises.as_ref(), &state.program.custom_exercises);
        Ok(library.label(&params.id))
    }
}

/// `c_` followed by the base-36 millisecond timestamp, moved forward one
/// millisecond at a time until it collides with nothing.
fn next_exercise_id(millis: i64, program: &Program, catalogue: &dyn ExerciseCatalogue) -> String {
    let mut millis = millis.max(0) as u64;
    loop {
        let id = format!("{CUSTOM_EXERCISE_PREFIX}{}", to_base36(millis));
        if !program.custom_exercises.contains_key(&id) && catalogue.exercise(&id).is_none() {
            return id;
        }
        millis += 1;
    }
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::StaticCatalogue;

    #[test]
    fn test_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(1_700_000_000_000), "loyw3v28");
    }

    #[test]
    fn test_next_id_skips_taken_ids() {
        let catalogue = StaticCatalogue::builtin().unwrap();
        let mut program = Program::default();
        let first = next_exercise_id(36, &program, &catalogue);
        assert_eq!(first, "c_10");

        program.custom_exercises.insert(
            first.clone(),
            CustomExercise {
                id: first.clone(),
                name: "A".to_string(),
                name_en: "A".to_string(),
                description: String::new(),
                icon: DEFAULT_EXERCISE_ICON.to_string(),
                muscles: vec![],
                image: None,
            },
        );
        assert_eq!(next_exercise_id(36, &program, &catalogue), "c_11");
    }
}
