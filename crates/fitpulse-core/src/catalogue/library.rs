//! Merged view over the static catalogue and user-authored exercises.

use std::collections::BTreeMap;

use super::ExerciseCatalogue;
use crate::models::{CustomExercise, ExerciseCategory, DEFAULT_EXERCISE_ICON};

/// One exercise as shown in the library.
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryEntry {
    pub id: String,
    pub name: String,
    pub name_en: String,
    pub icon: String,
    pub tags: Vec<String>,
    /// Whether the entry is user-authored
    pub custom: bool,
}

/// Read-only lookup across both exercise sources. Neither is mutated.
pub struct ExerciseLibrary<'a> {
    catalogue: &'a dyn ExerciseCatalogue,
    custom: &'a BTreeMap<String, CustomExercise>,
}

impl<'a> ExerciseLibrary<'a> {
    pub fn new(
        catalogue: &'a dyn ExerciseCatalogue,
        custom: &'a BTreeMap<String, CustomExercise>,
    ) -> Self {
        Self { catalogue, custom }
    }

    /// Looks up an exercise, preferring the static catalogue.
    pub fn entry(&self, id: &str) -> Option<LibraryEntry> {
        if let Some(exercise) = self.catalogue.exercise(id) {
            return Some(LibraryEntry {
                id: id.to_string(),
                name: exercise.name.clone(),
                name_en: exercise.name_en.clone(),
                icon: exercise
                    .icon
                    .clone()
                    .unwrap_or_else(|| DEFAULT_EXERCISE_ICON.to_string()),
                tags: exercise.muscles.clone(),
                custom: false,
            });
        }
        self.custom.get(id).map(|exercise| LibraryEntry {
            id: id.to_string(),
            name: exercise.name.clone(),
            name_en: exercise.english_name().to_string(),
            icon: exercise.icon.clone(),
            tags: exercise.muscles.clone(),
            custom: true,
        })
    }

    /// Display name for an exercise ID. Unknown IDs render as themselves.
    pub fn label(&self, id: &str) -> String {
        self.entry(id)
            .map(|entry| entry.name)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| id.to_string())
    }

    /// Every exercise, static entries first, then user-authored ones.
    pub fn all(&self) -> Vec<LibraryEntry> {
        let static_ids = self.catalogue.exercises();
        let custom_ids = self
            .custom
            .keys()
            .filter(|id| self.catalogue.exercise(id).is_none());

        static_ids
            .into_iter()
            .map(|(id, _)| id)
            .chain(custom_ids.map(String::as_str))
            .filter_map(|id| self.entry(id))
            .collect()
    }

    /// Filters the library by a case-insensitive name query and an optional
    /// category.
    pub fn search(&self, query: &str, category: Option<ExerciseCategory>) -> Vec<LibraryEntry> {
        let query = query.trim().to_lowercase();
        self.all()
            .into_iter()
            .filter(|entry| {
                if query.is_empty() {
                    return true;
                }
                let name = if entry.name.is_empty() {
                    entry.id.to_lowercase()
                } else {
                    entry.name.to_lowercase()
                };
                name.contains(&query) || entry.name_en.to_lowercase().contains(&query)
            })
            .filter(|entry| match category {
                None => true,
                Some(ExerciseCategory::Custom) => entry.custom,
                Some(category) => category.matches_tags(&entry.tags),
            })
            .collect()
    }
}
