//! User-authored exercise definitions and library categories.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Icon shown for exercises that do not carry their own.
pub const DEFAULT_EXERCISE_ICON: &str = "💪";

/// Prefix of identifiers generated for user-authored exercises.
///
/// Static catalogue identifiers never use it, so the two namespaces do not
/// collide.
pub const CUSTOM_EXERCISE_PREFIX: &str = "c_";

/// A user-authored exercise. Augments the static catalogue, never replaces it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomExercise {
    pub id: String,

    /// Display name in the user's language
    pub name: String,

    /// English name; empty when the stored exercise has none
    #[serde(rename = "nameEn", default)]
    pub name_en: String,

    #[serde(default)]
    pub description: String,

    #[serde(default = "default_icon")]
    pub icon: String,

    /// Category tags; the first entry is the category chosen at creation
    #[serde(default)]
    pub muscles: Vec<String>,

    /// Optional image payload (data URL)
    #[serde(default)]
    pub image: Option<String>,
}

impl CustomExercise {
    /// English name, falling back to the display name.
    pub fn english_name(&self) -> &str {
        if self.name_en.is_empty() {
            &self.name
        } else {
            &self.name_en
        }
    }
}

fn default_icon() -> String {
    DEFAULT_EXERCISE_ICON.to_string()
}

/// Exercise library categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseCategory {
    Cardio,
    Strength,
    Core,
    #[default]
    Custom,
}

impl ExerciseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseCategory::Cardio => "cardio",
            ExerciseCategory::Strength => "strength",
            ExerciseCategory::Core => "core",
            ExerciseCategory::Custom => "custom",
        }
    }

    /// Tag words that place an exercise in this category.
    ///
    /// The static catalogue tags exercises in either English or Arabic.
    /// `Custom` matches on origin rather than tags, so it has none.
    pub fn tag_words(&self) -> &'static [&'static str] {
        match self {
            ExerciseCategory::Cardio => &["cardio", "كارديو"],
            ExerciseCategory::Strength => &["strength", "قوة"],
            ExerciseCategory::Core => &["core", "بطن"],
            ExerciseCategory::Custom => &[],
        }
    }

    /// Whether any of `tags` places an exercise in this category.
    pub fn matches_tags(&self, tags: &[String]) -> bool {
        let joined = tags.join(" ").to_lowercase();
        self.tag_words().iter().any(|word| joined.contains(word))
    }
}

impl FromStr for ExerciseCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cardio" => Ok(ExerciseCategory::Cardio),
            "strength" => Ok(ExerciseCategory::Strength),
            "core" => Ok(ExerciseCategory::Core),
            "custom" => Ok(ExerciseCategory::Custom),
            _ => Err(format!("Invalid exercise category: {s}")),
        }
    }
}
