//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::{catalogue::LibraryEntry, models::ChatMessage};

/// Newtype wrapper for displaying exercise library search results.
///
/// # Examples
///
/// ```rust
/// use fitpulse_core::{catalogue::LibraryEntry, display::ExerciseList};
///
/// let entry = LibraryEntry {
///     id: "plank".to_string(),
///     name: "بلانك".to_string(),
///     name_en: "Plank".to_string(),
///     icon: "🧱".to_string(),
///     tags: vec!["core".to_string()],
///     custom: false,
/// };
///
/// let output = format!("{}", ExerciseList(vec![entry]));
/// assert!(output.contains("Plank"));
/// ```
pub struct ExerciseList(pub Vec<LibraryEntry>);

impl ExerciseList {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&LibraryEntry> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LibraryEntry> {
        self.0.iter()
    }
}

impl Index<usize> for ExerciseList {
    type Output = LibraryEntry;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for ExerciseList {
    type Item = LibraryEntry;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ExerciseList {
    type Item = &'a LibraryEntry;
    type IntoIter = std::slice::Iter<'a, LibraryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ExerciseList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No exercises found.");
        }
        for entry in &self.0 {
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

/// A coach conversation, oldest message first.
pub struct Transcript<'a>(pub &'a [ChatMessage]);

impl fmt::Display for Transcript<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No messages yet.");
        }
        for message in self.0 {
            write!(f, "{message}")?;
            writeln!(f)?;
        }
        Ok(())
    }
}
