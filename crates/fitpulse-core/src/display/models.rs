//! Display implementations for domain models.
//!
//! Kept apart from the model definitions. Output is markdown so the CLI can
//! hand it straight to the terminal renderer.

use std::fmt;

use crate::{
    catalogue::LibraryEntry,
    models::{ChatMessage, ChatRole, CustomExercise, DayType, ExerciseCategory, Language},
    schedule::{ApplyOutcome, DayPlan, ScheduleSource},
};

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ExerciseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ScheduleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for DayPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.label.as_deref().unwrap_or(self.day_type.as_str());
        writeln!(f, "## Day {}: {label}", self.day)?;
        writeln!(f)?;
        if self.exercises.is_empty() {
            writeln!(f, "No exercises.")?;
        }
        for id in &self.exercises {
            writeln!(f, "- {id}")?;
        }
        Ok(())
    }
}

impl fmt::Display for CustomExercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} {} (ID: {})", self.icon, self.name, self.id)?;
        writeln!(f)?;
        if self.english_name() != self.name {
            writeln!(f, "- **English**: {}", self.name_en)?;
        }
        if !self.muscles.is_empty() {
            writeln!(f, "- **Category**: {}", self.muscles.join(", "))?;
        }
        if self.image.is_some() {
            writeln!(f, "- **Image**: attached")?;
        }
        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }
        Ok(())
    }
}

impl fmt::Display for LibraryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let custom = if self.custom { " *(custom)*" } else { "" };
        write!(f, "- {} **{}**", self.icon, self.name)?;
        if !self.name_en.is_empty() && self.name_en != self.name {
            write!(f, " / {}", self.name_en)?;
        }
        writeln!(f, " `{}`{custom}", self.id)
    }
}

impl fmt::Display for ChatMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.role {
            ChatRole::User => writeln!(f, "**You:** {}", self.content),
            ChatRole::Assistant => writeln!(f, "**Coach:** {}", self.content),
            ChatRole::System => writeln!(f, "*{}*", self.content),
        }
    }
}

impl fmt::Display for ApplyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplyOutcome::Applied {
                duration_days,
                schedule_len,
                replaced_overrides,
            } => {
                writeln!(
                    f,
                    "Applied a {schedule_len}-day schedule for a {duration_days}-day program."
                )?;
                if schedule_len != &(*duration_days as usize) {
                    writeln!(
                        f,
                        "The schedule length does not match the program length and will be regenerated."
                    )?;
                }
                if *replaced_overrides {
                    writeln!(f, "Day exercise lists were replaced.")?;
                }
                Ok(())
            }
            ApplyOutcome::Rejected(reason) => {
                writeln!(f, "No schedule applied: {reason}.")
            }
        }
    }
}
