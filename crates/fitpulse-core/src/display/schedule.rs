//! Schedule and day views.
//!
//! These types carry everything the rendering layer needs for the week grid
//! and the per-day exercise list, already resolved against the catalogues.

use std::fmt;

use crate::{
    models::DayType,
    schedule::{DayPlan, ScheduleSource},
};

/// Marker shown next to days that carry an exercise override.
pub const OVERRIDE_MARKER: &str = "✦";

/// One cell of the schedule overview.
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewDay {
    pub day: u32,
    pub day_type: DayType,
    pub label: Option<String>,
    pub overridden: bool,
}

impl OverviewDay {
    fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(self.day_type.as_str())
    }
}

/// The resolved schedule laid out for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleOverview {
    pub source: ScheduleSource,
    pub duration_days: u32,
    pub days: Vec<OverviewDay>,
    /// Override keys outside the program, kept in storage but not shown
    pub orphaned_overrides: Vec<u32>,
}

impl ScheduleOverview {
    /// Days grouped into weeks of seven; the last week may be shorter.
    pub fn weeks(&self) -> std::slice::Chunks<'_, OverviewDay> {
        self.days.chunks(7)
    }

    pub fn rest_days(&self) -> usize {
        self.days.iter().filter(|day| day.day_type.is_rest()).count()
    }
}

impl fmt::Display for ScheduleOverview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Program: {} days", self.duration_days)?;
        writeln!(f)?;
        writeln!(f, "- Source: {}", self.source)?;
        writeln!(f, "- Rest days: {}", self.rest_days())?;

        if self.days.is_empty() {
            writeln!(f)?;
            return writeln!(f, "No schedule available.");
        }

        for (index, week) in self.weeks().enumerate() {
            writeln!(f)?;
            writeln!(f, "## Week {}", index + 1)?;
            writeln!(f)?;
            writeln!(f, "| Day | Type | |")?;
            writeln!(f, "|---:|---|:-:|")?;
            for day in week {
                let marker = if day.overridden { OVERRIDE_MARKER } else { "" };
                writeln!(f, "| {} | {} | {marker} |", day.day, day.display_label())?;
            }
        }

        if !self.orphaned_overrides.is_empty() {
            let days: Vec<String> = self.orphaned_overrides.iter().map(u32::to_string).collect();
            writeln!(f)?;
            writeln!(f, "Overrides outside the program: {}", days.join(", "))?;
        }

        Ok(())
    }
}

/// One exercise in a day view.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseLine {
    pub id: String,
    /// Display name, or the raw ID when the exercise is unknown
    pub label: String,
    /// `None` when the ID matches no known exercise
    pub icon: Option<String>,
}

/// A day's plan with labelled exercises.
#[derive(Debug, Clone, PartialEq)]
pub struct DayView {
    pub plan: DayPlan,
    pub entries: Vec<ExerciseLine>,
}

impl fmt::Display for DayView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = &self.plan;
        let label = plan.label.as_deref().unwrap_or(plan.day_type.as_str());
        let marker = if plan.overridden {
            format!(" {OVERRIDE_MARKER}")
        } else {
            String::new()
        };

        writeln!(f, "# Day {}: {label}{marker}", plan.day)?;
        writeln!(f)?;

        if self.entries.is_empty() {
            if plan.day_type.is_rest() && !plan.overridden {
                return writeln!(f, "Rest day.");
            }
            return writeln!(f, "No exercises.");
        }

        for (index, entry) in self.entries.iter().enumerate() {
            match &entry.icon {
                Some(icon) => writeln!(f, "{}. {icon} {} (`{}`)", index + 1, entry.label, entry.id)?,
                None => writeln!(f, "{}. {} (unknown)", index + 1, entry.label)?,
            }
        }

        Ok(())
    }
}
