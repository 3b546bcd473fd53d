//! Per-day exercise lists and the override editing contract.

use log::info;

use crate::{
    catalogue::PlanCatalogue,
    error::{Result, ScheduleError},
    models::{DayType, Program},
};

use super::ResolvedSchedule;

/// Everything the UI needs to render or edit one program day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayPlan {
    pub day: u32,
    pub day_type: DayType,
    /// Catalogue label for the day type, if it has one
    pub label: Option<String>,
    pub exercises: Vec<String>,
    /// Whether `exercises` comes from a day override
    pub overridden: bool,
}

fn validate_day(day: u32) -> Result<()> {
    if day == 0 {
        return Err(ScheduleError::invalid_input("day").with_reason("day numbers start at 1"));
    }
    Ok(())
}

impl Program {
    /// Builds the plan for `day` against an already resolved schedule.
    ///
    /// An override is returned verbatim, including an explicit empty list.
    /// Without one, the catalogue's default list for the day type is copied.
    pub fn day_plan_for(
        &self,
        resolved: &ResolvedSchedule,
        day: u32,
        catalogue: &dyn PlanCatalogue,
    ) -> DayPlan {
        let day_type = resolved.day_type(day);
        let template = catalogue.plan(day_type);
        let (exercises, overridden) = match self.day_overrides.get(day) {
            Some(list) => (list.to_vec(), true),
            None => (
                template.map(|plan| plan.exercises.clone()).unwrap_or_default(),
                false,
            ),
        };

        DayPlan {
            day,
            day_type,
            label: template.map(|plan| plan.label.clone()),
            exercises,
            overridden,
        }
    }

    /// Resolves the schedule, then builds the plan for `day`.
    ///
    /// Resolution may commit a generated schedule; callers persisting the
    /// program should check the returned source.
    pub fn day_plan(
        &mut self,
        day: u32,
        catalogue: &dyn PlanCatalogue,
    ) -> (DayPlan, ResolvedSchedule) {
        let resolved = self.resolve(catalogue);
        let plan = self.day_plan_for(&resolved, day, catalogue);
        (plan, resolved)
    }

    /// Replaces the exercise list for `day`. Exercise IDs are not checked.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::InvalidInput` for day `0`.
    pub fn set_day_override(&mut self, day: u32, exercises: Vec<String>) -> Result<()> {
        validate_day(day)?;
        self.day_overrides.set(day, exercises);
        Ok(())
    }

    /// Appends an exercise to the day's effective list and stores the result
    /// as the day's override.
    pub fn add_exercise_to_day(
        &mut self,
        day: u32,
        exercise_id: &str,
        catalogue: &dyn PlanCatalogue,
    ) -> Result<DayPlan> {
        validate_day(day)?;
        let (mut plan, _) = self.day_plan(day, catalogue);
        plan.exercises.push(exercise_id.to_string());
        self.set_day_override(day, plan.exercises.clone())?;
        plan.overridden = true;
        Ok(plan)
    }

    /// Removes the exercise at `index` (0-based) from the day's effective
    /// list and stores the result as the day's override.
    pub fn remove_exercise_from_day(
        &mut self,
        day: u32,
        index: usize,
        catalogue: &dyn PlanCatalogue,
    ) -> Result<DayPlan> {
        validate_day(day)?;
        let (mut plan, _) = self.day_plan(day, catalogue);
        if index >= plan.exercises.len() {
            return Err(ScheduleError::invalid_input("index").with_reason(format!(
                "day {day} has {} exercises",
                plan.exercises.len()
            )));
        }
        plan.exercises.remove(index);
        self.set_day_override(day, plan.exercises.clone())?;
        plan.overridden = true;
        Ok(plan)
    }

    /// Clears the schedule override and all day overrides. User-authored
    /// exercises are kept.
    pub fn reset_all(&mut self) {
        self.schedule = None;
        self.day_overrides.clear();
        info!("Reset schedule and day overrides");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        catalogue::{StaticCatalogue, DEFAULT_WEEKLY_PATTERN},
        models::CustomExercise,
        schedule::{tile_pattern, ScheduleSource},
    };

    fn catalogue() -> StaticCatalogue {
        StaticCatalogue::builtin().unwrap()
    }

    #[test]
    fn test_default_list_comes_from_catalogue_copy() {
        let catalogue = catalogue();
        let mut program = Program::default();

        let (mut plan, _) = program.day_plan(2, &catalogue);
        assert_eq!(plan.day_type, DayType::Circuit);
        assert!(!plan.overridden);
        assert_eq!(
            plan.exercises,
            catalogue.plan(DayType::Circuit).unwrap().exercises
        );

        plan.exercises.clear();
        assert!(!catalogue.plan(DayType::Circuit).unwrap().exercises.is_empty());
    }

    #[test]
    fn test_explicit_empty_override_is_not_default() {
        let catalogue = catalogue();
        let mut program = Program::default();
        program.set_day_override(3, Vec::new()).unwrap();

        let (plan, _) = program.day_plan(3, &catalogue);
        assert!(plan.overridden);
        assert!(plan.exercises.is_empty());
    }

    #[test]
    fn test_rest_day_without_override_is_empty() {
        let catalogue = catalogue();
        let mut program = Program::default();
        let (plan, _) = program.day_plan(7, &catalogue);
        assert_eq!(plan.day_type, DayType::Rest);
        assert!(plan.exercises.is_empty());
        assert_eq!(plan.label, None);
    }

    #[test]
    fn test_dangling_ids_are_tolerated() {
        let catalogue = catalogue();
        let mut program = Program::default();
        program
            .set_day_override(1, vec!["no_such_move".to_string()])
            .unwrap();
        let (plan, _) = program.day_plan(1, &catalogue);
        assert_eq!(plan.exercises, vec!["no_such_move".to_string()]);
    }

    #[test]
    fn test_day_zero_rejected() {
        let mut program = Program::default();
        assert!(matches!(
            program.set_day_override(0, vec![]),
            Err(ScheduleError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_add_and_remove_edit_a_copy() {
        let catalogue = catalogue();
        let mut program = Program::default();
        let default_len = catalogue.plan(DayType::Rope).unwrap().exercises.len();

        let plan = program.add_exercise_to_day(1, "c_custom", &catalogue).unwrap();
        assert!(plan.overridden);
        assert_eq!(plan.exercises.len(), default_len + 1);
        assert_eq!(plan.exercises.last().map(String::as_str), Some("c_custom"));

        let plan = program.remove_exercise_from_day(1, 0, &catalogue).unwrap();
        assert_eq!(plan.exercises.len(), default_len);
        assert_eq!(program.day_overrides.get(1).map(<[String]>::len), Some(default_len));
        assert_eq!(catalogue.plan(DayType::Rope).unwrap().exercises.len(), default_len);

        assert!(matches!(
            program.remove_exercise_from_day(1, 99, &catalogue),
            Err(ScheduleError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_reset_all_falls_back_and_keeps_custom_exercises() {
        let catalogue = catalogue();
        let mut program = Program {
            duration_days: 30,
            schedule: Some(vec![DayType::Walk; 30]),
            ..Program::default()
        };
        program.set_day_override(4, vec!["pushup".to_string()]).unwrap();
        program.custom_exercises.insert(
            "c_1".to_string(),
            CustomExercise {
                id: "c_1".to_string(),
                name: "Drill".to_string(),
                name_en: "Drill".to_string(),
                description: String::new(),
                icon: String::new(),
                muscles: vec![],
                image: None,
            },
        );

        program.reset_all();

        assert!(program.day_overrides.is_empty());
        assert_eq!(program.custom_exercises.len(), 1);
        let resolved = program.resolve(&catalogue);
        assert_eq!(resolved.source, ScheduleSource::Tiled);
        assert_eq!(resolved.days, tile_pattern(&DEFAULT_WEEKLY_PATTERN, 30));
    }
}
