//! Decides which schedule the application renders against.

use log::debug;

use crate::{
    catalogue::PlanCatalogue,
    models::{DayType, Program, DEFAULT_DURATION_DAYS},
};

/// Which resolution tier produced a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleSource {
    /// A stored override whose length matches the duration
    Override,
    /// Freshly generated and committed to the program
    Generated,
    /// The catalogue's weekly pattern tiled without rest anchoring
    Tiled,
    /// No pattern was available
    Empty,
}

impl ScheduleSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleSource::Override => "override",
            ScheduleSource::Generated => "generated",
            ScheduleSource::Tiled => "tiled-fallback",
            ScheduleSource::Empty => "empty",
        }
    }

    /// Whether producing this schedule changed the program.
    pub fn committed(&self) -> bool {
        matches!(self, ScheduleSource::Generated)
    }
}

/// A resolved schedule with the tier that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSchedule {
    pub source: ScheduleSource,
    pub days: Vec<DayType>,
}

impl ResolvedSchedule {
    /// Day type for a 1-based day number. Days outside the schedule are rest.
    pub fn day_type(&self, day: u32) -> DayType {
        day.checked_sub(1)
            .and_then(|index| self.days.get(index as usize))
            .copied()
            .unwrap_or(DayType::Rest)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Repeats `pattern` across `days` days with plain modulo indexing.
pub fn tile_pattern(pattern: &[DayType], days: u32) -> Vec<DayType> {
    if pattern.is_empty() {
        return Vec::new();
    }
    pattern.iter().copied().cycle().take(days as usize).collect()
}

impl Program {
    /// Resolves the schedule to render.
    ///
    /// 1. A stored schedule whose length equals the duration wins.
    /// 2. A non-default duration regenerates and commits (see
    ///    [`Program::generate`]), so the returned source is
    ///    [`ScheduleSource::Generated`] and the program must be persisted.
    /// 3. Otherwise the catalogue's weekly pattern is tiled.
    /// 4. With no pattern at all the schedule is empty.
    pub fn resolve(&mut self, catalogue: &dyn PlanCatalogue) -> ResolvedSchedule {
        if let Some(schedule) = self.valid_override() {
            debug!("Resolved schedule from stored override");
            return ResolvedSchedule {
                source: ScheduleSource::Override,
                days: schedule.to_vec(),
            };
        }

        if self.duration_days != DEFAULT_DURATION_DAYS {
            debug!(
                "Stored schedule missing or stale for {} days, regenerating",
                self.duration_days
            );
            let days = self.generate(self.duration_days, catalogue.weekly_pattern());
            return ResolvedSchedule {
                source: ScheduleSource::Generated,
                days,
            };
        }

        let pattern = catalogue.weekly_pattern();
        if pattern.is_empty() {
            debug!("No weekly pattern available, schedule is empty");
            return ResolvedSchedule {
                source: ScheduleSource::Empty,
                days: Vec::new(),
            };
        }

        debug!("Tiling weekly pattern across default duration");
        ResolvedSchedule {
            source: ScheduleSource::Tiled,
            days: tile_pattern(pattern, self.duration_days),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::{StaticCatalogue, DEFAULT_WEEKLY_PATTERN};
    use DayType::*;

    fn catalogue() -> StaticCatalogue {
        StaticCatalogue::builtin().unwrap()
    }

    #[test]
    fn test_valid_override_wins_and_is_stable() {
        let mut program = Program {
            duration_days: 3,
            schedule: Some(vec![Rest, Rope, Circuit]),
            ..Program::default()
        };
        let before = program.clone();

        let first = program.resolve(&catalogue());
        let second = program.resolve(&catalogue());

        assert_eq!(first.source, ScheduleSource::Override);
        assert_eq!(first, second);
        assert_eq!(first.days, vec![Rest, Rope, Circuit]);
        assert_eq!(program, before);
    }

    #[test]
    fn test_stale_override_regenerates() {
        let mut program = Program {
            duration_days: 14,
            schedule: Some(vec![Rest, Rope, Circuit]),
            ..Program::default()
        };

        let resolved = program.resolve(&catalogue());
        assert_eq!(resolved.source, ScheduleSource::Generated);
        assert!(resolved.source.committed());
        assert_eq!(resolved.len(), 14);
        assert_eq!(program.schedule.as_deref(), Some(resolved.days.as_slice()));

        // The committed schedule is now a valid override.
        assert_eq!(program.resolve(&catalogue()).source, ScheduleSource::Override);
    }

    #[test]
    fn test_default_duration_tiles_without_rest_anchoring() {
        let base = [Rope, Circuit, Walk];
        let catalogue = StaticCatalogue::from_json(r#"{"weeklyPattern":[1,2,4]}"#).unwrap();
        let mut program = Program::default();

        let resolved = program.resolve(&catalogue);
        assert_eq!(resolved.source, ScheduleSource::Tiled);
        assert_eq!(resolved.len(), 30);
        assert_eq!(resolved.days, tile_pattern(&base, 30));
        assert_eq!(resolved.days[6], Rope);
        assert!(!resolved.source.committed());
        assert_eq!(program.schedule, None);
    }

    #[test]
    fn test_default_duration_with_builtin_pattern() {
        let mut program = Program::default();
        let resolved = program.resolve(&catalogue());
        assert_eq!(resolved.source, ScheduleSource::Tiled);
        assert_eq!(resolved.days, tile_pattern(&DEFAULT_WEEKLY_PATTERN, 30));
    }

    #[test]
    fn test_no_pattern_is_empty() {
        let catalogue = StaticCatalogue::default();
        let mut program = Program::default();

        let resolved = program.resolve(&catalogue);
        assert_eq!(resolved.source, ScheduleSource::Empty);
        assert!(resolved.is_empty());
    }

    #[test]
    fn test_day_type_lookup_out_of_range_is_rest() {
        let resolved = ResolvedSchedule {
            source: ScheduleSource::Override,
            days: vec![Rope, Circuit],
        };
        assert_eq!(resolved.day_type(2), Circuit);
        assert_eq!(resolved.day_type(0), Rest);
        assert_eq!(resolved.day_type(3), Rest);
    }
}
