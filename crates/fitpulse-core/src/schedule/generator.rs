//! Program-length to day-type sequence generation.

use log::info;

use crate::{
    catalogue::DEFAULT_WEEKLY_PATTERN,
    models::{DayType, Program},
};

/// Shortest program the generator produces.
pub const MIN_GENERATED_DAYS: u32 = 7;

/// Longest program the generator produces.
pub const MAX_GENERATED_DAYS: u32 = 120;

/// Length of the rest-anchoring block.
const WEEK_LEN: usize = 7;

/// Clamps a requested length into the generator's range.
pub fn clamp_days(total_days: u32) -> u32 {
    total_days.clamp(MIN_GENERATED_DAYS, MAX_GENERATED_DAYS)
}

/// Lays `base_pattern` across `total_days` days (after clamping).
///
/// Every seventh program day is rest. The base-pattern pointer steps over the
/// pattern's own rest slot when it comes up on any other day, so the anchored
/// rest absorbs it instead of stacking a second rest day into the week. An
/// empty `base_pattern` falls back to [`DEFAULT_WEEKLY_PATTERN`].
pub fn generate_schedule(total_days: u32, base_pattern: &[DayType]) -> Vec<DayType> {
    let total_days = clamp_days(total_days) as usize;
    let base = if base_pattern.is_empty() {
        &DEFAULT_WEEKLY_PATTERN[..]
    } else {
        base_pattern
    };

    let mut schedule = Vec::with_capacity(total_days);
    let mut pointer = 0usize;

    for day_index in 0..total_days {
        if day_index % WEEK_LEN == WEEK_LEN - 1 {
            schedule.push(DayType::Rest);
            continue;
        }
        if base[pointer % base.len()].is_rest() {
            pointer += 1;
        }
        schedule.push(base[pointer % base.len()]);
        pointer += 1;
    }

    schedule
}

impl Program {
    /// Generates a schedule and commits it, together with the clamped
    /// duration, as this program's override.
    pub fn generate(&mut self, total_days: u32, base_pattern: &[DayType]) -> Vec<DayType> {
        let duration = clamp_days(total_days);
        let schedule = generate_schedule(duration, base_pattern);
        info!("Generated {duration}-day schedule (requested {total_days})");
        self.duration_days = duration;
        self.schedule = Some(schedule.clone());
        schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use DayType::*;

    const WEEK: [DayType; 7] = [Rope, Circuit, RopeIntervals, Walk, Hiit, Strength, Rest];

    fn weeks(count: usize) -> Vec<DayType> {
        WEEK.iter().copied().cycle().take(count * 7).collect()
    }

    #[test]
    fn test_golden_seven_days() {
        assert_eq!(generate_schedule(7, &DEFAULT_WEEKLY_PATTERN), WEEK.to_vec());
    }

    #[test]
    fn test_golden_fourteen_and_twenty_one_days() {
        assert_eq!(generate_schedule(14, &DEFAULT_WEEKLY_PATTERN), weeks(2));
        assert_eq!(generate_schedule(21, &DEFAULT_WEEKLY_PATTERN), weeks(3));
    }

    #[test]
    fn test_golden_thirty_days_partial_week() {
        let mut expected = weeks(4);
        expected.extend([Rope, Circuit]);
        assert_eq!(generate_schedule(30, &DEFAULT_WEEKLY_PATTERN), expected);
    }

    #[test]
    fn test_mid_week_base_rest_is_absorbed() {
        let base = [Rope, Rest, Circuit, RopeIntervals, Walk, Hiit, Strength];
        let expected = vec![
            Rope, Circuit, RopeIntervals, Walk, Hiit, Strength, Rest,
            Rope, Circuit, RopeIntervals, Walk, Hiit, Strength, Rest,
        ];
        assert_eq!(generate_schedule(14, &base), expected);
    }

    #[test]
    fn test_rest_anchored_every_seventh_day() {
        for total in MIN_GENERATED_DAYS..=MAX_GENERATED_DAYS {
            let schedule = generate_schedule(total, &DEFAULT_WEEKLY_PATTERN);
            assert_eq!(schedule.len(), total as usize);
            for (i, day_type) in schedule.iter().enumerate() {
                if i % 7 == 6 {
                    assert_eq!(*day_type, Rest, "day index {i} of {total}");
                }
            }
        }
    }

    #[test]
    fn test_clamps_out_of_range_lengths() {
        let base = DEFAULT_WEEKLY_PATTERN;
        assert_eq!(generate_schedule(5, &base), generate_schedule(7, &base));
        assert_eq!(generate_schedule(0, &base), generate_schedule(7, &base));
        assert_eq!(generate_schedule(500, &base), generate_schedule(120, &base));
    }

    #[test]
    fn test_empty_pattern_uses_default() {
        assert_eq!(generate_schedule(14, &[]), weeks(2));
    }

    #[test]
    fn test_generate_commits_clamped_duration() {
        let mut program = Program::default();
        let schedule = program.generate(3, &DEFAULT_WEEKLY_PATTERN);

        assert_eq!(program.duration_days, 7);
        assert_eq!(program.schedule.as_deref(), Some(schedule.as_slice()));
        assert_eq!(schedule.len(), 7);
    }
}
