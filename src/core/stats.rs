use crate::core::types::{DayRecord, DerivedStats};

/// Filled dots in the per-habit activity meter
pub(crate) const ACTIVITY_LEVELS: u8 = 5;

/// Completions represented by one dot of the activity meter
const COMPLETIONS_PER_LEVEL: u64 = 10;

/// `round(100 * done / total)` with ties rounded up; 0 when `total` is 0.
///
/// Integer arithmetic keeps the tie-break exact (1/8 is 12.5% and becomes 13).
pub(crate) fn completion_rate_percent(done: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let done = done.min(total) as u64;
    let total = total as u64;
    ((200 * done + total) / (2 * total)) as u32
}

pub(crate) fn compute_stats(records: &[DayRecord]) -> DerivedStats {
    let total_days = records.len();
    let completed_days = records.iter().filter(|r| r.completed).count();
    DerivedStats {
        total_days,
        completed_days,
        missed_days: total_days - completed_days,
        completion_rate_percent: completion_rate_percent(completed_days, total_days),
    }
}

/// How far the current streak has come towards the longest one, capped at 100
pub(crate) fn streak_progress_percent(current: u32, longest: u32) -> u32 {
    let longest = longest.max(1) as usize;
    completion_rate_percent((current as usize).min(longest), longest)
}

/// One dot per started block of ten completions, at most [`ACTIVITY_LEVELS`]
pub(crate) fn activity_level(total_completed: u64) -> u8 {
    total_completed
        .div_ceil(COMPLETIONS_PER_LEVEL)
        .min(u64::from(ACTIVITY_LEVELS)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(pattern: &[bool]) -> Vec<DayRecord> {
        pattern
            .iter()
            .enumerate()
            .map(|(i, &completed)| DayRecord {
                date: format!("2024-03-{:02}", i + 1),
                completed,
            })
            .collect()
    }

    #[test]
    fn empty_history_is_all_zero() {
        assert_eq!(compute_stats(&[]), DerivedStats::default());
    }

    #[test]
    fn three_day_example() {
        let stats = compute_stats(&records(&[true, false, true]));
        assert_eq!(
            stats,
            DerivedStats {
                total_days: 3,
                completed_days: 2,
                missed_days: 1,
                completion_rate_percent: 67,
            }
        );
    }

    #[test]
    fn completed_plus_missed_equals_total() {
        for len in 0..12 {
            let pattern: Vec<bool> = (0..len).map(|i| i % 3 != 0).collect();
            let stats = compute_stats(&records(&pattern));
            assert_eq!(stats.completed_days + stats.missed_days, stats.total_days);
            assert!(stats.completion_rate_percent <= 100);
        }
    }

    #[test]
    fn rate_rounds_half_up() {
        assert_eq!(completion_rate_percent(1, 2), 50);
        assert_eq!(completion_rate_percent(1, 8), 13);
        assert_eq!(completion_rate_percent(3, 8), 38);
        assert_eq!(completion_rate_percent(1, 3), 33);
        assert_eq!(completion_rate_percent(2, 3), 67);
        assert_eq!(completion_rate_percent(0, 30), 0);
        assert_eq!(completion_rate_percent(30, 30), 100);
    }

    #[test]
    fn rate_of_nothing_is_zero() {
        assert_eq!(completion_rate_percent(0, 0), 0);
    }

    #[test]
    fn streak_progress_is_capped() {
        assert_eq!(streak_progress_percent(0, 0), 0);
        assert_eq!(streak_progress_percent(3, 0), 100);
        assert_eq!(streak_progress_percent(2, 4), 50);
        assert_eq!(streak_progress_percent(5, 4), 100);
        assert_eq!(streak_progress_percent(1, 3), 33);
    }

    #[test]
    fn activity_level_steps_every_ten() {
        assert_eq!(activity_level(0), 0);
        assert_eq!(activity_level(1), 1);
        assert_eq!(activity_level(10), 1);
        assert_eq!(activity_level(11), 2);
        assert_eq!(activity_level(45), 5);
        assert_eq!(activity_level(500), ACTIVITY_LEVELS);
    }
}
