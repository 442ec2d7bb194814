//! Immutable view snapshots
//!
//! Every command fetches fresh data, builds one of these and hands it to the
//! renderers. Nothing is updated in place: after a mutation the caller fetches
//! again and builds a new snapshot.

use chrono::NaiveDate;

use crate::core::calendar::build_calendar_layout;
use crate::core::stats::{
    activity_level, completion_rate_percent, compute_stats, streak_progress_percent,
};
use crate::core::today::is_completed_today;
use crate::core::types::{
    CalendarCell, DerivedStats, Habit, HistoryResponse, OverallStats, StreakSummary,
};
use crate::error::AppError;

#[derive(Debug, Clone)]
pub(crate) struct HabitRow {
    pub(crate) habit: Habit,
    pub(crate) completed_today: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct TodaySummary {
    pub(crate) total: usize,
    pub(crate) completed: usize,
    pub(crate) remaining: usize,
    pub(crate) completion_rate_percent: u32,
}

#[derive(Debug, Clone)]
pub(crate) struct DashboardSnapshot {
    pub(crate) today: NaiveDate,
    pub(crate) rows: Vec<HabitRow>,
    pub(crate) summary: TodaySummary,
}

impl DashboardSnapshot {
    pub(crate) fn build(habits: Vec<Habit>, today: NaiveDate) -> Self {
        let rows: Vec<HabitRow> = habits
            .into_iter()
            .map(|habit| {
                let completed_today = is_completed_today(habit.last_completed.as_deref(), today);
                HabitRow {
                    habit,
                    completed_today,
                }
            })
            .collect();

        let total = rows.len();
        let completed = rows.iter().filter(|r| r.completed_today).count();
        DashboardSnapshot {
            today,
            rows,
            summary: TodaySummary {
                total,
                completed,
                remaining: total - completed,
                completion_rate_percent: completion_rate_percent(completed, total),
            },
        }
    }

    pub(crate) fn find(&self, id: i64) -> Option<&Habit> {
        self.rows.iter().map(|r| &r.habit).find(|h| h.id == id)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct HistorySnapshot<'a> {
    pub(crate) habit_id: i64,
    pub(crate) habit_name: &'a str,
    pub(crate) today: NaiveDate,
    pub(crate) streak: StreakSummary,
    pub(crate) streak_progress_percent: u32,
    pub(crate) stats: DerivedStats,
    pub(crate) calendar: Vec<CalendarCell<'a>>,
}

impl<'a> HistorySnapshot<'a> {
    pub(crate) fn build(
        habit_id: i64,
        history: &'a HistoryResponse,
        streak: StreakSummary,
        today: NaiveDate,
    ) -> Result<Self, AppError> {
        let calendar = build_calendar_layout(&history.history)?;
        Ok(HistorySnapshot {
            habit_id,
            habit_name: &history.habit_name,
            today,
            streak,
            streak_progress_percent: streak_progress_percent(
                streak.current_streak,
                streak.longest_streak,
            ),
            stats: compute_stats(&history.history),
            calendar,
        })
    }
}

#[derive(Debug, Clone)]
pub(crate) struct HabitActivity {
    pub(crate) habit: Habit,
    pub(crate) activity_level: u8,
}

#[derive(Debug, Clone)]
pub(crate) struct StatisticsSnapshot {
    pub(crate) overall: OverallStats,
    pub(crate) habits: Vec<HabitActivity>,
}

impl StatisticsSnapshot {
    pub(crate) fn build(habits: Vec<Habit>, overall: OverallStats) -> Self {
        let habits = habits
            .into_iter()
            .map(|habit| HabitActivity {
                activity_level: activity_level(habit.total_completed),
                habit,
            })
            .collect();
        StatisticsSnapshot { overall, habits }
    }
}
