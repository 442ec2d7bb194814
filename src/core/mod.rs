//! Core module - data model and the pure derivations behind every view

mod calendar;
mod snapshot;
mod stats;
mod suggestions;
mod today;
pub(crate) mod types;

pub(crate) use calendar::{DAYS_PER_WEEK, calendar_rows};
pub(crate) use snapshot::{DashboardSnapshot, HistorySnapshot, StatisticsSnapshot};
pub(crate) use stats::ACTIVITY_LEVELS;
pub(crate) use suggestions::{SUGGESTED_HABITS, suggestion};
pub(crate) use types::{
    AddHabitResponse, CalendarCell, Habit, HistoryResponse, MessageResponse, OverallStats,
    StreakSummary,
};
