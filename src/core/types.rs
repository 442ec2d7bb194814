//! Data model shared by the API client, the pure builders and the views
//!
//! Wire types mirror the JSON bodies of the habit API; the remaining types are
//! derived on the client and never sent back.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of a habit's history as reported by `GET /habits/{id}/history`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct DayRecord {
    /// ISO `YYYY-MM-DD`
    pub(crate) date: String,
    pub(crate) completed: bool,
}

/// A habit as listed by `GET /habits`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Habit {
    pub(crate) id: i64,
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) total_completed: u64,
    #[serde(default)]
    pub(crate) last_completed: Option<String>,
    #[serde(default)]
    pub(crate) created_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct HistoryResponse {
    pub(crate) habit_name: String,
    #[serde(default)]
    pub(crate) history: Vec<DayRecord>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub(crate) struct StreakSummary {
    pub(crate) current_streak: u32,
    pub(crate) longest_streak: u32,
    #[serde(default)]
    pub(crate) total_completed: u32,
}

/// Account-wide counters from `GET /stats`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct OverallStats {
    pub(crate) total_habits: u64,
    pub(crate) completed_today: u64,
    pub(crate) remaining_today: u64,
    #[serde(default)]
    pub(crate) total_completions: u64,
    /// Percentage with one decimal, computed by the server
    #[serde(default)]
    pub(crate) completion_rate_today: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AddHabitResponse {
    #[serde(default)]
    pub(crate) message: String,
    #[serde(default)]
    pub(crate) habit_id: Option<i64>,
    #[serde(default)]
    pub(crate) name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct MessageResponse {
    #[serde(default)]
    pub(crate) message: String,
}

/// Slot of the Sunday-first history calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CalendarCell<'a> {
    /// Padding before the first recorded day
    Empty,
    Day {
        date: NaiveDate,
        record: &'a DayRecord,
    },
}

/// Aggregate counts over a run of [`DayRecord`]s.
///
/// `completed_days + missed_days == total_days` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub(crate) struct DerivedStats {
    pub(crate) total_days: usize,
    pub(crate) completed_days: usize,
    pub(crate) missed_days: usize,
    /// 0..=100, rounded half-up
    pub(crate) completion_rate_percent: u32,
}
