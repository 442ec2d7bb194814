//! Habit API access
//!
//! Commands talk to the server through the [`HabitApi`] trait so the view
//! logic can run against an in-memory fake in tests.

mod client;

pub(crate) use client::HttpApi;

use crate::core::{AddHabitResponse, Habit, HistoryResponse, OverallStats, StreakSummary};
use crate::error::ApiError;

/// One method per endpoint of the habit API
pub(crate) trait HabitApi: Sync {
    /// `GET /habits`
    fn list_habits(&self) -> Result<Vec<Habit>, ApiError>;

    /// `POST /habits`
    fn add_habit(&self, name: &str) -> Result<AddHabitResponse, ApiError>;

    /// `POST /habits/{id}/done`; returns the server's message
    fn mark_done(&self, id: i64) -> Result<String, ApiError>;

    /// `DELETE /habits/{id}`; returns the server's message
    fn delete_habit(&self, id: i64) -> Result<String, ApiError>;

    /// `GET /habits/{id}/history?days=N`
    fn history(&self, id: i64, days: u32) -> Result<HistoryResponse, ApiError>;

    /// `GET /habits/{id}/streak`
    fn streak(&self, id: i64) -> Result<StreakSummary, ApiError>;

    /// `GET /stats`
    fn overall_stats(&self) -> Result<OverallStats, ApiError>;
}
