use serde_json::{Value, json};

use crate::consts::DATE_FORMAT;
use crate::core::{CalendarCell, DashboardSnapshot, HistorySnapshot, StatisticsSnapshot};
use crate::error::AppError;

pub(crate) fn dashboard_json(snapshot: &DashboardSnapshot) -> Value {
    let habits: Vec<Value> = snapshot
        .rows
        .iter()
        .map(|row| {
            json!({
                "id": row.habit.id,
                "name": row.habit.name,
                "total_completed": row.habit.total_completed,
                "last_completed": row.habit.last_completed,
                "completed_today": row.completed_today,
            })
        })
        .collect();
    json!({
        "date": snapshot.today.format(DATE_FORMAT).to_string(),
        "summary": {
            "total": snapshot.summary.total,
            "completed_today": snapshot.summary.completed,
            "remaining": snapshot.summary.remaining,
            "completion_rate_percent": snapshot.summary.completion_rate_percent,
        },
        "habits": habits,
    })
}

/// Calendar slots as JSON: `null` for padding, an object per recorded day
fn calendar_json(cells: &[CalendarCell<'_>], snapshot: &HistorySnapshot<'_>) -> Vec<Value> {
    cells
        .iter()
        .map(|cell| match *cell {
            CalendarCell::Empty => Value::Null,
            CalendarCell::Day { date, record } => json!({
                "date": record.date,
                "completed": record.completed,
                "today": date == snapshot.today,
            }),
        })
        .collect()
}

pub(crate) fn history_json(snapshot: &HistorySnapshot<'_>) -> Value {
    json!({
        "habit_id": snapshot.habit_id,
        "habit_name": snapshot.habit_name,
        "current_streak": snapshot.streak.current_streak,
        "longest_streak": snapshot.streak.longest_streak,
        "streak_progress_percent": snapshot.streak_progress_percent,
        "stats": snapshot.stats,
        "calendar": calendar_json(&snapshot.calendar, snapshot),
    })
}

pub(crate) fn statistics_json(snapshot: &StatisticsSnapshot) -> Value {
    let habits: Vec<Value> = snapshot
        .habits
        .iter()
        .map(|entry| {
            json!({
                "id": entry.habit.id,
                "name": entry.habit.name,
                "total_completed": entry.habit.total_completed,
                "activity_level": entry.activity_level,
            })
        })
        .collect();
    json!({
        "overall": snapshot.overall,
        "habits": habits,
    })
}

pub(crate) fn statusline_json(snapshot: &DashboardSnapshot) -> Value {
    json!({
        "completed": snapshot.summary.completed,
        "total": snapshot.summary.total,
        "completion_rate_percent": snapshot.summary.completion_rate_percent,
    })
}

pub(crate) fn print_json(value: &Value) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::DayRecord;
    use crate::core::{Habit, HistoryResponse, OverallStats, StreakSummary};
    use chrono::NaiveDate;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn history_json_pads_with_nulls() {
        let history = HistoryResponse {
            habit_name: "Read".to_string(),
            history: vec![
                DayRecord {
                    date: "2024-03-02".to_string(),
                    completed: false,
                },
                DayRecord {
                    date: "2024-03-01".to_string(),
                    completed: true,
                },
            ],
        };
        let snapshot =
            HistorySnapshot::build(1, &history, StreakSummary::default(), day("2024-03-02"))
                .unwrap();
        let value = history_json(&snapshot);

        let calendar = value["calendar"].as_array().unwrap();
        assert_eq!(calendar.len(), 7);
        assert!(calendar[..5].iter().all(Value::is_null));
        assert_eq!(calendar[5]["date"], "2024-03-01");
        assert_eq!(calendar[6]["today"], true);
        assert_eq!(value["stats"]["completion_rate_percent"], 50);
        assert_eq!(value["stats"]["missed_days"], 1);
    }

    #[test]
    fn dashboard_json_shape() {
        let snapshot = DashboardSnapshot::build(
            vec![Habit {
                id: 4,
                name: "Run".to_string(),
                total_completed: 2,
                last_completed: Some("2024-03-05".to_string()),
                created_at: None,
            }],
            day("2024-03-05"),
        );
        let value = dashboard_json(&snapshot);
        assert_eq!(value["date"], "2024-03-05");
        assert_eq!(value["summary"]["completion_rate_percent"], 100);
        assert_eq!(value["habits"][0]["completed_today"], true);
    }

    #[test]
    fn statistics_json_keeps_server_counters() {
        let snapshot = StatisticsSnapshot::build(
            Vec::new(),
            OverallStats {
                total_habits: 3,
                completed_today: 1,
                remaining_today: 2,
                total_completions: 40,
                completion_rate_today: 33.3,
            },
        );
        let value = statistics_json(&snapshot);
        assert_eq!(value["overall"]["total_habits"], 3);
        assert_eq!(value["overall"]["completion_rate_today"], 33.3);
        assert!(value["habits"].as_array().unwrap().is_empty());
    }
}
