use chrono::{Datelike, NaiveDate};
use comfy_table::{Cell, Color};

use crate::consts::WEEKDAY_LABELS;
use crate::core::{CalendarCell, DAYS_PER_WEEK, HistorySnapshot, calendar_rows};
use crate::output::format::{
    ViewOptions, center_cell, create_styled_table, header_cell, print_title, progress_bar,
    right_cell,
};

const STREAK_BAR_WIDTH: usize = 20;

/// Text of one calendar slot: day of month, a check mark when done,
/// brackets around today.
fn day_label(date: NaiveDate, completed: bool, today: NaiveDate) -> String {
    let mark = if completed { "✓" } else { " " };
    if date == today {
        format!("[{:>2}{mark}]", date.day())
    } else {
        format!("{:>2}{mark}", date.day())
    }
}

/// Month and year of the earliest recorded day, e.g. "March 2024"
fn calendar_month(cells: &[CalendarCell<'_>]) -> Option<String> {
    cells.iter().find_map(|cell| match *cell {
        CalendarCell::Empty => None,
        CalendarCell::Day { date, .. } => Some(date.format("%B %Y").to_string()),
    })
}

fn calendar_title(snapshot: &HistorySnapshot<'_>) -> String {
    let days = snapshot.stats.total_days;
    match calendar_month(&snapshot.calendar) {
        Some(month) => format!("{month} (last {days} days)"),
        None => format!("Last {days} days"),
    }
}

fn calendar_cell(cell: &CalendarCell<'_>, today: NaiveDate, options: ViewOptions) -> Cell {
    match *cell {
        CalendarCell::Empty => Cell::new(""),
        CalendarCell::Day { date, record } => {
            let color = if record.completed {
                options.color(Color::Green)
            } else {
                options.color(Color::DarkGrey)
            };
            center_cell(&day_label(date, record.completed, today), color, date == today)
        }
    }
}

fn print_calendar(snapshot: &HistorySnapshot<'_>, options: ViewOptions) {
    if snapshot.calendar.is_empty() {
        println!("  No history recorded yet.\n");
        return;
    }

    let mut table = create_styled_table();
    table.set_header(
        WEEKDAY_LABELS
            .iter()
            .map(|label| header_cell(label, options.use_color))
            .collect::<Vec<_>>(),
    );

    for week in calendar_rows(&snapshot.calendar) {
        let mut row: Vec<Cell> = week
            .iter()
            .map(|cell| calendar_cell(cell, snapshot.today, options))
            .collect();
        row.resize_with(DAYS_PER_WEEK, || Cell::new(""));
        table.add_row(row);
    }

    println!("{table}");
    println!("\n  ✓ completed   [ ] today\n");
}

pub(crate) fn print_history(snapshot: &HistorySnapshot<'_>, options: ViewOptions) {
    print_title(&format!("{} (habit #{})", snapshot.habit_name, snapshot.habit_id), options);

    let c = options.use_color;
    let streak = &snapshot.streak;
    let stats = &snapshot.stats;
    let mut table = create_styled_table();
    table.set_header(vec![header_cell("Metric", c), header_cell("Value", c)]);
    table.add_row(vec![
        Cell::new("Current streak"),
        right_cell(&format!("{} days", streak.current_streak), options.color(Color::Cyan), true),
    ]);
    table.add_row(vec![
        Cell::new("Longest streak"),
        right_cell(&format!("{} days", streak.longest_streak), None, false),
    ]);
    table.add_row(vec![
        Cell::new("Streak progress"),
        right_cell(
            &format!(
                "{} {}%",
                progress_bar(snapshot.streak_progress_percent, STREAK_BAR_WIDTH),
                snapshot.streak_progress_percent
            ),
            None,
            false,
        ),
    ]);
    table.add_row(vec![
        Cell::new("Days tracked"),
        right_cell(&stats.total_days.to_string(), None, false),
    ]);
    table.add_row(vec![
        Cell::new("Completed"),
        right_cell(&stats.completed_days.to_string(), options.color(Color::Green), false),
    ]);
    table.add_row(vec![
        Cell::new("Missed"),
        right_cell(&stats.missed_days.to_string(), options.color(Color::Red), false),
    ]);
    table.add_row(vec![
        Cell::new("Completion rate"),
        right_cell(&format!("{}%", stats.completion_rate_percent), None, true),
    ]);
    println!("{table}");

    print_title(&calendar_title(snapshot), options);
    print_calendar(snapshot, options);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::DayRecord;
    use crate::core::{HistoryResponse, StreakSummary};

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn day_label_marks_completion_and_today() {
        let today = day("2024-03-05");
        assert_eq!(day_label(day("2024-03-01"), true, today), " 1✓");
        assert_eq!(day_label(day("2024-03-12"), false, today), "12 ");
        assert_eq!(day_label(today, false, today), "[ 5 ]");
    }

    #[test]
    fn calendar_title_uses_earliest_month() {
        let history = HistoryResponse {
            habit_name: "Read".to_string(),
            history: vec![
                DayRecord {
                    date: "2024-03-02".to_string(),
                    completed: true,
                },
                DayRecord {
                    date: "2024-02-29".to_string(),
                    completed: false,
                },
            ],
        };
        let snapshot =
            HistorySnapshot::build(1, &history, StreakSummary::default(), day("2024-03-05"))
                .unwrap();
        assert_eq!(calendar_title(&snapshot), "February 2024 (last 2 days)");
    }

    #[test]
    fn calendar_title_without_history() {
        let history = HistoryResponse {
            habit_name: "Read".to_string(),
            history: Vec::new(),
        };
        let snapshot =
            HistorySnapshot::build(1, &history, StreakSummary::default(), day("2024-03-05"))
                .unwrap();
        assert_eq!(calendar_title(&snapshot), "Last 0 days");
    }
}
