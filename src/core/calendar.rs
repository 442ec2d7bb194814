use chrono::{Datelike, NaiveDate};

use crate::core::types::{CalendarCell, DayRecord};
use crate::error::AppError;
use crate::utils::parse_iso_date;

pub(crate) const DAYS_PER_WEEK: usize = 7;

/// Column of a date in a Sunday-first week (0 = Sunday, 6 = Saturday)
pub(crate) fn weekday_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_sunday() as usize
}

/// Lay out history records on a Sunday-first calendar.
///
/// Records are sorted by calendar date (stable for duplicate dates) and
/// preceded by enough empty cells to put the earliest one under its weekday.
/// An empty input produces an empty layout. The first malformed date aborts
/// the build with [`AppError::InvalidDateFormat`].
pub(crate) fn build_calendar_layout(
    records: &[DayRecord],
) -> Result<Vec<CalendarCell<'_>>, AppError> {
    let mut dated = records
        .iter()
        .map(|record| parse_iso_date(&record.date).map(|date| (date, record)))
        .collect::<Result<Vec<_>, _>>()?;
    dated.sort_by_key(|(date, _)| *date);

    let Some(&(first, _)) = dated.first() else {
        return Ok(Vec::new());
    };
    let padding = weekday_index(first);

    let mut cells = Vec::with_capacity(padding + dated.len());
    cells.extend(std::iter::repeat_n(CalendarCell::Empty, padding));
    cells.extend(
        dated
            .into_iter()
            .map(|(date, record)| CalendarCell::Day { date, record }),
    );
    Ok(cells)
}

/// Split a layout into week rows; only the last row can be shorter than 7.
pub(crate) fn calendar_rows<'c, 'a>(
    cells: &'c [CalendarCell<'a>],
) -> Vec<&'c [CalendarCell<'a>]> {
    cells.chunks(DAYS_PER_WEEK).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, completed: bool) -> DayRecord {
        DayRecord {
            date: date.to_string(),
            completed,
        }
    }

    fn dates<'a>(cells: &[CalendarCell<'a>]) -> Vec<&'a str> {
        cells
            .iter()
            .filter_map(|cell| match *cell {
                CalendarCell::Day { record, .. } => Some(record.date.as_str()),
                CalendarCell::Empty => None,
            })
            .collect()
    }

    #[test]
    fn empty_history_has_no_cells() {
        assert!(build_calendar_layout(&[]).unwrap().is_empty());
    }

    #[test]
    fn friday_start_gets_five_blank_cells() {
        let records = vec![
            record("2024-03-01", true),
            record("2024-03-02", false),
            record("2024-03-03", true),
        ];
        let cells = build_calendar_layout(&records).unwrap();

        assert_eq!(cells.len(), 8);
        assert!(cells[..5].iter().all(|c| matches!(c, CalendarCell::Empty)));
        assert_eq!(dates(&cells), ["2024-03-01", "2024-03-02", "2024-03-03"]);
        match cells[5] {
            CalendarCell::Day { date, record } => {
                assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
                assert!(record.completed);
            }
            CalendarCell::Empty => panic!("expected a day cell"),
        }
    }

    #[test]
    fn sunday_start_has_no_padding() {
        let records = vec![record("2024-03-03", true)];
        let cells = build_calendar_layout(&records).unwrap();
        assert_eq!(cells.len(), 1);
        assert!(!matches!(cells[0], CalendarCell::Empty));
    }

    #[test]
    fn saturday_start_has_six_blank_cells() {
        let records = vec![record("2024-03-02", false)];
        let cells = build_calendar_layout(&records).unwrap();
        assert_eq!(cells.len(), 7);
        assert_eq!(cells.iter().filter(|c| matches!(c, CalendarCell::Empty)).count(), 6);
    }

    #[test]
    fn unordered_input_matches_sorted_input() {
        let sorted = vec![
            record("2023-12-30", true),
            record("2023-12-31", false),
            record("2024-01-01", true),
            record("2024-01-02", true),
        ];
        let shuffled = vec![
            sorted[2].clone(),
            sorted[0].clone(),
            sorted[3].clone(),
            sorted[1].clone(),
        ];

        let from_sorted = build_calendar_layout(&sorted).unwrap();
        let from_shuffled = build_calendar_layout(&shuffled).unwrap();

        assert_eq!(dates(&from_sorted), dates(&from_shuffled));
        // 2023-12-30 is a Saturday
        assert_eq!(from_shuffled.iter().filter(|c| matches!(c, CalendarCell::Empty)).count(), 6);
        assert_eq!(from_shuffled.len(), 6 + sorted.len());
    }

    #[test]
    fn descending_api_order_is_reversed() {
        // The API reports newest first
        let records = vec![
            record("2024-03-05", true),
            record("2024-03-04", false),
            record("2024-03-03", true),
        ];
        let cells = build_calendar_layout(&records).unwrap();
        assert_eq!(dates(&cells), ["2024-03-03", "2024-03-04", "2024-03-05"]);
    }

    #[test]
    fn input_is_left_untouched() {
        let records = vec![record("2024-03-02", true), record("2024-03-01", false)];
        let before = records.clone();
        let _ = build_calendar_layout(&records).unwrap();
        assert_eq!(records, before);
    }

    #[test]
    fn malformed_date_is_rejected() {
        let records = vec![record("2024-03-01", true), record("03/02/2024", false)];
        let err = build_calendar_layout(&records).unwrap_err();
        assert!(matches!(err, AppError::InvalidDateFormat { ref input } if input == "03/02/2024"));
    }

    #[test]
    fn rows_hold_seven_cells() {
        let records: Vec<_> = (1..=30)
            .map(|day| record(&format!("2024-03-{day:02}"), day % 2 == 0))
            .collect();
        let cells = build_calendar_layout(&records).unwrap();
        let rows = calendar_rows(&cells);

        assert_eq!(cells.len(), 5 + 30);
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|row| row.len() == DAYS_PER_WEEK));
    }

    #[test]
    fn last_row_may_be_short() {
        let records = vec![
            record("2024-03-01", true),
            record("2024-03-02", true),
            record("2024-03-03", true),
        ];
        let cells = build_calendar_layout(&records).unwrap();
        let rows = calendar_rows(&cells);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].len(), 1);
    }
}
