use chrono::NaiveDate;

use crate::utils::parse_iso_date;

/// Whether a habit's last completion falls on `today`.
///
/// Only the date part of `last_completed` is compared: time of day and any
/// UTC offset are ignored. The API reports either a bare `YYYY-MM-DD` or a
/// full ISO-8601 timestamp; values that are neither count as not completed.
pub(crate) fn is_completed_today(last_completed: Option<&str>, today: NaiveDate) -> bool {
    let Some(raw) = last_completed else {
        return false;
    };
    raw.trim()
        .get(..10)
        .and_then(|date| parse_iso_date(date).ok())
        .is_some_and(|date| date == today)
}
