use chrono::NaiveDate;

use crate::consts::DATE_FORMAT;
use crate::error::AppError;

/// Parse a user-supplied date (YYYYMMDD or YYYY-MM-DD)
pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, AppError> {
    let trimmed = s.trim();
    if trimmed.len() == 8
        && let Ok(d) = NaiveDate::parse_from_str(trimmed, "%Y%m%d")
    {
        return Ok(d);
    }
    if let Ok(d) = parse_iso_date(trimmed) {
        return Ok(d);
    }
    Err(AppError::InvalidDate {
        input: s.to_string(),
    })
}

/// Strict `YYYY-MM-DD` parsing for dates coming back from the API.
///
/// Only zero-padded ISO dates are accepted so that chronological and
/// lexicographic order agree for everything that passes.
pub(crate) fn parse_iso_date(s: &str) -> Result<NaiveDate, AppError> {
    let is_iso_shape = s.len() == 10
        && s.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !is_iso_shape {
        return Err(AppError::InvalidDateFormat {
            input: s.to_string(),
        });
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| AppError::InvalidDateFormat {
        input: s.to_string(),
    })
}
