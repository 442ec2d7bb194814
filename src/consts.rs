/// Standard date format used throughout the codebase: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Where the habit API listens when neither the CLI nor the config says otherwise
pub(crate) const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Length of the history window shown by `habitctl history`
pub(crate) const DEFAULT_HISTORY_DAYS: u32 = 30;

pub(crate) const MAX_HABIT_NAME_LEN: usize = 100;

/// Environment variable holding a tracing filter directive (e.g. "habitctl=debug")
pub(crate) const LOG_ENV: &str = "HABITCTL_LOG";

/// Sunday-first column labels of the history calendar
pub(crate) const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
