use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Invalid date format \"{input}\" in habit history (expected YYYY-MM-DD)")]
    InvalidDateFormat { input: String },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("{reason}")]
    InvalidHabitName { reason: &'static str },

    #[error("History length must be at least 1 day (got {days})")]
    InvalidDays { days: u32 },

    #[error("Unknown suggestion #{index} (run `habitctl suggestions` to list them)")]
    UnknownSuggestion { index: usize },

    #[error("Failed to {action}: {source}")]
    Operation {
        action: &'static str,
        #[source]
        source: ApiError,
    },

    #[error("Failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Wrap an API failure with the user-facing action that triggered it.
    pub(crate) fn operation(action: &'static str) -> impl FnOnce(ApiError) -> Self {
        move |source| AppError::Operation { action, source }
    }

    /// Failures that the user can resolve by re-running the same command.
    pub(crate) fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::Operation {
                source: ApiError::Transport(_),
                ..
            } | AppError::Operation {
                source: ApiError::Status { status: 500.., .. },
                ..
            }
        )
    }
}

#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error("could not reach the habit API: {0}")]
    Transport(#[from] ureq::Error),

    #[error("API returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("unexpected API response: {0}")]
    Decode(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_display_date() {
        let e = AppError::InvalidDate {
            input: "abc".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Invalid date "abc" (expected YYYYMMDD or YYYY-MM-DD)"#
        );
    }

    #[test]
    fn app_error_display_date_format() {
        let e = AppError::InvalidDateFormat {
            input: "03/01/2024".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Invalid date format "03/01/2024" in habit history (expected YYYY-MM-DD)"#
        );
    }

    #[test]
    fn app_error_display_timezone() {
        let e = AppError::InvalidTimezone {
            input: "Mars/Olympus".to_string(),
        };
        assert_eq!(e.to_string(), "Invalid timezone: Mars/Olympus");
    }

    #[test]
    fn operation_wraps_api_status() {
        let err = AppError::operation("add habit")(ApiError::Status {
            status: 409,
            message: "Habit already exists".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Failed to add habit: API returned 409: Habit already exists"
        );
        assert!(!err.is_retryable());
    }

    #[test]
    fn server_errors_are_retryable() {
        let err = AppError::operation("load habits")(ApiError::Status {
            status: 503,
            message: "unavailable".to_string(),
        });
        assert!(err.is_retryable());
    }

    #[test]
    fn validation_errors_are_not_retryable() {
        let err = AppError::InvalidHabitName {
            reason: "Habit name is required",
        };
        assert_eq!(err.to_string(), "Habit name is required");
        assert!(!err.is_retryable());
    }
}
