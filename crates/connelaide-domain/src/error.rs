use chrono::NaiveDate;
use thiserror::Error;

/// Validation failures raised by domain entities.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("date range ends ({end}) before it starts ({start})")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
    #[error("name must not be empty")]
    EmptyName,
    #[error("day of month must be between 1 and 31, got {0}")]
    InvalidDayOfMonth(u32),
    #[error("month of year must be between 1 and 12, got {0}")]
    InvalidMonthOfYear(u32),
    #[error("yearly expenses require a month of year")]
    MissingMonthOfYear,
    #[error("monthly expenses must not set a month of year")]
    UnexpectedMonthOfYear,
    #[error("budget must be a non-negative amount, got {0}")]
    NegativeBudget(f64),
}
