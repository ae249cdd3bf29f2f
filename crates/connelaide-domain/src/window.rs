//! Inclusive calendar windows used for paging and budget periods.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A calendar window whose `start` and `end` days are both included.
///
/// A window with `end < start` is malformed and behaves as empty: it
/// contains no dates and spans zero days.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Builds a window, rejecting ranges that end before they start.
    pub fn checked(start: NaiveDate, end: NaiveDate) -> Result<Self, DomainError> {
        if end < start {
            return Err(DomainError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        !self.is_empty() && date >= self.start && date <= self.end
    }

    /// Number of days covered, counting both ends.
    pub fn day_count(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start).num_days() + 1
        }
    }

    /// Returns `true` when `other` starts the day after this window ends.
    pub fn precedes(&self, other: &DateWindow) -> bool {
        self.end.succ_opt() == Some(other.start)
    }
}
