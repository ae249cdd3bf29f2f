//! Date windows for paging through transaction history.
//!
//! Two conventions are supported: fixed half-month windows (days 1-15 and
//! 16 to month end) and caller-supplied [`PayPeriod`] records.

use chrono::{Datelike, NaiveDate};

use connelaide_domain::{DateWindow, PayPeriod};

use crate::core::errors::{CoreError, Result};

const FIRST_HALF_LAST_DAY: u32 = 15;
const SECOND_HALF_FIRST_DAY: u32 = 16;
const TRANSPORT_FORMAT: &str = "%Y-%m-%d";

/// Stateless window arithmetic over half months and pay periods.
pub struct PeriodResolver;

impl PeriodResolver {
    /// Half-month window containing `today`.
    pub fn current_half_month_window(today: NaiveDate) -> DateWindow {
        let (year, month) = (today.year(), today.month());
        if today.day() <= FIRST_HALF_LAST_DAY {
            first_half(year, month)
        } else {
            second_half(year, month)
        }
    }

    /// Window immediately before the one starting at `current_start`.
    ///
    /// A start on day 16 steps back to days 1-15 of the same month; any other
    /// start steps back to the second half of the prior month.
    pub fn previous_half_month_window(current_start: NaiveDate) -> DateWindow {
        let (year, month) = (current_start.year(), current_start.month());
        if current_start.day() == SECOND_HALF_FIRST_DAY {
            first_half(year, month)
        } else {
            let (prev_year, prev_month) = if month == 1 {
                (year - 1, 12)
            } else {
                (year, month - 1)
            };
            second_half(prev_year, prev_month)
        }
    }

    /// Window immediately after the one starting at `current_start`.
    pub fn next_half_month_window(current_start: NaiveDate) -> DateWindow {
        let (year, month) = (current_start.year(), current_start.month());
        if current_start.day() < SECOND_HALF_FIRST_DAY {
            second_half(year, month)
        } else {
            let (next_year, next_month) = if month == 12 {
                (year + 1, 1)
            } else {
                (year, month + 1)
            };
            first_half(next_year, next_month)
        }
    }

    /// Renders `YYYY-MM-DD` with zero-padded month and day.
    pub fn format_for_transport(date: NaiveDate) -> String {
        date.format(TRANSPORT_FORMAT).to_string()
    }

    pub fn parse_transport_date(raw: &str) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(raw.trim(), TRANSPORT_FORMAT).map_err(|err| {
            CoreError::InvalidInput(format!("`{raw}` is not a YYYY-MM-DD date: {err}"))
        })
    }

    /// First pay period whose inclusive range contains `today`.
    ///
    /// Returns `None` rather than guessing when nothing matches; malformed
    /// periods never match.
    pub fn current_pay_period(periods: &[PayPeriod], today: NaiveDate) -> Option<&PayPeriod> {
        let current = periods.iter().find(|period| period.contains(today));
        if current.is_none() {
            tracing::debug!(%today, periods = periods.len(), "no pay period contains today");
        }
        current
    }

    /// The next-older pay period by position, assuming `periods` is sorted
    /// descending by start date.
    pub fn previous_pay_period(periods: &[PayPeriod], current_id: i64) -> Option<&PayPeriod> {
        let index = periods.iter().position(|period| period.id == current_id)?;
        periods.get(index + 1)
    }

    /// Sorts newest first.
    pub fn sort_pay_periods(periods: &mut [PayPeriod]) {
        periods.sort_by(|a, b| b.start_date.cmp(&a.start_date).then(b.id.cmp(&a.id)));
    }

    /// Inserts before the first period that starts earlier, keeping the
    /// newest-first order. Returns the insertion index.
    pub fn insert_pay_period(periods: &mut Vec<PayPeriod>, period: PayPeriod) -> usize {
        let index = periods
            .iter()
            .position(|existing| existing.start_date < period.start_date)
            .unwrap_or(periods.len());
        periods.insert(index, period);
        index
    }
}

/// Last calendar day of `month`, accounting for leap years.
pub fn last_day_of_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_next| first_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}

fn first_half(year: i32, month: u32) -> DateWindow {
    DateWindow::new(
        ymd(year, month, 1),
        ymd(year, month, FIRST_HALF_LAST_DAY),
    )
}

fn second_half(year: i32, month: u32) -> DateWindow {
    DateWindow::new(
        ymd(year, month, SECOND_HALF_FIRST_DAY),
        ymd(year, month, last_day_of_month(year, month)),
    )
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}
