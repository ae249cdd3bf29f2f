mod common;

use common::date;
use connelaide_core::{
    core::{
        errors::CoreError,
        services::{period_service::last_day_of_month, PeriodResolver},
    },
    domain::{DateWindow, PayPeriod},
};

#[test]
fn current_window_splits_month_at_the_fifteenth() {
    assert_eq!(
        PeriodResolver::current_half_month_window(date(2024, 2, 10)),
        DateWindow::new(date(2024, 2, 1), date(2024, 2, 15))
    );
    assert_eq!(
        PeriodResolver::current_half_month_window(date(2024, 2, 15)),
        DateWindow::new(date(2024, 2, 1), date(2024, 2, 15))
    );
    assert_eq!(
        PeriodResolver::current_half_month_window(date(2024, 2, 20)),
        DateWindow::new(date(2024, 2, 16), date(2024, 2, 29))
    );
    assert_eq!(
        PeriodResolver::current_half_month_window(date(2023, 2, 16)),
        DateWindow::new(date(2023, 2, 16), date(2023, 2, 28))
    );
}

#[test]
fn previous_window_rolls_over_the_year() {
    assert_eq!(
        PeriodResolver::previous_half_month_window(date(2024, 1, 1)),
        DateWindow::new(date(2023, 12, 16), date(2023, 12, 31))
    );
    assert_eq!(
        PeriodResolver::previous_half_month_window(date(2024, 3, 16)),
        DateWindow::new(date(2024, 3, 1), date(2024, 3, 15))
    );
    assert_eq!(
        PeriodResolver::previous_half_month_window(date(2024, 3, 1)),
        DateWindow::new(date(2024, 2, 16), date(2024, 2, 29))
    );
}

#[test]
fn next_window_mirrors_previous() {
    assert_eq!(
        PeriodResolver::next_half_month_window(date(2023, 12, 16)),
        DateWindow::new(date(2024, 1, 1), date(2024, 1, 15))
    );
    assert_eq!(
        PeriodResolver::next_half_month_window(date(2024, 2, 1)),
        DateWindow::new(date(2024, 2, 16), date(2024, 2, 29))
    );
}

#[test]
fn stepping_back_yields_contiguous_windows() {
    let mut window = PeriodResolver::current_half_month_window(date(2024, 3, 5));
    for _ in 0..30 {
        let previous = PeriodResolver::previous_half_month_window(window.start);
        assert!(previous.precedes(&window), "{previous:?} then {window:?}");
        assert!(!previous.is_empty());
        window = previous;
    }
}

#[test]
fn transport_dates_are_zero_padded() {
    assert_eq!(PeriodResolver::format_for_transport(date(2024, 3, 5)), "2024-03-05");
    assert_eq!(
        PeriodResolver::parse_transport_date("2024-03-05").unwrap(),
        date(2024, 3, 5)
    );
    let err = PeriodResolver::parse_transport_date("03/05/2024").unwrap_err();
    assert!(matches!(err, CoreError::InvalidInput(_)));
}

#[test]
fn last_day_accounts_for_leap_years() {
    assert_eq!(last_day_of_month(2024, 2), 29);
    assert_eq!(last_day_of_month(2023, 2), 28);
    assert_eq!(last_day_of_month(1900, 2), 28);
    assert_eq!(last_day_of_month(2000, 2), 29);
    assert_eq!(last_day_of_month(2024, 12), 31);
    assert_eq!(last_day_of_month(2024, 4), 30);
}

fn periods() -> Vec<PayPeriod> {
    vec![
        PayPeriod::new(1, date(2024, 1, 1), date(2024, 1, 14)),
        PayPeriod::new(3, date(2024, 1, 29), date(2024, 2, 11)),
        PayPeriod::new(2, date(2024, 1, 15), date(2024, 1, 28)),
    ]
}

#[test]
fn current_pay_period_uses_inclusive_bounds() {
    let periods = periods();
    assert_eq!(
        PeriodResolver::current_pay_period(&periods, date(2024, 1, 28)).map(|p| p.id),
        Some(2)
    );
    assert_eq!(
        PeriodResolver::current_pay_period(&periods, date(2024, 1, 29)).map(|p| p.id),
        Some(3)
    );
    assert!(PeriodResolver::current_pay_period(&periods, date(2024, 3, 1)).is_none());
}

#[test]
fn malformed_periods_never_match() {
    let periods = vec![PayPeriod::new(9, date(2024, 2, 10), date(2024, 2, 1))];
    assert!(PeriodResolver::current_pay_period(&periods, date(2024, 2, 5)).is_none());
}

#[test]
fn sorting_and_previous_lookup() {
    let mut periods = periods();
    PeriodResolver::sort_pay_periods(&mut periods);
    let ids: Vec<i64> = periods.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);

    assert_eq!(
        PeriodResolver::previous_pay_period(&periods, 3).map(|p| p.id),
        Some(2)
    );
    assert!(PeriodResolver::previous_pay_period(&periods, 1).is_none());
    assert!(PeriodResolver::previous_pay_period(&periods, 42).is_none());
}

#[test]
fn insert_keeps_newest_first_order() {
    let mut periods = periods();
    PeriodResolver::sort_pay_periods(&mut periods);

    let newest = PeriodResolver::insert_pay_period(
        &mut periods,
        PayPeriod::new(4, date(2024, 2, 12), date(2024, 2, 25)),
    );
    assert_eq!(newest, 0);

    let oldest = PeriodResolver::insert_pay_period(
        &mut periods,
        PayPeriod::new(0, date(2023, 12, 18), date(2023, 12, 31)),
    );
    assert_eq!(oldest, periods.len() - 1);

    let ids: Vec<i64> = periods.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![4, 3, 2, 1, 0]);
}
