//! Resolves the current pay period, fetches its data and aggregates it.

use chrono::NaiveDate;
use serde::Serialize;

use connelaide_domain::{DateWindow, PayPeriod};

use crate::core::errors::{CoreError, Result};
use crate::core::reports::{BudgetSummary, ChartSeries};
use crate::core::services::{budget_service::BudgetService, period_service::PeriodResolver};
use crate::storage::DataSource;

/// Everything the dashboard shows for one pay period.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardView {
    pub pay_period: PayPeriod,
    pub window: DateWindow,
    pub summary: BudgetSummary,
    pub chart: ChartSeries,
    /// Next-older pay period, if any, for stepping back.
    pub previous_period_id: Option<i64>,
}

pub struct DashboardService;

impl DashboardService {
    /// View for the pay period containing `today`, or `None` when no period does.
    pub fn current_view<S: DataSource + ?Sized>(
        source: &S,
        today: NaiveDate,
    ) -> Result<Option<DashboardView>> {
        let mut periods = source.pay_periods()?;
        PeriodResolver::sort_pay_periods(&mut periods);
        let Some(current) = PeriodResolver::current_pay_period(&periods, today) else {
            tracing::info!(%today, "no current pay period");
            return Ok(None);
        };
        Self::view_for_period(source, &periods, current).map(Some)
    }

    /// View for the pay period preceding `current_id` in newest-first order.
    pub fn previous_view<S: DataSource + ?Sized>(
        source: &S,
        current_id: i64,
    ) -> Result<Option<DashboardView>> {
        let mut periods = source.pay_periods()?;
        PeriodResolver::sort_pay_periods(&mut periods);
        if !periods.iter().any(|period| period.id == current_id) {
            return Err(CoreError::PayPeriodNotFound(current_id));
        }
        match PeriodResolver::previous_pay_period(&periods, current_id) {
            Some(previous) => Self::view_for_period(source, &periods, previous).map(Some),
            None => Ok(None),
        }
    }

    /// Fetches the period's collections and aggregates them.
    pub fn summary_for_period<S: DataSource + ?Sized>(
        source: &S,
        period: &PayPeriod,
    ) -> Result<BudgetSummary> {
        if !period.is_well_formed() {
            return Ok(BudgetService::aggregate(&[], &[], &source.categories()?, Some(period)));
        }
        let window = period.window();
        let transactions = source.transactions(&window)?;
        let projected = source.projected_expenses(&window)?;
        let categories = source.categories()?;
        Ok(BudgetService::aggregate(
            &transactions,
            &projected,
            &categories,
            Some(period),
        ))
    }

    fn view_for_period<S: DataSource + ?Sized>(
        source: &S,
        periods: &[PayPeriod],
        period: &PayPeriod,
    ) -> Result<DashboardView> {
        let summary = Self::summary_for_period(source, period)?;
        let chart = BudgetService::build_chart_series(&summary.categories);
        Ok(DashboardView {
            pay_period: period.clone(),
            window: period.window(),
            summary,
            chart,
            previous_period_id: PeriodResolver::previous_pay_period(periods, period.id)
                .map(|previous| previous.id),
        })
    }
}
