//! User-defined pay periods carrying a checking-account budget.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{common::*, error::DomainError, window::DateWindow};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayPeriod {
    pub id: i64,
    pub start_date: NaiveDate,
    /// Inclusive.
    pub end_date: NaiveDate,
    #[serde(default)]
    pub checking_budget: Option<f64>,
}

impl PayPeriod {
    pub fn new(id: i64, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            id,
            start_date,
            end_date,
            checking_budget: None,
        }
    }

    pub fn with_checking_budget(mut self, amount: f64) -> Self {
        self.checking_budget = Some(amount);
        self
    }

    pub fn window(&self) -> DateWindow {
        DateWindow::new(self.start_date, self.end_date)
    }

    pub fn is_well_formed(&self) -> bool {
        !self.window().is_empty()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.window().contains(date)
    }

    /// Checking budget with null and non-finite values read as zero.
    pub fn budget_amount(&self) -> f64 {
        self.checking_budget.map(finite_or_zero).unwrap_or(0.0)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        DateWindow::checked(self.start_date, self.end_date)?;
        match self.checking_budget {
            Some(budget) if budget < 0.0 => Err(DomainError::NegativeBudget(budget)),
            _ => Ok(()),
        }
    }
}

impl Identifiable for PayPeriod {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Partial update of a pay period.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PayPeriodUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub checking_budget: Option<Option<f64>>,
}

impl PayPeriodUpdate {
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none() && self.checking_budget.is_none()
    }

    pub fn apply_to(&self, period: &mut PayPeriod) {
        if let Some(start) = self.start_date {
            period.start_date = start;
        }
        if let Some(end) = self.end_date {
            period.end_date = end;
        }
        if let Some(budget) = self.checking_budget {
            period.checking_budget = budget;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn contains_uses_inclusive_dates() {
        let period = PayPeriod::new(1, date(2024, 5, 1), date(2024, 5, 14));
        assert!(period.contains(date(2024, 5, 1)));
        assert!(period.contains(date(2024, 5, 14)));
        assert!(!period.contains(date(2024, 5, 15)));
    }

    #[test]
    fn validate_rejects_inverted_ranges_and_negative_budgets() {
        let inverted = PayPeriod::new(1, date(2024, 5, 14), date(2024, 5, 1));
        assert!(!inverted.is_well_formed());
        assert!(matches!(
            inverted.validate(),
            Err(DomainError::InvalidRange { .. })
        ));

        let negative =
            PayPeriod::new(2, date(2024, 5, 1), date(2024, 5, 14)).with_checking_budget(-5.0);
        assert_eq!(negative.validate(), Err(DomainError::NegativeBudget(-5.0)));
    }

    #[test]
    fn missing_budget_reads_as_zero() {
        let period = PayPeriod::new(1, date(2024, 5, 1), date(2024, 5, 14));
        assert_eq!(period.budget_amount(), 0.0);
    }
}
