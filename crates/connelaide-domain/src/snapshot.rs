//! Serializable bundle of every collection the backend serves.

use serde::{Deserialize, Serialize};

use crate::{
    category::Category, pay_period::PayPeriod, projected_expense::ProjectedExpense,
    recurring::RecurringExpense, transaction::Transaction,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub projected_expenses: Vec<ProjectedExpense>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub pay_periods: Vec<PayPeriod>,
    #[serde(default)]
    pub recurring_expenses: Vec<RecurringExpense>,
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
            && self.projected_expenses.is_empty()
            && self.categories.is_empty()
            && self.pay_periods.is_empty()
            && self.recurring_expenses.is_empty()
    }
}
