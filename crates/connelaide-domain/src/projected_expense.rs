//! Forecast spend placeholders and their reconciliation state.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::*;

/// A forecast spend that has not (yet) been matched to a bank transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectedExpense {
    pub id: i64,
    pub name: String,
    /// Magnitude of the expected spend. Summed through its absolute value.
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(default, alias = "connelaide_category_id")]
    pub category_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub is_struck_out: bool,
    #[serde(default)]
    pub merged_transaction_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_expense_id: Option<i64>,
}

impl ProjectedExpense {
    pub fn new(id: i64, name: impl Into<String>, date: NaiveDate, amount: f64) -> Self {
        Self {
            id,
            name: name.into(),
            amount,
            date,
            category_id: None,
            note: None,
            is_struck_out: false,
            merged_transaction_id: None,
            recurring_expense_id: None,
        }
    }

    pub fn with_category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn struck_out(mut self) -> Self {
        self.is_struck_out = true;
        self
    }

    pub fn merged_into(mut self, transaction_id: i64) -> Self {
        self.merged_transaction_id = Some(transaction_id);
        self
    }

    pub fn is_merged(&self) -> bool {
        self.merged_transaction_id.is_some()
    }

    /// Struck-out and merged projections are excluded so nothing is counted twice.
    pub fn counts_toward_spend(&self) -> bool {
        !self.is_struck_out && !self.is_merged()
    }
}

impl Identifiable for ProjectedExpense {
    fn id(&self) -> i64 {
        self.id
    }
}

impl NamedEntity for ProjectedExpense {
    fn name(&self) -> &str {
        &self.name
    }
}

impl BelongsToCategory for ProjectedExpense {
    fn category_id(&self) -> Option<i64> {
        self.category_id
    }
}

impl Dated for ProjectedExpense {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Partial update of a projected expense.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProjectedExpenseUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(
        default,
        alias = "connelaide_category_id",
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub category_id: Option<Option<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_struck_out: Option<bool>,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub merged_transaction_id: Option<Option<i64>>,
}

impl ProjectedExpenseUpdate {
    /// Patch that reconciles the projection into a real transaction.
    pub fn merge_with(transaction_id: i64) -> Self {
        Self {
            merged_transaction_id: Some(Some(transaction_id)),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.amount.is_none()
            && self.date.is_none()
            && self.category_id.is_none()
            && self.note.is_none()
            && self.is_struck_out.is_none()
            && self.merged_transaction_id.is_none()
    }

    pub fn apply_to(&self, expense: &mut ProjectedExpense) {
        if let Some(name) = &self.name {
            expense.name = name.clone();
        }
        if let Some(amount) = self.amount {
            expense.amount = amount;
        }
        if let Some(date) = self.date {
            expense.date = date;
        }
        if let Some(category) = self.category_id {
            expense.category_id = category;
        }
        if let Some(note) = &self.note {
            expense.note = Some(note.clone());
        }
        if let Some(struck) = self.is_struck_out {
            expense.is_struck_out = struck;
        }
        if let Some(merged) = self.merged_transaction_id {
            expense.merged_transaction_id = merged;
        }
    }
}
