//! Recurring expense templates.
//!
//! The backend expands these into [`ProjectedExpense`](crate::ProjectedExpense)
//! instances; the client only edits and validates the templates.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{common::*, error::DomainError, window::DateWindow};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Monthly,
    Yearly,
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Frequency::Monthly => "Monthly",
            Frequency::Yearly => "Yearly",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecurringExpense {
    pub id: i64,
    pub name: String,
    pub amount: f64,
    pub frequency: Frequency,
    pub day_of_month: u32,
    #[serde(default)]
    pub month_of_year: Option<u32>,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default, alias = "connelaide_category_id")]
    pub category_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default = "RecurringExpense::default_active")]
    pub is_active: bool,
}

impl RecurringExpense {
    pub fn monthly(
        id: i64,
        name: impl Into<String>,
        amount: f64,
        day_of_month: u32,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            amount,
            frequency: Frequency::Monthly,
            day_of_month,
            month_of_year: None,
            start_date,
            end_date: None,
            category_id: None,
            note: None,
            is_active: true,
        }
    }

    pub fn yearly(
        id: i64,
        name: impl Into<String>,
        amount: f64,
        day_of_month: u32,
        month_of_year: u32,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            frequency: Frequency::Yearly,
            month_of_year: Some(month_of_year),
            ..Self::monthly(id, name, amount, day_of_month, start_date)
        }
    }

    pub fn default_active() -> bool {
        true
    }

    /// Checks the template rules, reporting the first one that is broken.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::EmptyName);
        }
        if !(1..=31).contains(&self.day_of_month) {
            return Err(DomainError::InvalidDayOfMonth(self.day_of_month));
        }
        match (self.frequency, self.month_of_year) {
            (Frequency::Yearly, None) => return Err(DomainError::MissingMonthOfYear),
            (Frequency::Yearly, Some(month)) if !(1..=12).contains(&month) => {
                return Err(DomainError::InvalidMonthOfYear(month))
            }
            (Frequency::Monthly, Some(_)) => return Err(DomainError::UnexpectedMonthOfYear),
            _ => {}
        }
        if let Some(end) = self.end_date {
            DateWindow::checked(self.start_date, end)?;
        }
        Ok(())
    }

    /// Short schedule label such as `Monthly on day 5` or `Yearly on 3/14`.
    pub fn schedule_label(&self) -> String {
        match (self.frequency, self.month_of_year) {
            (Frequency::Yearly, Some(month)) => {
                format!("Yearly on {}/{}", month, self.day_of_month)
            }
            (frequency, _) => format!("{} on day {}", frequency, self.day_of_month),
        }
    }
}

impl Identifiable for RecurringExpense {
    fn id(&self) -> i64 {
        self.id
    }
}

impl NamedEntity for RecurringExpense {
    fn name(&self) -> &str {
        &self.name
    }
}

impl BelongsToCategory for RecurringExpense {
    fn category_id(&self) -> Option<i64> {
        self.category_id
    }
}

/// Partial update of a recurring expense template.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecurringExpenseUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Frequency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_month: Option<u32>,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub month_of_year: Option<Option<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<Option<NaiveDate>>,
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
    pub is_active: Option<bool>,
}

impl RecurringExpenseUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.amount.is_none()
            && self.frequency.is_none()
            && self.day_of_month.is_none()
            && self.month_of_year.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.category_id.is_none()
            && self.note.is_none()
            && self.is_active.is_none()
    }

    /// Applies the patch. Switching to monthly clears the month of year,
    /// matching what the edit form sends.
    pub fn apply_to(&self, expense: &mut RecurringExpense) {
        if let Some(name) = &self.name {
            expense.name = name.clone();
        }
        if let Some(amount) = self.amount {
            expense.amount = amount;
        }
        if let Some(frequency) = self.frequency {
            expense.frequency = frequency;
            if frequency == Frequency::Monthly {
                expense.month_of_year = None;
            }
        }
        if let Some(day) = self.day_of_month {
            expense.day_of_month = day;
        }
        if let Some(month) = self.month_of_year {
            expense.month_of_year = month;
        }
        if let Some(start) = self.start_date {
            expense.start_date = start;
        }
        if let Some(end) = self.end_date {
            expense.end_date = end;
        }
        if let Some(category) = self.category_id {
            expense.category_id = category;
        }
        if let Some(note) = &self.note {
            expense.note = Some(note.clone());
        }
        if let Some(active) = self.is_active {
            expense.is_active = active;
        }
    }
}
