//! Bank transactions and the user annotations layered on top of them.

use std::fmt;

use chrono::NaiveDate;
use serde::{de::Deserializer, Deserialize, Serialize};

use crate::common::*;

/// Immutable bank record plus the user-owned annotation fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: i64,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
    /// Signed bank amount; debits are negative.
    pub amount: f64,
    #[serde(default)]
    pub account_id: String,
    #[serde(default)]
    pub pending: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_name: Option<String>,
    /// User override of `amount`; `None` means the bank amount stands.
    #[serde(default)]
    pub edited_amount: Option<f64>,
    #[serde(default, alias = "connelaide_category_id")]
    pub category_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub impacts_checking_balance: CheckingImpact,
}

impl Transaction {
    pub fn new(id: i64, date: NaiveDate, amount: f64) -> Self {
        Self {
            id,
            date,
            description: String::new(),
            amount,
            account_id: String::new(),
            pending: false,
            merchant_name: None,
            edited_amount: None,
            category_id: None,
            note: None,
            impacts_checking_balance: CheckingImpact::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_impact(mut self, impact: CheckingImpact) -> Self {
        self.impacts_checking_balance = impact;
        self
    }

    pub fn with_edited_amount(mut self, amount: f64) -> Self {
        self.edited_amount = Some(amount);
        self
    }

    /// The user-edited amount when present, otherwise the bank amount.
    pub fn effective_amount(&self) -> f64 {
        self.edited_amount.unwrap_or(self.amount)
    }

    /// Only transactions explicitly flagged as impacting checking count toward spend.
    pub fn counts_toward_checking(&self) -> bool {
        self.impacts_checking_balance == CheckingImpact::True
    }

    pub fn needs_review(&self) -> bool {
        self.impacts_checking_balance == CheckingImpact::ReviewRequired
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> i64 {
        self.id
    }
}

impl BelongsToCategory for Transaction {
    fn category_id(&self) -> Option<i64> {
        self.category_id
    }
}

impl Dated for Transaction {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Whether a transaction counts toward checking-account spend.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum CheckingImpact {
    True,
    False,
    #[default]
    ReviewRequired,
}

impl CheckingImpact {
    /// Maps a backend label onto the enum; unrecognised labels need review.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "true" => CheckingImpact::True,
            "false" => CheckingImpact::False,
            _ => CheckingImpact::ReviewRequired,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckingImpact::True => "true",
            CheckingImpact::False => "false",
            CheckingImpact::ReviewRequired => "review_required",
        }
    }
}

impl fmt::Display for CheckingImpact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CheckingImpact {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Label(String),
        }

        Ok(match Option::<Raw>::deserialize(deserializer)? {
            Some(Raw::Flag(true)) => CheckingImpact::True,
            Some(Raw::Flag(false)) => CheckingImpact::False,
            Some(Raw::Label(label)) => CheckingImpact::from_label(&label),
            None => CheckingImpact::ReviewRequired,
        })
    }
}

/// Partial update of a transaction's annotation fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TransactionUpdate {
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub edited_amount: Option<Option<f64>>,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none",
        alias = "connelaide_category_id"
    )]
    pub category_id: Option<Option<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impacts_checking_balance: Option<CheckingImpact>,
}

impl TransactionUpdate {
    pub fn is_empty(&self) -> bool {
        self.edited_amount.is_none()
            && self.category_id.is_none()
            && self.note.is_none()
            && self.impacts_checking_balance.is_none()
    }

    pub fn apply_to(&self, txn: &mut Transaction) {
        if let Some(amount) = self.edited_amount {
            txn.edited_amount = amount;
        }
        if let Some(category) = self.category_id {
            txn.category_id = category;
        }
        if let Some(note) = &self.note {
            txn.note = Some(note.clone());
        }
        if let Some(impact) = self.impacts_checking_balance {
            txn.impacts_checking_balance = impact;
        }
    }
}
