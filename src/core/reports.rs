//! Display-ready outputs produced by the budget and chunk services.

use serde::{Deserialize, Serialize};

use connelaide_domain::{DateWindow, Transaction};

/// Budget-vs-actual figures for one pay period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    pub total_spent: f64,
    pub total_budget: f64,
    /// Capped at 100; use [`BudgetSummary::is_over_budget`] for true overage.
    pub percent_used: f64,
    pub categories: Vec<CategoryBreakdown>,
    /// Transactions still awaiting a checking-impact decision.
    #[serde(default)]
    pub review_required: usize,
}

impl BudgetSummary {
    pub fn empty() -> Self {
        Self {
            total_spent: 0.0,
            total_budget: 0.0,
            percent_used: 0.0,
            categories: Vec::new(),
            review_required: 0,
        }
    }

    pub fn remaining(&self) -> f64 {
        self.total_budget - self.total_spent
    }

    pub fn is_over_budget(&self) -> bool {
        self.total_spent > self.total_budget
    }

    pub fn category(&self, name: &str) -> Option<&CategoryBreakdown> {
        self.categories.iter().find(|row| row.name == name)
    }
}

/// One category's spend against its target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryBreakdown {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub category_id: Option<i64>,
    pub name: String,
    pub spent: f64,
    pub budget: f64,
    pub percent: f64,
}

impl CategoryBreakdown {
    pub fn remaining(&self) -> f64 {
        self.budget - self.spent
    }

    pub fn is_over_budget(&self) -> bool {
        self.spent > self.budget
    }
}

/// Parallel series for a spent-vs-budget bar chart.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub spent: Vec<f64>,
    pub budget: Vec<f64>,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Two-dataset payload in the shape the dashboard chart consumes.
    pub fn to_chart_data(&self) -> ChartData {
        ChartData {
            labels: self.labels.clone(),
            datasets: vec![
                ChartDataset {
                    label: "Spent".into(),
                    data: self.spent.clone(),
                    background_color: Some(SPENT_COLOR.into()),
                },
                ChartDataset {
                    label: "Budget".into(),
                    data: self.budget.clone(),
                    background_color: Some(BUDGET_COLOR.into()),
                },
            ],
        }
    }
}

const SPENT_COLOR: &str = "#ef4444";
const BUDGET_COLOR: &str = "#3b82f6";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

/// A window of transactions rendered as one collapsible group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionChunk {
    pub window: DateWindow,
    pub transactions: Vec<Transaction>,
    /// Signed sum of effective amounts.
    pub total_amount: f64,
    #[serde(default)]
    pub is_expanded: bool,
}

impl TransactionChunk {
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
