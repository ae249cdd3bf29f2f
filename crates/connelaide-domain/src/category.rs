//! Budget categories.

use serde::{Deserialize, Serialize};

use crate::common::*;

/// A user-facing budget category with an optional per-period target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub target_budget: Option<f64>,
}

impl Category {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            target_budget: None,
        }
    }

    pub fn with_target_budget(mut self, amount: f64) -> Self {
        self.target_budget = Some(amount);
        self
    }

    /// Target budget with null and non-finite values read as zero.
    pub fn budget_amount(&self) -> f64 {
        self.target_budget.map(finite_or_zero).unwrap_or(0.0)
    }

    /// Only categories with a positive target take part in the breakdown.
    pub fn has_target_budget(&self) -> bool {
        self.budget_amount() > 0.0
    }
}

impl Identifiable for Category {
    fn id(&self) -> i64 {
        self.id
    }
}

impl NamedEntity for Category {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Partial update of a category.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CategoryUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub target_budget: Option<Option<f64>>,
}

impl CategoryUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.target_budget.is_none()
    }

    pub fn apply_to(&self, category: &mut Category) {
        if let Some(name) = &self.name {
            category.name = name.clone();
        }
        if let Some(target) = self.target_budget {
            category.target_budget = target;
        }
    }
}
