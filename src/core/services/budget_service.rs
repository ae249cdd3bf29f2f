//! Rolls transactions and projected expenses into budget-vs-actual figures.

use std::collections::{HashMap, HashSet};

use connelaide_domain::{
    finite_or_zero, BelongsToCategory, Category, PayPeriod, ProjectedExpense, Transaction,
};

use crate::core::reports::{BudgetSummary, CategoryBreakdown, ChartSeries};

/// Stateless aggregation over a single fetched snapshot.
pub struct BudgetService;

impl BudgetService {
    /// Computes totals and the per-category breakdown for one pay period.
    ///
    /// Pure: identical inputs always yield an identical summary. A missing
    /// pay period contributes a zero budget; a malformed one (`end < start`)
    /// is an empty window, so nothing is counted toward spend.
    pub fn aggregate(
        transactions: &[Transaction],
        projected: &[ProjectedExpense],
        categories: &[Category],
        pay_period: Option<&PayPeriod>,
    ) -> BudgetSummary {
        let empty_window = pay_period.is_some_and(|period| !period.is_well_formed());
        if empty_window {
            tracing::warn!(
                pay_period = pay_period.map(|period| period.id),
                "pay period ends before it starts; aggregating as empty"
            );
        }

        let (counted_txns, counted_projections): (Vec<&Transaction>, Vec<&ProjectedExpense>) =
            if empty_window {
                (Vec::new(), Vec::new())
            } else {
                (
                    transactions
                        .iter()
                        .filter(|txn| txn.counts_toward_checking())
                        .collect(),
                    projected
                        .iter()
                        .filter(|expense| expense.counts_toward_spend())
                        .collect(),
                )
            };

        let mut by_category: HashMap<i64, f64> = HashMap::new();
        let mut total_spent = 0.0;
        for txn in &counted_txns {
            let spend = transaction_spend(txn);
            total_spent += spend;
            record(&mut by_category, *txn, spend);
        }
        for expense in &counted_projections {
            let spend = projection_spend(expense);
            total_spent += spend;
            record(&mut by_category, *expense, spend);
        }

        let total_budget = if empty_window {
            0.0
        } else {
            pay_period.map(PayPeriod::budget_amount).unwrap_or(0.0)
        };

        let known: HashSet<i64> = categories.iter().map(|category| category.id).collect();
        let orphaned = by_category.keys().filter(|id| !known.contains(id)).count();
        if orphaned > 0 {
            tracing::warn!(orphaned, "spend references unknown categories");
        }

        let mut rows: Vec<CategoryBreakdown> = categories
            .iter()
            .filter(|category| category.has_target_budget())
            .map(|category| {
                let spent = by_category.get(&category.id).copied().unwrap_or(0.0);
                let budget = category.budget_amount();
                CategoryBreakdown {
                    category_id: Some(category.id),
                    name: category.name.clone(),
                    spent,
                    budget,
                    percent: percent_used(spent, budget),
                }
            })
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name).then(a.category_id.cmp(&b.category_id)));

        let review_required = if empty_window {
            0
        } else {
            transactions.iter().filter(|txn| txn.needs_review()).count()
        };

        tracing::debug!(
            transactions = transactions.len(),
            counted_transactions = counted_txns.len(),
            projected = projected.len(),
            counted_projections = counted_projections.len(),
            categories = rows.len(),
            total_spent,
            total_budget,
            "aggregated budget summary"
        );

        BudgetSummary {
            total_spent,
            total_budget,
            percent_used: percent_used(total_spent, total_budget),
            categories: rows,
            review_required,
        }
    }

    /// Labels and paired series for charting, in breakdown order.
    pub fn build_chart_series(rows: &[CategoryBreakdown]) -> ChartSeries {
        ChartSeries {
            labels: rows.iter().map(|row| row.name.clone()).collect(),
            spent: rows.iter().map(|row| row.spent).collect(),
            budget: rows.iter().map(|row| row.budget).collect(),
        }
    }
}

/// Spend as a share of budget, capped to `[0, 100]`; zero when there is no budget.
///
/// Spend that overflowed to infinity reads as fully used.
pub fn percent_used(spent: f64, budget: f64) -> f64 {
    if budget.is_nan() || budget <= 0.0 || spent.is_nan() {
        return 0.0;
    }
    if spent == f64::INFINITY {
        return 100.0;
    }
    (spent / budget * 100.0).clamp(0.0, 100.0)
}

/// Magnitude a counted transaction adds to spend.
pub fn transaction_spend(txn: &Transaction) -> f64 {
    finite_or_zero(txn.effective_amount()).abs()
}

/// Magnitude a counted projection adds to spend.
pub fn projection_spend(expense: &ProjectedExpense) -> f64 {
    finite_or_zero(expense.amount).abs()
}

fn record<T: BelongsToCategory>(totals: &mut HashMap<i64, f64>, item: &T, spend: f64) {
    if let Some(category_id) = item.category_id() {
        *totals.entry(category_id).or_insert(0.0) += spend;
    }
}
