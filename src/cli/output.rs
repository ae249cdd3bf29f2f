//! Plain-text rendering of service outputs for the terminal.

use colored::Colorize;

use connelaide_domain::DateWindow;

use crate::core::format::{format_currency, format_date_range, format_percent};
use crate::core::reports::{BudgetSummary, CategoryBreakdown, TransactionChunk};
use crate::core::services::{DashboardView, PeriodResolver};

/// `2024-02-01 2024-02-15  Feb 1 - 15, 2024`
pub fn render_window(window: &DateWindow) -> String {
    format!(
        "{} {}  {}",
        PeriodResolver::format_for_transport(window.start),
        PeriodResolver::format_for_transport(window.end),
        format_date_range(window.start, window.end)
    )
}

pub fn render_dashboard(view: &DashboardView, currency: &str) -> String {
    let mut lines = vec![
        format!(
            "Pay period {}",
            format_date_range(view.window.start, view.window.end)
        )
        .bold()
        .to_string(),
        render_totals(&view.summary, currency),
    ];
    if view.summary.review_required > 0 {
        lines.push(
            format!(
                "{} transaction(s) need a checking-impact review",
                view.summary.review_required
            )
            .bright_yellow()
            .to_string(),
        );
    }
    if view.summary.categories.is_empty() {
        lines.push("No budgeted categories.".to_string());
    } else {
        lines.extend(
            view.summary
                .categories
                .iter()
                .map(|row| render_category_row(row, currency)),
        );
    }
    lines.join("\n")
}

fn render_totals(summary: &BudgetSummary, currency: &str) -> String {
    let spent = format_currency(summary.total_spent, currency);
    let spent = if summary.is_over_budget() {
        spent.bright_red().to_string()
    } else {
        spent
    };
    format!(
        "Spent {} of {} ({})",
        spent,
        format_currency(summary.total_budget, currency),
        format_percent(summary.percent_used)
    )
}

pub fn render_category_row(row: &CategoryBreakdown, currency: &str) -> String {
    let line = format!(
        "{:<20} {:>12} / {:>12}  {:>6}",
        row.name,
        format_currency(row.spent, currency),
        format_currency(row.budget, currency),
        format_percent(row.percent)
    );
    if row.is_over_budget() {
        line.bright_red().to_string()
    } else {
        line
    }
}

pub fn render_chunk(chunk: &TransactionChunk, currency: &str) -> String {
    let mut out = format!(
        "{}  {} transaction(s)  {}",
        format_date_range(chunk.window.start, chunk.window.end),
        chunk.len(),
        format_currency(chunk.total_amount, currency)
    );
    if chunk.is_expanded {
        for txn in &chunk.transactions {
            out.push_str(&format!(
                "\n  {}  {:<30} {:>12}",
                PeriodResolver::format_for_transport(txn.date),
                txn.description,
                format_currency(txn.effective_amount(), currency)
            ));
        }
    }
    out
}
