//! Seam between the pure services and whatever serves backend data.

pub mod json_snapshot;

use connelaide_domain::{
    Category, DateWindow, Dated, PayPeriod, ProjectedExpense, RecurringExpense, Transaction,
};

use crate::core::errors::CoreError;

pub use json_snapshot::{load_snapshot_from_path, save_snapshot_to_path, JsonSnapshotSource};

/// Abstraction over backends able to serve the collections the services need.
///
/// Window-scoped queries are inclusive on both ends, matching the
/// `start_date`/`end_date` query parameters of the REST API.
pub trait DataSource {
    fn pay_periods(&self) -> Result<Vec<PayPeriod>, CoreError>;
    fn categories(&self) -> Result<Vec<Category>, CoreError>;
    fn recurring_expenses(&self) -> Result<Vec<RecurringExpense>, CoreError>;
    fn transactions(&self, window: &DateWindow) -> Result<Vec<Transaction>, CoreError>;
    fn projected_expenses(&self, window: &DateWindow) -> Result<Vec<ProjectedExpense>, CoreError>;
}

/// Clones the items of `items` falling inside `window`.
pub fn within_window<T: Dated + Clone>(items: &[T], window: &DateWindow) -> Vec<T> {
    items
        .iter()
        .filter(|item| window.contains(item.date()))
        .cloned()
        .collect()
}
