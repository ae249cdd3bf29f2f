#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Mutex;

use chrono::NaiveDate;
use connelaide_core::domain::{
    Category, CheckingImpact, PayPeriod, ProjectedExpense, Snapshot, Transaction,
};
use connelaide_core::storage::save_snapshot_to_path;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Fresh directory that outlives the calling test.
pub fn temp_base() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// February 2024 household: two pay periods, three categories.
pub fn sample_snapshot() -> Snapshot {
    Snapshot {
        transactions: vec![
            Transaction::new(1, date(2024, 2, 3), -50.0)
                .with_description("Market")
                .with_category(1)
                .with_impact(CheckingImpact::True),
            Transaction::new(2, date(2024, 2, 4), -20.0)
                .with_description("Card payment")
                .with_category(1)
                .with_impact(CheckingImpact::False),
            Transaction::new(3, date(2024, 2, 9), -45.0)
                .with_description("Gas station")
                .with_category(2)
                .with_impact(CheckingImpact::True)
                .with_edited_amount(-40.0),
            Transaction::new(4, date(2024, 2, 12), -9.99).with_description("Unknown charge"),
            Transaction::new(5, date(2024, 1, 20), -100.0)
                .with_description("Old groceries")
                .with_category(1)
                .with_impact(CheckingImpact::True),
        ],
        projected_expenses: vec![
            ProjectedExpense::new(1, "Farmers market", date(2024, 2, 10), 30.0).with_category(1),
            ProjectedExpense::new(2, "Cancelled trip", date(2024, 2, 11), 500.0)
                .with_category(2)
                .struck_out(),
            ProjectedExpense::new(3, "Fuel", date(2024, 2, 9), 45.0)
                .with_category(2)
                .merged_into(3),
        ],
        categories: vec![
            Category::new(1, "Groceries").with_target_budget(100.0),
            Category::new(2, "Fuel").with_target_budget(80.0),
            Category::new(3, "Misc"),
        ],
        pay_periods: vec![
            PayPeriod::new(10, date(2024, 1, 16), date(2024, 1, 31)).with_checking_budget(150.0),
            PayPeriod::new(11, date(2024, 2, 1), date(2024, 2, 15)).with_checking_budget(200.0),
        ],
        recurring_expenses: Vec::new(),
    }
}

/// Writes `snapshot` to a fresh temp directory and returns the file path.
pub fn write_snapshot(snapshot: &Snapshot) -> PathBuf {
    let path = temp_base().join("snapshot.json");
    save_snapshot_to_path(snapshot, &path).expect("write snapshot");
    path
}
