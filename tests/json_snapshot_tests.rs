mod common;

use assert_fs::prelude::*;
use common::{date, sample_snapshot, write_snapshot};
use connelaide_core::{
    core::errors::CoreError,
    domain::{CheckingImpact, DateWindow, DomainError, RecurringExpense},
    storage::{load_snapshot_from_path, DataSource, JsonSnapshotSource},
};

const BACKEND_PAYLOAD: &str = r#"{
  "transactions": [
    {"id": 1, "date": "2024-02-03", "amount": -50.0, "impacts_checking_balance": "true", "connelaide_category_id": 1},
    {"id": 2, "date": "2024-02-04", "amount": -20.0, "impacts_checking_balance": false},
    {"id": 3, "date": "2024-02-05", "amount": -5.0, "impacts_checking_balance": null},
    {"id": 4, "date": "2024-02-06", "amount": -7.5, "impacts_checking_balance": "maybe"},
    {"id": 5, "date": "2024-02-20", "amount": -1.0}
  ],
  "categories": [{"id": 1, "name": "Groceries", "target_budget": null}],
  "pay_periods": [{"id": 1, "start_date": "2024-02-01", "end_date": "2024-02-15"}]
}"#;

#[test]
fn backend_payload_parses_leniently() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("snapshot.json");
    file.write_str(BACKEND_PAYLOAD).unwrap();

    let snapshot = load_snapshot_from_path(file.path()).unwrap();

    let impacts: Vec<CheckingImpact> = snapshot
        .transactions
        .iter()
        .map(|txn| txn.impacts_checking_balance)
        .collect();
    assert_eq!(
        impacts,
        vec![
            CheckingImpact::True,
            CheckingImpact::False,
            CheckingImpact::ReviewRequired,
            CheckingImpact::ReviewRequired,
            CheckingImpact::ReviewRequired,
        ]
    );
    assert_eq!(snapshot.transactions[0].category_id, Some(1));
    assert_eq!(snapshot.categories[0].budget_amount(), 0.0);
    assert_eq!(snapshot.pay_periods[0].budget_amount(), 0.0);
    assert!(snapshot.projected_expenses.is_empty());
}

#[test]
fn window_queries_are_inclusive() {
    let source = JsonSnapshotSource::from_snapshot(sample_snapshot());

    let transactions = source
        .transactions(&DateWindow::new(date(2024, 2, 3), date(2024, 2, 9)))
        .unwrap();
    let ids: Vec<i64> = transactions.iter().map(|txn| txn.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let reversed = source
        .transactions(&DateWindow::new(date(2024, 2, 9), date(2024, 2, 3)))
        .unwrap();
    assert!(reversed.is_empty());

    let projected = source
        .projected_expenses(&DateWindow::new(date(2024, 2, 10), date(2024, 2, 10)))
        .unwrap();
    assert_eq!(projected.len(), 1);
}

#[test]
fn save_then_open_preserves_snapshot() {
    let original = sample_snapshot();
    let path = write_snapshot(&original);

    let reopened = JsonSnapshotSource::open(&path).unwrap();

    assert_eq!(reopened.snapshot(), &original);
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn save_creates_missing_parent_directories() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("nested").join("data").join("snapshot.json");
    let source = JsonSnapshotSource::from_snapshot(sample_snapshot());

    source.save(&path).unwrap();

    assert!(path.exists());
}

#[test]
fn missing_file_is_an_io_error() {
    let temp = tempfile::tempdir().unwrap();
    let err = JsonSnapshotSource::open(&temp.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, CoreError::Io(_)));
}

#[test]
fn malformed_file_is_a_format_error() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("broken.json");
    file.write_str("{ not json").unwrap();

    let err = JsonSnapshotSource::open(file.path()).unwrap_err();
    assert!(matches!(err, CoreError::Serde(_)));
}

#[test]
fn save_rejects_yearly_expense_without_month() {
    let mut snapshot = sample_snapshot();
    let mut renewal = RecurringExpense::yearly(1, "Insurance", 600.0, 2, 6, date(2024, 1, 1));
    renewal.month_of_year = None;
    snapshot.recurring_expenses.push(renewal);
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("snapshot.json");

    let err = JsonSnapshotSource::from_snapshot(snapshot)
        .save(&path)
        .unwrap_err();

    assert!(matches!(
        err,
        CoreError::Validation(DomainError::MissingMonthOfYear)
    ));
    assert!(!path.exists());
}

#[test]
fn failed_save_leaves_no_staging_file() {
    let temp = assert_fs::TempDir::new().unwrap();
    let occupied = temp.child("snapshot.json");
    occupied.create_dir_all().unwrap();
    occupied.child("keep.txt").write_str("busy").unwrap();

    let err = JsonSnapshotSource::from_snapshot(sample_snapshot())
        .save(occupied.path())
        .unwrap_err();

    assert!(matches!(err, CoreError::Io(_)));
    assert!(!temp.path().join("snapshot.json.tmp").exists());
    assert!(occupied.path().is_dir());
}
