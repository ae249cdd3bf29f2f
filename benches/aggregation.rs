use chrono::{Duration, NaiveDate};
use connelaide_core::{
    core::services::{BudgetService, ChunkService},
    domain::{Category, CheckingImpact, PayPeriod, ProjectedExpense, Snapshot, Transaction},
    storage::{load_snapshot_from_path, save_snapshot_to_path},
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tempfile::tempdir;

fn build_history(txn_count: usize) -> Snapshot {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let impacts = [
        CheckingImpact::True,
        CheckingImpact::False,
        CheckingImpact::ReviewRequired,
    ];

    let transactions = (0..txn_count)
        .map(|idx| {
            let mut txn = Transaction::new(
                idx as i64,
                start + Duration::days((idx % 365) as i64),
                -(5.0 + (idx % 100) as f64),
            )
            .with_category((idx % 20) as i64)
            .with_impact(impacts[idx % impacts.len()]);
            if idx % 7 == 0 {
                txn.edited_amount = Some(txn.amount * 0.9);
            }
            txn
        })
        .collect();
    let projected_expenses = (0..txn_count / 10)
        .map(|idx| {
            ProjectedExpense::new(
                idx as i64,
                format!("Bill {idx}"),
                start + Duration::days((idx % 365) as i64),
                40.0,
            )
            .with_category((idx % 20) as i64)
        })
        .collect();
    let categories = (0..20)
        .map(|id| Category::new(id, format!("Category {id:02}")).with_target_budget(250.0))
        .collect();

    Snapshot {
        transactions,
        projected_expenses,
        categories,
        pay_periods: vec![PayPeriod::new(1, start, start + Duration::days(364))
            .with_checking_budget(50_000.0)],
        recurring_expenses: Vec::new(),
    }
}

fn bench_aggregate(c: &mut Criterion) {
    let snapshot = build_history(black_box(10_000));
    let period = snapshot.pay_periods[0].clone();

    c.bench_function("aggregate_10k", |b| {
        b.iter(|| {
            let summary = BudgetService::aggregate(
                &snapshot.transactions,
                &snapshot.projected_expenses,
                &snapshot.categories,
                Some(&period),
            );
            black_box(summary);
        })
    });

    c.bench_function("group_into_chunks_10k", |b| {
        b.iter(|| black_box(ChunkService::group_into_chunks(&snapshot.transactions, 14)))
    });
}

fn bench_snapshot_io(c: &mut Criterion) {
    let snapshot = build_history(black_box(10_000));
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("snapshot.json");
    save_snapshot_to_path(&snapshot, &path).expect("seed");

    c.bench_function("snapshot_load_10k", |b| {
        b.iter(|| black_box(load_snapshot_from_path(&path).expect("load snapshot")))
    });
}

criterion_group!(benches, bench_aggregate, bench_snapshot_io);
criterion_main!(benches);
