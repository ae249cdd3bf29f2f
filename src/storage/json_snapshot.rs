use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use connelaide_domain::{
    Category, DateWindow, PayPeriod, ProjectedExpense, RecurringExpense, Snapshot, Transaction,
};

use super::{within_window, DataSource};
use crate::core::errors::CoreError;

const TMP_SUFFIX: &str = "tmp";

/// Serves a JSON snapshot of the backend collections from memory.
#[derive(Debug, Clone, Default)]
pub struct JsonSnapshotSource {
    snapshot: Snapshot,
}

impl JsonSnapshotSource {
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    pub fn open(path: &Path) -> Result<Self, CoreError> {
        let snapshot = load_snapshot_from_path(path)?;
        tracing::info!(
            path = %path.display(),
            transactions = snapshot.transactions.len(),
            projected = snapshot.projected_expenses.len(),
            pay_periods = snapshot.pay_periods.len(),
            "loaded snapshot"
        );
        Ok(Self::from_snapshot(snapshot))
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Checks every recurring-expense template, reporting the first broken rule.
    pub fn validate(&self) -> Result<(), CoreError> {
        for expense in &self.snapshot.recurring_expenses {
            expense.validate().inspect_err(|err| {
                tracing::warn!(recurring_expense = expense.id, %err, "invalid recurring expense");
            })?;
        }
        Ok(())
    }

    /// Validates, then writes the snapshot atomically.
    pub fn save(&self, path: &Path) -> Result<(), CoreError> {
        self.validate()?;
        save_snapshot_to_path(&self.snapshot, path)
    }
}

impl DataSource for JsonSnapshotSource {
    fn pay_periods(&self) -> Result<Vec<PayPeriod>, CoreError> {
        Ok(self.snapshot.pay_periods.clone())
    }

    fn categories(&self) -> Result<Vec<Category>, CoreError> {
        Ok(self.snapshot.categories.clone())
    }

    fn recurring_expenses(&self) -> Result<Vec<RecurringExpense>, CoreError> {
        Ok(self.snapshot.recurring_expenses.clone())
    }

    fn transactions(&self, window: &DateWindow) -> Result<Vec<Transaction>, CoreError> {
        Ok(within_window(&self.snapshot.transactions, window))
    }

    fn projected_expenses(&self, window: &DateWindow) -> Result<Vec<ProjectedExpense>, CoreError> {
        Ok(within_window(&self.snapshot.projected_expenses, window))
    }
}

/// Reads a snapshot, returning structured errors on failure.
pub fn load_snapshot_from_path(path: &Path) -> Result<Snapshot, CoreError> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// Writes a snapshot through a sibling `.tmp` file renamed over `path`.
pub fn save_snapshot_to_path(snapshot: &Snapshot, path: &Path) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_vec_pretty(snapshot)?;
    let staged = staging_path(path);
    let written = File::create(&staged)
        .and_then(|mut file| {
            file.write_all(&json)?;
            file.sync_all()
        })
        .and_then(|()| fs::rename(&staged, path));
    if let Err(err) = written {
        let _ = fs::remove_file(&staged);
        return Err(err.into());
    }
    tracing::debug!(path = %path.display(), bytes = json.len(), "saved snapshot");
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut staged = path.as_os_str().to_owned();
    staged.push(".");
    staged.push(TMP_SUFFIX);
    PathBuf::from(staged)
}
