use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ConfigError;

/// Stores user preferences for currency display, paging and logging.
///
/// Amounts and dates always render in en-US conventions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub currency: String,
    /// Length in days of the rolling chunks used to group a flat history.
    #[serde(default = "Config::default_chunk_days")]
    pub chunk_days: u32,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Snapshot file read when a command is not given one explicitly.
    pub snapshot_path: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// `tracing` filter directive, e.g. `connelaide_core=debug`.
    pub log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: "USD".into(),
            chunk_days: Self::default_chunk_days(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            snapshot_path: None,
            log_filter: None,
        }
    }
}

impl Config {
    pub fn default_chunk_days() -> u32 {
        14
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_days == 0 {
            return Err(ConfigError::Invalid {
                key: "chunk_days",
                reason: "must be at least 1".into(),
            });
        }
        if self.currency.trim().len() != 3 {
            return Err(ConfigError::Invalid {
                key: "currency",
                reason: format!("`{}` is not a three-letter currency code", self.currency),
            });
        }
        Ok(())
    }

    /// Resolves the snapshot file against `base`, defaulting to `snapshot.json` there.
    pub fn resolve_snapshot_path(&self, base: &std::path::Path) -> PathBuf {
        match &self.snapshot_path {
            Some(path) if path.is_relative() => base.join(path),
            Some(path) => path.clone(),
            None => base.join("snapshot.json"),
        }
    }
}
