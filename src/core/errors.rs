use std::result::Result as StdResult;

use connelaide_config::ConfigError;
use connelaide_domain::DomainError;
use thiserror::Error;

/// Unified error type for the data-source, configuration and service layers.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Snapshot format error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Validation failed: {0}")]
    Validation(#[from] DomainError),
    #[error("Category not found: {name}{}", suggestion_hint(.suggestion))]
    CategoryNotFound {
        name: String,
        suggestion: Option<String>,
    },
    #[error("Pay period not found: {0}")]
    PayPeriodNotFound(i64),
}

pub type Result<T> = StdResult<T, CoreError>;

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(name) => format!(" (did you mean `{name}`?)"),
        None => String::new(),
    }
}
