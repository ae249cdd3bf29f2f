pub mod errors;
pub mod format;
pub mod reports;
pub mod services;
pub mod time;

pub use errors::{CoreError, Result};
