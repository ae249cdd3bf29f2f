//! connelaide-domain
//!
//! Pure data models exchanged with the Connelaide backend (transactions,
//! projected and recurring expenses, categories, pay periods).
//! No I/O, no logging, no storage. Only data types, predicates and patches.

pub mod category;
pub mod common;
pub mod error;
pub mod pay_period;
pub mod projected_expense;
pub mod recurring;
pub mod snapshot;
pub mod transaction;
pub mod window;

pub use category::*;
pub use common::*;
pub use error::DomainError;
pub use pay_period::*;
pub use projected_expense::*;
pub use recurring::*;
pub use snapshot::Snapshot;
pub use transaction::*;
pub use window::DateWindow;
