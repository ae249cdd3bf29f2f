#![doc(test(attr(deny(warnings))))]

//! Connelaide core: pay-period budget aggregation and chunked transaction
//! history over a pluggable data source.

pub mod cli;
pub mod core;
pub mod storage;
pub mod utils;

pub use connelaide_config as config;
pub use connelaide_domain as domain;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing with the default filter and emits a startup log.
pub fn init() {
    init_with_filter(None);
}

/// Like [`init`], but honours a filter from configuration when `RUST_LOG` is unset.
pub fn init_with_filter(filter: Option<&str>) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing(filter);
        tracing::info!("Connelaide core tracing initialized.");
    });
}
