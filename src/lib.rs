#![doc(test(attr(deny(warnings))))]

//! Agro Core computes the cost imputation and period rollups behind the farm
//! dashboards: per-lote costs, supplier spend, cashflow, category evolution,
//! campaign comparisons and the bank-credit summary.

pub mod clock;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

pub use errors::{AgroError, Result};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!(
            version = utils::build_info::current().version,
            "Agro Core tracing initialized."
        );
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
