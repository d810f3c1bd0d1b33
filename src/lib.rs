#![doc(test(attr(deny(warnings))))]

//! Expense Core is the ledger engine behind a single-user expense tracker:
//! flat-file persistence for categorized expenses and a budget, plus the
//! budget-remaining summary math and an interactive CLI front-end.

pub mod cli;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod summary;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Core tracing initialized.");
    });
}
