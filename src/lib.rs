#![doc(test(attr(deny(warnings))))]

//! Finance Core keeps a personal ledger of income and expense transactions,
//! persists it to a local key-value store, and derives the totals, category
//! breakdowns and monthly trends a finance dashboard displays.
//!
//! ```
//! use chrono::NaiveDate;
//! use finance_core::core::services::SummaryService;
//! use finance_core::core::FinanceStore;
//! use finance_core::ledger::NewTransaction;
//! use finance_core::storage::FinanceStorage;
//!
//! let mut store = FinanceStore::open(FinanceStorage::in_memory());
//! let day = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
//! store.add_transaction(NewTransaction::income(100.0, "salary", day));
//! store.add_transaction(NewTransaction::expense(40.0, "food", day));
//!
//! let summary = SummaryService::summarize(store.transactions());
//! assert_eq!(summary.balance, 60.0);
//! ```

pub mod config;
pub mod core;
pub mod currency;
pub mod errors;
pub mod forms;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finance Core tracing initialized.");
    });
}
