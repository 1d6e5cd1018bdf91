#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{NaiveDate, TimeZone, Utc};
use finance_core::{
    core::FinanceStore,
    ledger::{NewTransaction, Transaction},
    storage::{FinanceStorage, JsonFileStore},
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// A unique directory that outlives the calling test.
pub fn temp_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

pub fn json_storage(dir: &Path) -> FinanceStorage {
    let backend = JsonFileStore::new(dir.join("data")).expect("create json store");
    FinanceStorage::new(Box::new(backend))
}

/// Store over a fresh JSON directory, returned with that directory for reopening.
pub fn setup_json_store() -> (FinanceStore, PathBuf) {
    let dir = temp_dir();
    (FinanceStore::open(json_storage(&dir)), dir)
}

fn record(id: &str, data: NewTransaction) -> Transaction {
    let created = Utc
        .with_ymd_and_hms(2024, 2, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp");
    Transaction::from_new(data, id.to_string(), created)
}

/// Salary 100 on Jan 5, food 40 on Jan 10, food 20 on Feb 2 (2024).
pub fn worked_example() -> Vec<Transaction> {
    vec![
        record("t1", NewTransaction::income(100.0, "salary", date(2024, 1, 5))),
        record("t2", NewTransaction::expense(40.0, "food", date(2024, 1, 10))),
        record("t3", NewTransaction::expense(20.0, "food", date(2024, 2, 2))),
    ]
}

/// A spread of expenses over several categories and months.
pub fn mixed_ledger() -> Vec<Transaction> {
    let mut txns = worked_example();
    txns.push(record("t4", NewTransaction::expense(75.5, "housing", date(2024, 2, 14))));
    txns.push(record("t5", NewTransaction::expense(12.25, "travel", date(2024, 3, 1))));
    txns.push(record("t6", NewTransaction::income(30.0, "investment", date(2024, 3, 31))));
    txns.push(record("t7", NewTransaction::expense(9.99, "shopping", date(2023, 12, 31))));
    txns
}
