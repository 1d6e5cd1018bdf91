//! Persistence adapter over a durable key-value store.
//!
//! The adapter only moves serialized snapshots in and out. Read failures fall
//! back to empty or default collections and write failures are logged and
//! swallowed, so the in-memory state stays authoritative for the session.

pub mod json_backend;
pub mod memory_backend;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error, warn};

use crate::errors::StorageError;
use crate::ledger::{default_categories, Category, Transaction};

pub use json_backend::JsonFileStore;
pub use memory_backend::MemoryStore;

pub type Result<T> = std::result::Result<T, StorageError>;

pub const TRANSACTIONS_KEY: &str = "finance_tracker_transactions";
pub const CATEGORIES_KEY: &str = "finance_tracker_categories";

/// Durable get/set/remove by key.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    /// Removing a key that does not exist is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Loads and saves the transaction and category records.
pub struct FinanceStorage {
    backend: Box<dyn KeyValueStore>,
}

impl FinanceStorage {
    pub fn new(backend: Box<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Adapter over a fresh in-memory backend.
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }

    pub fn backend(&self) -> &dyn KeyValueStore {
        self.backend.as_ref()
    }

    /// Stored transactions, or an empty list when missing or unreadable.
    ///
    /// Individual records that fail to parse are skipped so one bad entry
    /// does not hide the rest.
    pub fn load_transactions(&self) -> Vec<Transaction> {
        let records: Vec<serde_json::Value> =
            self.load_record(TRANSACTIONS_KEY).unwrap_or_default();
        records
            .into_iter()
            .enumerate()
            .filter_map(|(idx, record)| match serde_json::from_value(record) {
                Ok(transaction) => Some(transaction),
                Err(err) => {
                    warn!("skipping stored transaction #{}: {}", idx, err);
                    None
                }
            })
            .collect()
    }

    pub fn save_transactions(&self, transactions: &[Transaction]) {
        self.save_record(TRANSACTIONS_KEY, transactions);
    }

    /// Stored categories, or the built-in defaults when missing or unreadable.
    pub fn load_categories(&self) -> Vec<Category> {
        self.load_record(CATEGORIES_KEY)
            .unwrap_or_else(default_categories)
    }

    pub fn save_categories(&self, categories: &[Category]) {
        self.save_record(CATEGORIES_KEY, categories);
    }

    /// Removes both records unconditionally.
    pub fn clear_all(&self) {
        for key in [TRANSACTIONS_KEY, CATEGORIES_KEY] {
            if let Err(err) = self.backend.remove(key) {
                error!("failed to clear `{}`: {}", key, err);
            }
        }
    }

    fn load_record<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.backend.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("no stored value for `{}`", key);
                return None;
            }
            Err(err) => {
                warn!("failed to read `{}`: {}", key, err);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!("stored value for `{}` is malformed: {}", key, err);
                None
            }
        }
    }

    fn save_record<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(err) => {
                error!("failed to serialize `{}`: {}", key, err);
                return;
            }
        };
        if let Err(err) = self.backend.set(key, &json) {
            error!("failed to save `{}`: {}", key, err);
        }
    }
}
