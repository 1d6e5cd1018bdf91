use chrono::Utc;
use tracing::{debug, info, warn};

use crate::core::services::{CategoryService, TransactionService};
use crate::core::utils::generate_id;
use crate::errors::{StoreError, StoreResult};
use crate::ledger::{
    Category, FilterOptions, FilterUpdate, NewCategory, NewTransaction, Transaction,
};
use crate::storage::{FinanceStorage, JsonFileStore};

/// Authoritative holder of transactions, categories and the session filter.
///
/// Every mutation updates memory first and then writes the full collection
/// through the persistence adapter. A failed write is logged there and never
/// undoes the in-memory change.
pub struct FinanceStore {
    transactions: Vec<Transaction>,
    categories: Vec<Category>,
    filter: FilterOptions,
    storage: FinanceStorage,
}

impl FinanceStore {
    /// Loads both collections from `storage`.
    pub fn open(storage: FinanceStorage) -> Self {
        let transactions = storage.load_transactions();
        let categories = storage.load_categories();
        info!(
            "finance store opened with {} transaction(s) and {} category(ies)",
            transactions.len(),
            categories.len()
        );
        Self {
            transactions,
            categories,
            filter: FilterOptions::default(),
            storage,
        }
    }

    /// Opens the store backed by JSON files in the default data directory.
    pub fn open_default() -> StoreResult<Self> {
        let backend = JsonFileStore::new_default()?;
        Ok(Self::open(FinanceStorage::new(Box::new(backend))))
    }

    pub fn storage(&self) -> &FinanceStorage {
        &self.storage
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn filter_options(&self) -> &FilterOptions {
        &self.filter
    }

    pub fn transaction(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        CategoryService::find(id, &self.categories)
    }

    /// Transactions matching the current filter.
    pub fn filtered_transactions(&self) -> Vec<Transaction> {
        TransactionService::filter(&self.transactions, &self.filter)
    }

    /// Appends a transaction with a fresh id and creation time.
    ///
    /// The payload is stored as given; amount validation belongs to the caller.
    pub fn add_transaction(&mut self, data: NewTransaction) -> Transaction {
        let transaction = Transaction::from_new(data, generate_id(), Utc::now());
        debug!("adding transaction {}", transaction.id);
        self.transactions.push(transaction.clone());
        self.storage.save_transactions(&self.transactions);
        transaction
    }

    /// Replaces the record with the same id. Returns `false` when none exists.
    pub fn update_transaction(&mut self, transaction: Transaction) -> bool {
        let Some(slot) = self
            .transactions
            .iter_mut()
            .find(|existing| existing.id == transaction.id)
        else {
            debug!("update ignored: transaction {} not found", transaction.id);
            return false;
        };
        debug!("updating transaction {}", transaction.id);
        *slot = transaction;
        self.storage.save_transactions(&self.transactions);
        true
    }

    /// Removes the record with `id`. Returns `false` when none exists.
    pub fn delete_transaction(&mut self, id: &str) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|txn| txn.id != id);
        if self.transactions.len() == before {
            debug!("delete ignored: transaction {} not found", id);
            return false;
        }
        debug!("deleted transaction {}", id);
        self.storage.save_transactions(&self.transactions);
        true
    }

    pub fn add_category(&mut self, data: NewCategory) -> Category {
        let category = Category::from_new(data, generate_id());
        debug!("adding category {} ({})", category.id, category.name);
        self.categories.push(category.clone());
        self.storage.save_categories(&self.categories);
        category
    }

    /// Replaces the category with the same id. Returns `false` when none exists.
    pub fn update_category(&mut self, category: Category) -> bool {
        let Some(slot) = self
            .categories
            .iter_mut()
            .find(|existing| existing.id == category.id)
        else {
            debug!("update ignored: category {} not found", category.id);
            return false;
        };
        debug!("updating category {}", category.id);
        *slot = category;
        self.storage.save_categories(&self.categories);
        true
    }

    /// Removes a category unless a transaction still references it.
    ///
    /// Returns `Ok(false)` when no category has `id`.
    pub fn delete_category(&mut self, id: &str) -> StoreResult<bool> {
        let in_use = CategoryService::usage_count(id, &self.transactions);
        if in_use > 0 {
            warn!(
                "refusing to delete category {}: referenced by {} transaction(s)",
                id, in_use
            );
            return Err(StoreError::CategoryInUse {
                category_id: id.to_string(),
                transactions: in_use,
            });
        }
        let before = self.categories.len();
        self.categories.retain(|category| category.id != id);
        if self.categories.len() == before {
            debug!("delete ignored: category {} not found", id);
            return Ok(false);
        }
        debug!("deleted category {}", id);
        self.storage.save_categories(&self.categories);
        Ok(true)
    }

    /// Merges the given fields into the current filter.
    pub fn set_filter(&mut self, update: FilterUpdate) {
        self.filter.apply(update);
    }

    pub fn reset_filter(&mut self) {
        self.filter = FilterOptions::default();
    }

    /// Wipes persisted data and returns to a fresh session state.
    pub fn reset(&mut self) {
        info!("resetting all finance data");
        self.storage.clear_all();
        self.transactions = self.storage.load_transactions();
        self.categories = self.storage.load_categories();
        self.filter = FilterOptions::default();
    }
}
