//! Read-side helpers for transaction lists.

use crate::ledger::{FilterOptions, Transaction};

pub struct TransactionService;

impl TransactionService {
    /// Transactions matching every constraint in `options`, in input order.
    pub fn filter(transactions: &[Transaction], options: &FilterOptions) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|txn| options.matches(txn))
            .cloned()
            .collect()
    }

    /// Newest `date` first; ties keep their input order.
    pub fn sorted_newest_first(transactions: &[Transaction]) -> Vec<Transaction> {
        let mut sorted = transactions.to_vec();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    /// The `limit` most recent transactions by date.
    pub fn recent(transactions: &[Transaction], limit: usize) -> Vec<Transaction> {
        let mut sorted = Self::sorted_newest_first(transactions);
        sorted.truncate(limit);
        sorted
    }
}
