use chrono::NaiveDate;

use super::transaction::{Transaction, TransactionType};

/// Restricts a view to one transaction type, or none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(TransactionType),
}

impl TypeFilter {
    pub fn matches(self, transaction_type: TransactionType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(wanted) => wanted == transaction_type,
        }
    }
}

/// Restricts a view to one category id, or none.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn only(id: impl Into<String>) -> Self {
        CategoryFilter::Only(id.into())
    }

    pub fn matches(&self, category_id: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category_id,
        }
    }
}

/// Query over transactions. Session state only; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterOptions {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub transaction_type: TypeFilter,
    pub category: CategoryFilter,
}

impl FilterOptions {
    /// Date bounds are inclusive; unset bounds and `All` impose nothing.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if self.start_date.is_some_and(|start| transaction.date < start) {
            return false;
        }
        if self.end_date.is_some_and(|end| transaction.date > end) {
            return false;
        }
        self.transaction_type.matches(transaction.transaction_type)
            && self.category.matches(&transaction.category_id)
    }

    pub fn is_default(&self) -> bool {
        *self == FilterOptions::default()
    }

    /// Overwrites only the fields present in `update`.
    pub fn apply(&mut self, update: FilterUpdate) {
        if let Some(start) = update.start_date {
            self.start_date = start;
        }
        if let Some(end) = update.end_date {
            self.end_date = end;
        }
        if let Some(transaction_type) = update.transaction_type {
            self.transaction_type = transaction_type;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
    }
}

/// Partial filter change. Outer `None` leaves a field alone; for dates,
/// `Some(None)` clears the bound.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterUpdate {
    pub start_date: Option<Option<NaiveDate>>,
    pub end_date: Option<Option<NaiveDate>>,
    pub transaction_type: Option<TypeFilter>,
    pub category: Option<CategoryFilter>,
}

impl FilterUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_date(mut self, date: Option<NaiveDate>) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn end_date(mut self, date: Option<NaiveDate>) -> Self {
        self.end_date = Some(date);
        self
    }

    pub fn transaction_type(mut self, filter: TypeFilter) -> Self {
        self.transaction_type = Some(filter);
        self
    }

    pub fn category(mut self, filter: CategoryFilter) -> Self {
        self.category = Some(filter);
        self
    }
}
