//! Finance data model: transactions, categories, filters and derived summaries.

pub mod category;
pub mod filter;
pub mod summary;
pub mod transaction;

pub use category::{default_categories, Category, CategoryKind, NewCategory, UNKNOWN_CATEGORY_ID};
pub use filter::{CategoryFilter, FilterOptions, FilterUpdate, TypeFilter};
pub use summary::{
    CategoryBreakdown, CategorySummary, FinancialSummary, MonthKey, MonthlyTotals,
    MonthlyTrendPoint,
};
pub use transaction::{NewTransaction, Transaction, TransactionType};
