//! Stateless derivations over the store's collections. Everything here is
//! pure and recomputed on each read.

pub mod category_service;
pub mod summary_service;
pub mod transaction_service;

pub use category_service::CategoryService;
pub use summary_service::SummaryService;
pub use transaction_service::TransactionService;
