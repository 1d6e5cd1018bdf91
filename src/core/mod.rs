pub mod finance_store;
pub mod services;
pub mod utils;

pub use finance_store::FinanceStore;
