use thiserror::Error;

/// Failures raised by key-value backends and the config file.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Conditions a finance store operation reports back to its caller.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(
        "Cannot delete category `{category_id}`: it is used by {transactions} transaction(s)"
    )]
    CategoryInUse {
        category_id: String,
        transactions: usize,
    },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type StoreResult<T> = Result<T, StoreError>;
