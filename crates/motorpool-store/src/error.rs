/// Errors from document store operations.
///
/// Every variant means "the store is unavailable" to the user-facing
/// layers; the distinctions matter only for logs and diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted document exists but cannot be decoded.
    #[error("corrupt document under key {key:?}: {reason}")]
    Corrupt { key: String, reason: String },

    /// Serialization failure while writing a document.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
