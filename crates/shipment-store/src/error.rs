use thiserror::Error;

/// Errors that can occur when interacting with a shipment or location store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not be reached or refused the operation.
    /// Transient; the caller's unit of work aborts and nothing is persisted.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
