use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("key not found: {0}")]
    NotFound(String),

    #[error("data source unavailable: {0}")]
    Unavailable(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    /// The source moved to another height between two reads of one snapshot.
    #[error("ledger moved from height {requested} to {current}")]
    Stale { requested: u64, current: u64 },
}
